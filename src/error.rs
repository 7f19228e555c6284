//! Host error taxonomy.

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid {var}={value:?}: {reason}")]
    Config { var: &'static str, value: String, reason: String },

    /// The `[[workspace.metadata.leptos]]` settings or `LEPTOS_*` env vars are unusable.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
