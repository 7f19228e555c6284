//! Host configuration parsed from environment variables.
//!
//! A `.env` file in the working directory is loaded first (see `main`), so
//! every value below can also live there.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::ServerError;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Static pages (terms, privacy, refund policy) served as the router fallback.
    pub website_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `WEBSITE_DIR`: default `<crate root>/website`
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when `HOST` or `PORT` is set but malformed.
    pub fn from_env() -> Result<Self, ServerError> {
        let host = parse_host(std::env::var("HOST").ok().as_deref())?;
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let website_dir = std::env::var("WEBSITE_DIR").map_or_else(|_| default_website_dir(), PathBuf::from);

        Ok(Self { addr: SocketAddr::new(host, port), website_dir })
    }
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_HOST),
        Some(value) => value.parse().map_err(|e: std::net::AddrParseError| ServerError::Config {
            var: "HOST",
            value: value.to_owned(),
            reason: e.to_string(),
        }),
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|e: std::num::ParseIntError| ServerError::Config {
            var: "PORT",
            value: value.to_owned(),
            reason: e.to_string(),
        }),
    }
}

fn default_website_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("website")
}
