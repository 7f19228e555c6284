//! Render-boundary state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! A boundary wraps a fallible render closure. The first `Err` it observes
//! flips it to `Failed`, and it stays there until the user explicitly resets
//! it. The reactive component in `components::render_boundary` drives this
//! model; everything here is plain data so it can be tested without a
//! reactive runtime.

#[cfg(test)]
#[path = "boundary_test.rs"]
mod boundary_test;

/// Message shown when a failure carries no usable text.
pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred.";

/// A failure raised while constructing a wrapped subtree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RenderError {
    message: String,
    context: Option<String>,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), context: None }
    }

    /// Attach a hint about where the failure happened (component, data key).
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Capture an arbitrary error, folding its source chain into `context`.
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut chain = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            chain.push(cause.to_string());
            source = cause.source();
        }
        Self {
            message: err.to_string(),
            context: if chain.is_empty() { None } else { Some(chain.join(": ")) },
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

/// Text for the fallback panel: the failure's message, or a generic one when blank.
pub fn fallback_message(err: &RenderError) -> &str {
    let message = err.message().trim();
    if message.is_empty() { GENERIC_FAILURE_MESSAGE } else { message }
}

/// Boundary lifecycle. `Failed` is sticky until [`BoundaryState::reset`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BoundaryState {
    #[default]
    Normal,
    Failed(RenderError),
}

/// Result of one render attempt through a boundary.
#[derive(Debug, PartialEq, Eq)]
pub enum RenderOutcome<V> {
    /// The subtree rendered normally.
    Rendered(V),
    /// The subtree failed on this attempt; the boundary just moved to `Failed`.
    Captured(RenderError),
    /// The boundary was already failed; the subtree was not attempted.
    Failed(RenderError),
}

impl BoundaryState {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Record a failure. Returns `true` when this moved the boundary out of `Normal`.
    pub fn capture(&mut self, err: RenderError) -> bool {
        let transitioned = !self.is_failed();
        *self = Self::Failed(err);
        transitioned
    }

    /// Clear any stored failure so the next attempt renders the subtree again.
    pub fn reset(&mut self) {
        *self = Self::Normal;
    }

    /// Run `render` unless the boundary is already failed.
    pub fn attempt<V>(&mut self, render: impl FnOnce() -> Result<V, RenderError>) -> RenderOutcome<V> {
        if let Self::Failed(err) = self {
            return RenderOutcome::Failed(err.clone());
        }
        match render() {
            Ok(view) => RenderOutcome::Rendered(view),
            Err(err) => {
                self.capture(err.clone());
                RenderOutcome::Captured(err)
            }
        }
    }
}
