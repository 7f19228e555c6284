//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they render caller-supplied data and report
//! user intent through callbacks. The render boundary is the only one that
//! keeps state of its own.

pub mod layout_shell;
pub mod persona_selector;
pub mod render_boundary;
pub mod site_footer;
pub mod status_pill;
