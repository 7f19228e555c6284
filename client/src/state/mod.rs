//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Plain data models with no reactive types inside, so they can be unit
//! tested directly. Components wrap them in signals where needed.

pub mod boundary;
pub mod persona;
