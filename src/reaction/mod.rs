//! Idempotent toggle of the viewer's reaction on an issue.
//!
//! The toggle reads whether the viewer already reacted, then adds or removes
//! the reaction accordingly. Another client changing the reaction between the
//! read and the write is not detected.

pub mod service;
pub mod toggle;

pub use service::{ReactionToggle, ToggleOutcome};
pub use toggle::ToggleAction;
