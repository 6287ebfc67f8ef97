//! CLI operation mode handlers.
//!
//! - [`review`]: Interactive archive review of owned public repositories
//! - [`reaction`]: Toggle the viewer's reaction on one issue
//!
//! Output formatting utilities are in [`output`].

pub mod output;
pub mod reaction;
pub mod review;
