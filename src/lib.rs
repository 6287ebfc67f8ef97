//! Tidyhub library crate for housekeeping a GitHub account.
//!
//! The library wraps Octocrab to page through the authenticated user's
//! public repositories for an interactive archive review, and to toggle the
//! viewer's reaction on an issue through GitHub's GraphQL API. Errors are
//! surfaced as [`TidyError`] values that the CLI prints before exiting.

pub mod config;
pub mod error;
pub mod github;
pub mod reaction;
pub mod review;
pub mod telemetry;

pub use config::{OperationMode, TidyhubConfig};
pub use error::TidyError;
pub use github::{
    ApiBase, IssueLocator, ListRepositoriesParams, OctocrabReactionGateway,
    OctocrabRepositoryGateway, PageInfo, PersonalAccessToken, ReactionContent,
    ReactionGroupSummary, RepositoryPage, RepositorySummary,
};
pub use reaction::{ReactionToggle, ToggleAction, ToggleOutcome};
pub use review::{
    GatewayArchiver, LinePrompt, LoggingArchiver, Prompt, ReviewReport, ReviewSession,
};
