//! GitHub access for the review and reaction flows.
//!
//! This module wraps Octocrab behind gateway traits: a REST listing of the
//! authenticated user's repositories, an optional archive call, and GraphQL
//! reaction queries and mutations. Octocrab errors are mapped into
//! [`TidyError`](crate::TidyError) variants so callers never see Octocrab
//! internals.

pub mod gateway;
pub mod locator;
pub mod models;
pub mod pagination;

pub use gateway::{
    ListRepositoriesParams, OctocrabReactionGateway, OctocrabRepositoryGateway, ReactionGateway,
    RepositoryArchiveGateway, RepositoryListingGateway, RepositoryPage,
};
pub use locator::{ApiBase, IssueLocator, IssueNumber, PersonalAccessToken};
pub use models::{
    IssueId, ReactionContent, ReactionGroupSummary, ReactionState, RepositorySummary,
};
pub use pagination::PageInfo;

#[cfg(test)]
pub use gateway::{MockReactionGateway, MockRepositoryArchiveGateway, MockRepositoryListingGateway};
