//! Gateways for talking to GitHub through Octocrab.
//!
//! Each flow depends on a trait rather than on Octocrab directly, so the
//! review loop and the reaction toggle can be exercised against mocks while
//! the Octocrab implementations handle real HTTP requests.

mod client;
mod error_mapping;
mod reactions;
mod repositories;

pub use reactions::OctocrabReactionGateway;
pub use repositories::{
    ListRepositoriesParams, OctocrabRepositoryGateway, RepositoryAffiliation, RepositoryPage,
    RepositorySort, RepositoryVisibility,
};

use async_trait::async_trait;

use crate::error::TidyError;
use crate::github::locator::IssueLocator;
use crate::github::models::{IssueId, ReactionContent, ReactionGroupSummary, ReactionState};

/// Gateway listing repositories of the authenticated user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryListingGateway: Send + Sync {
    /// Fetch one page of repositories.
    async fn list_owned_repositories(
        &self,
        params: &ListRepositoriesParams,
    ) -> Result<RepositoryPage, TidyError>;
}

/// Gateway that marks a repository as archived.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryArchiveGateway: Send + Sync {
    /// Archive the repository identified by `owner/name`.
    async fn archive_repository(&self, full_name: &str) -> Result<(), TidyError>;
}

/// Gateway for reading and changing the viewer's reaction on an issue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReactionGateway: Send + Sync {
    /// Query the issue node identifier and whether the viewer already reacted
    /// with `content`.
    async fn reaction_state(
        &self,
        issue: &IssueLocator,
        content: ReactionContent,
    ) -> Result<ReactionState, TidyError>;

    /// Add the viewer's reaction and return the resulting reaction groups.
    async fn add_reaction(
        &self,
        issue_id: &IssueId,
        content: ReactionContent,
    ) -> Result<Vec<ReactionGroupSummary>, TidyError>;

    /// Remove the viewer's reaction and return the resulting reaction groups.
    async fn remove_reaction(
        &self,
        issue_id: &IssueId,
        content: ReactionContent,
    ) -> Result<Vec<ReactionGroupSummary>, TidyError>;
}
