//! Archive decisions and the action taken on a "yes".

use async_trait::async_trait;
use tracing::info;

use crate::error::TidyError;
use crate::github::gateway::RepositoryArchiveGateway;
use crate::github::models::RepositorySummary;

/// Answer recorded for one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveDecision {
    /// Repository the answer applies to.
    pub target: RepositorySummary,
    /// Whether the operator chose to archive it.
    pub archive: bool,
}

/// Side effect run for every decision with `archive == true`.
#[async_trait]
pub trait Archiver: Send + Sync {
    /// Acts on a positive decision.
    async fn archive(&self, decision: &ArchiveDecision) -> Result<(), TidyError>;
}

/// Logs the intent to archive without touching GitHub.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingArchiver;

#[async_trait]
impl Archiver for LoggingArchiver {
    async fn archive(&self, decision: &ArchiveDecision) -> Result<(), TidyError> {
        info!(
            repository = decision.target.full_name.as_str(),
            "will archive"
        );
        Ok(())
    }
}

/// Archives through the GitHub API.
pub struct GatewayArchiver<'client, Gateway>
where
    Gateway: RepositoryArchiveGateway,
{
    gateway: &'client Gateway,
}

impl<'client, Gateway> GatewayArchiver<'client, Gateway>
where
    Gateway: RepositoryArchiveGateway,
{
    /// Creates an archiver backed by `gateway`.
    #[must_use]
    pub const fn new(gateway: &'client Gateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<Gateway> Archiver for GatewayArchiver<'_, Gateway>
where
    Gateway: RepositoryArchiveGateway,
{
    async fn archive(&self, decision: &ArchiveDecision) -> Result<(), TidyError> {
        let full_name = decision.target.full_name.as_str();
        self.gateway.archive_repository(full_name).await?;
        info!(repository = full_name, "archived repository");
        Ok(())
    }
}
