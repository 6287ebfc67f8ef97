//! Query-then-mutate reaction toggle.

use serde::Serialize;
use tracing::info;

use crate::error::TidyError;
use crate::github::gateway::ReactionGateway;
use crate::github::locator::IssueLocator;
use crate::github::models::{IssueId, ReactionContent, ReactionGroupSummary};

use super::toggle::ToggleAction;

/// Result of one toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleOutcome {
    /// Mutation that was executed.
    pub action: ToggleAction,
    /// Reaction groups reported by GitHub after the mutation.
    pub reaction_groups: Vec<ReactionGroupSummary>,
}

/// Toggles the viewer's reaction on an issue.
///
/// State is queried on every call and never cached. The mutation only starts
/// once the query has succeeded; if the query fails nothing is mutated.
pub struct ReactionToggle<'client, Gateway>
where
    Gateway: ReactionGateway,
{
    gateway: &'client Gateway,
}

impl<'client, Gateway> ReactionToggle<'client, Gateway>
where
    Gateway: ReactionGateway,
{
    /// Creates a toggle over `gateway`.
    #[must_use]
    pub const fn new(gateway: &'client Gateway) -> Self {
        Self { gateway }
    }

    /// Reads the current state and runs the inverse mutation.
    ///
    /// # Errors
    ///
    /// Returns the query error without mutating, or the mutation error
    /// unchanged. Nothing is retried or rolled back.
    pub async fn toggle(
        &self,
        issue: &IssueLocator,
        content: ReactionContent,
    ) -> Result<ToggleOutcome, TidyError> {
        let state = self.gateway.reaction_state(issue, content).await?;
        let action = ToggleAction::for_state(&state);
        info!(
            issue = issue.number().get(),
            reaction = %content,
            viewer_has_reacted = state.viewer_has_reacted,
            action = action.as_str(),
            "toggling reaction"
        );

        let reaction_groups = self.execute(action, &state.issue_id, content).await?;
        Ok(ToggleOutcome {
            action,
            reaction_groups,
        })
    }

    /// Runs exactly one mutation for `action`.
    ///
    /// # Errors
    ///
    /// Returns the gateway error unchanged.
    pub async fn execute(
        &self,
        action: ToggleAction,
        issue_id: &IssueId,
        content: ReactionContent,
    ) -> Result<Vec<ReactionGroupSummary>, TidyError> {
        match action {
            ToggleAction::Add => self.gateway.add_reaction(issue_id, content).await,
            ToggleAction::Remove => self.gateway.remove_reaction(issue_id, content).await,
        }
    }
}
