//! GraphQL-backed gateway for the viewer's reaction on an issue.
//!
//! The state query and the mutations are separate requests. GitHub offers no
//! compare-and-set for reactions, so a change made by another client between
//! the query and the mutation goes undetected.

use async_trait::async_trait;
use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::TidyError;
use crate::github::locator::{ApiBase, IssueLocator, PersonalAccessToken};
use crate::github::models::{IssueId, ReactionContent, ReactionGroupSummary, ReactionState};

use super::ReactionGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;

mod queries;

use queries::{
    ADD_REACTION_MUTATION, AddReactionData, GraphQlResponse, REACTION_STATE_QUERY,
    REMOVE_REACTION_MUTATION, ReactionStateData, RemoveReactionData,
};

/// Octocrab-backed reaction gateway using the GraphQL endpoint.
pub struct OctocrabReactionGateway {
    client: Octocrab,
}

impl OctocrabReactionGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and API base.
    ///
    /// Passing `None` yields an unauthenticated client.
    ///
    /// # Errors
    ///
    /// Returns `TidyError::InvalidUrl` when the base URI cannot be parsed or
    /// `TidyError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: Option<&PersonalAccessToken>,
        api_base: &ApiBase,
    ) -> Result<Self, TidyError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab))
    }

    async fn execute<T>(&self, operation: &str, payload: &serde_json::Value) -> Result<T, TidyError>
    where
        T: DeserializeOwned + Send,
    {
        let response: GraphQlResponse<T> = self
            .client
            .graphql(payload)
            .await
            .map_err(|error| map_octocrab_error(operation, &error))?;

        if !response.errors.is_empty() {
            let message = response
                .errors
                .iter()
                .map(|error| error.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(TidyError::GraphQl {
                operation: operation.to_owned(),
                message,
            });
        }

        response.data.ok_or_else(|| TidyError::GraphQl {
            operation: operation.to_owned(),
            message: "response contained no data".to_owned(),
        })
    }
}

fn mutation_payload(document: &str, issue_id: &IssueId, content: ReactionContent) -> serde_json::Value {
    json!({
        "query": document,
        "variables": {
            "subjectId": issue_id.as_str(),
            "content": content.as_graphql(),
        }
    })
}

#[async_trait]
impl ReactionGateway for OctocrabReactionGateway {
    async fn reaction_state(
        &self,
        issue: &IssueLocator,
        content: ReactionContent,
    ) -> Result<ReactionState, TidyError> {
        let payload = json!({
            "query": REACTION_STATE_QUERY,
            "variables": {
                "owner": issue.owner().as_str(),
                "name": issue.repository().as_str(),
                "number": issue.number().get(),
                "content": content.as_graphql(),
            }
        });

        let data: ReactionStateData = self.execute("reaction state query", &payload).await?;

        let repository = data.repository.ok_or_else(|| TidyError::NotFound {
            what: format!(
                "repository {}/{}",
                issue.owner().as_str(),
                issue.repository().as_str()
            ),
        })?;
        let issue_node = repository.issue.ok_or_else(|| TidyError::NotFound {
            what: format!(
                "issue #{} in {}/{}",
                issue.number().get(),
                issue.owner().as_str(),
                issue.repository().as_str()
            ),
        })?;

        Ok(ReactionState {
            issue_id: IssueId::new(issue_node.id),
            viewer_has_reacted: issue_node.reactions.viewer_has_reacted,
        })
    }

    async fn add_reaction(
        &self,
        issue_id: &IssueId,
        content: ReactionContent,
    ) -> Result<Vec<ReactionGroupSummary>, TidyError> {
        let payload = mutation_payload(ADD_REACTION_MUTATION, issue_id, content);
        let data: AddReactionData = self.execute("add reaction", &payload).await?;

        Ok(data
            .add_reaction
            .map(queries::ReactionPayload::into_groups)
            .unwrap_or_default())
    }

    async fn remove_reaction(
        &self,
        issue_id: &IssueId,
        content: ReactionContent,
    ) -> Result<Vec<ReactionGroupSummary>, TidyError> {
        let payload = mutation_payload(REMOVE_REACTION_MUTATION, issue_id, content);
        let data: RemoveReactionData = self.execute("remove reaction", &payload).await?;

        Ok(data
            .remove_reaction
            .map(queries::ReactionPayload::into_groups)
            .unwrap_or_default())
    }
}
