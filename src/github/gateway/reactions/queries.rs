//! GraphQL documents and response shapes for issue reactions.

use serde::Deserialize;
use tracing::debug;

use crate::github::models::{ReactionContent, ReactionGroupSummary};

pub(super) const REACTION_STATE_QUERY: &str = r"
query ReactionState($owner: String!, $name: String!, $number: Int!, $content: ReactionContent!) {
  repository(owner: $owner, name: $name) {
    issue(number: $number) {
      id
      reactions(content: $content) {
        viewerHasReacted
      }
    }
  }
}
";

pub(super) const ADD_REACTION_MUTATION: &str = r"
mutation AddReaction($subjectId: ID!, $content: ReactionContent!) {
  addReaction(input: { subjectId: $subjectId, content: $content }) {
    subject {
      reactionGroups {
        content
        reactors {
          totalCount
        }
      }
    }
  }
}
";

pub(super) const REMOVE_REACTION_MUTATION: &str = r"
mutation RemoveReaction($subjectId: ID!, $content: ReactionContent!) {
  removeReaction(input: { subjectId: $subjectId, content: $content }) {
    subject {
      reactionGroups {
        content
        reactors {
          totalCount
        }
      }
    }
  }
}
";

/// Envelope of every GraphQL response.
#[derive(Debug, Deserialize)]
pub(super) struct GraphQlResponse<T> {
    pub(super) data: Option<T>,
    #[serde(default)]
    pub(super) errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GraphQlError {
    pub(super) message: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ReactionStateData {
    pub(super) repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RepositoryNode {
    pub(super) issue: Option<IssueNode>,
}

#[derive(Debug, Deserialize)]
pub(super) struct IssueNode {
    pub(super) id: String,
    pub(super) reactions: ReactionConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ReactionConnection {
    pub(super) viewer_has_reacted: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AddReactionData {
    pub(super) add_reaction: Option<ReactionPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RemoveReactionData {
    pub(super) remove_reaction: Option<ReactionPayload>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ReactionPayload {
    pub(super) subject: Option<ReactableNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ReactableNode {
    #[serde(default)]
    pub(super) reaction_groups: Option<Vec<ReactionGroupNode>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ReactionGroupNode {
    /// Kept as text so contents added to the schema later do not fail the
    /// whole response.
    pub(super) content: String,
    pub(super) reactors: CountNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CountNode {
    pub(super) total_count: u64,
}

impl ReactionGroupNode {
    fn into_summary(self) -> Option<ReactionGroupSummary> {
        let Ok(content) = self.content.parse::<ReactionContent>() else {
            debug!(content = %self.content, "skipping unrecognised reaction group");
            return None;
        };
        Some(ReactionGroupSummary {
            content,
            user_count: self.reactors.total_count,
        })
    }
}

impl ReactionPayload {
    /// Flattens the payload into reaction group summaries.
    pub(super) fn into_groups(self) -> Vec<ReactionGroupSummary> {
        self.subject
            .and_then(|subject| subject.reaction_groups)
            .unwrap_or_default()
            .into_iter()
            .filter_map(ReactionGroupNode::into_summary)
            .collect()
    }
}
