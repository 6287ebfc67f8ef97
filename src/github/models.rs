//! Data models for repository listings and issue reactions.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TidyError;

/// Immutable view of one repository returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySummary {
    /// `owner/name`, unique per repository.
    pub full_name: String,
    /// Whether the repository is a fork.
    pub is_fork: bool,
    /// Whether the repository is already archived.
    pub is_archived: bool,
    /// Time of the most recent push, if GitHub reports one.
    pub last_pushed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRepository {
    pub(crate) full_name: String,
    #[serde(default)]
    pub(crate) fork: bool,
    #[serde(default)]
    pub(crate) archived: bool,
    pub(crate) pushed_at: Option<DateTime<Utc>>,
}

impl From<ApiRepository> for RepositorySummary {
    fn from(value: ApiRepository) -> Self {
        Self {
            full_name: value.full_name,
            is_fork: value.fork,
            is_archived: value.archived,
            last_pushed_at: value.pushed_at,
        }
    }
}

/// GraphQL node identifier of an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueId(String);

impl IssueId {
    /// Wraps a raw node identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Reaction state observed for the current viewer on one issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionState {
    /// Node identifier used by the mutations.
    pub issue_id: IssueId,
    /// Whether the authenticated viewer already reacted with the content.
    pub viewer_has_reacted: bool,
}

/// Emoji reaction content accepted by the GitHub GraphQL API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReactionContent {
    /// 👍
    #[default]
    ThumbsUp,
    /// 👎
    ThumbsDown,
    /// 😄
    Laugh,
    /// 🎉
    Hooray,
    /// 😕
    Confused,
    /// ❤️
    Heart,
    /// 🚀
    Rocket,
    /// 👀
    Eyes,
}

impl ReactionContent {
    /// Returns the GraphQL enum value.
    #[must_use]
    pub const fn as_graphql(self) -> &'static str {
        match self {
            Self::ThumbsUp => "THUMBS_UP",
            Self::ThumbsDown => "THUMBS_DOWN",
            Self::Laugh => "LAUGH",
            Self::Hooray => "HOORAY",
            Self::Confused => "CONFUSED",
            Self::Heart => "HEART",
            Self::Rocket => "ROCKET",
            Self::Eyes => "EYES",
        }
    }
}

impl fmt::Display for ReactionContent {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_graphql())
    }
}

impl FromStr for ReactionContent {
    type Err = TidyError;

    /// Accepts GraphQL names in any case, with `-` or `_`, plus the REST
    /// aliases `+1` and `-1`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        match trimmed {
            "+1" => return Ok(Self::ThumbsUp),
            "-1" => return Ok(Self::ThumbsDown),
            _ => {}
        }

        let normalised = trimmed.to_ascii_uppercase().replace('-', "_");
        match normalised.as_str() {
            "THUMBS_UP" => Ok(Self::ThumbsUp),
            "THUMBS_DOWN" => Ok(Self::ThumbsDown),
            "LAUGH" => Ok(Self::Laugh),
            "HOORAY" => Ok(Self::Hooray),
            "CONFUSED" => Ok(Self::Confused),
            "HEART" => Ok(Self::Heart),
            "ROCKET" => Ok(Self::Rocket),
            "EYES" => Ok(Self::Eyes),
            _ => Err(TidyError::InvalidReaction {
                value: value.to_owned(),
            }),
        }
    }
}

/// One entry of an issue's reaction summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionGroupSummary {
    /// Reaction content of the group.
    pub content: ReactionContent,
    /// Number of users who reacted with this content.
    pub user_count: u64,
}
