//! Choice between adding and removing the viewer's reaction.

use std::fmt;

use serde::Serialize;

use crate::github::models::ReactionState;

/// Mutation to run against the issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleAction {
    /// The viewer has not reacted yet.
    Add,
    /// The viewer already reacted.
    Remove,
}

impl ToggleAction {
    /// Picks the action that inverts the observed state.
    #[must_use]
    pub const fn for_viewer(viewer_has_reacted: bool) -> Self {
        if viewer_has_reacted {
            Self::Remove
        } else {
            Self::Add
        }
    }

    /// Picks the action for a freshly queried reaction state.
    #[must_use]
    pub const fn for_state(state: &ReactionState) -> Self {
        Self::for_viewer(state.viewer_has_reacted)
    }

    /// Lowercase verb used in logs and output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for ToggleAction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
