//! Application configuration loaded from CLI, environment, and files.
//!
//! Configuration values are merged with ortho-config's layered approach, in
//! the following precedence (lowest to highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.tidyhub.toml` in the current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `TIDYHUB_*`, plus the legacy `GITHUB_TOKEN`
//!    fallback for the token
//! 4. **Command-line arguments** – `--token`/`-t`, `--owner`/`-o`, ...
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! owner = "octocat"
//! repo = "hello-world"
//! issue = 42
//! reaction = "THUMBS_UP"
//! max_pages = 20
//! ```
//!
//! The token is read once here and handed to every gateway constructor; no
//! other module consults the environment.

use std::env;
use std::num::NonZeroU32;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::TidyError;
use crate::github::locator::{ApiBase, DEFAULT_API_BASE, IssueLocator, PersonalAccessToken};
use crate::github::models::ReactionContent;

/// Flow selected by the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Page through owned public repositories and ask about archiving.
    RepositoryReview,
    /// Toggle the viewer's reaction on one issue.
    ReactionToggle,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use tidyhub::TidyhubConfig;
///
/// let config = TidyhubConfig::load().expect("failed to load configuration");
/// let mode = config.operation_mode();
/// let token = config.personal_access_token();
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "TIDYHUB",
    discovery(
        dotfile_name = ".tidyhub.toml",
        config_file_name = "tidyhub.toml",
        app_name = "tidyhub"
    )
)]
pub struct TidyhubConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `TIDYHUB_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// GitHub API base URL. Defaults to `https://api.github.com`.
    #[ortho_config()]
    pub api_base: String,

    /// Repository owner for the reaction toggle.
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository name for the reaction toggle.
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// Issue number. When set, the reaction toggle runs instead of the
    /// repository review.
    #[ortho_config(cli_short = 'i')]
    pub issue: Option<u64>,

    /// Reaction content to toggle, e.g. `THUMBS_UP`, `heart`, or `+1`.
    #[ortho_config()]
    pub reaction: String,

    /// Archives repositories through the API on "yes" instead of only
    /// logging the intent.
    ///
    /// Note: booleans are not read from the environment by `ortho_config`.
    #[ortho_config()]
    pub apply_archive: bool,

    /// Stops the repository review after this many listing pages.
    #[ortho_config()]
    pub max_pages: Option<u32>,

    /// Default log filter when `RUST_LOG` is unset.
    #[ortho_config()]
    pub log_level: String,
}

const DEFAULT_REACTION: &str = "THUMBS_UP";
const DEFAULT_LOG_LEVEL: &str = "info";

impl Default for TidyhubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base: DEFAULT_API_BASE.to_owned(),
            owner: None,
            repo: None,
            issue: None,
            reaction: DEFAULT_REACTION.to_owned(),
            apply_archive: false,
            max_pages: None,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl TidyhubConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    #[must_use]
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
    }

    /// Returns the resolved token, or `None` when it is absent or blank.
    ///
    /// A missing token is not an error here; requests go out
    /// unauthenticated and GitHub rejects them.
    #[must_use]
    pub fn personal_access_token(&self) -> Option<PersonalAccessToken> {
        self.resolve_token()
            .and_then(|token| PersonalAccessToken::new(token).ok())
    }

    /// Determines which flow to run.
    ///
    /// Returns `ReactionToggle` when an issue number is configured and
    /// `RepositoryReview` otherwise.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.issue.is_some() {
            OperationMode::ReactionToggle
        } else {
            OperationMode::RepositoryReview
        }
    }

    /// Parses the configured API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`TidyError::InvalidUrl`] when the value is not an absolute
    /// HTTP URL.
    pub fn api_base(&self) -> Result<ApiBase, TidyError> {
        ApiBase::parse(&self.api_base)
    }

    /// Parses the configured reaction content.
    ///
    /// # Errors
    ///
    /// Returns [`TidyError::InvalidReaction`] for unknown reactions.
    pub fn reaction_content(&self) -> Result<ReactionContent, TidyError> {
        self.reaction.parse()
    }

    /// Returns the page cap, treating zero as no cap.
    #[must_use]
    pub fn max_pages(&self) -> Option<NonZeroU32> {
        self.max_pages.and_then(NonZeroU32::new)
    }

    /// Builds the issue locator for the reaction toggle.
    ///
    /// # Errors
    ///
    /// Returns [`TidyError::Configuration`] naming the missing flag, or
    /// [`TidyError::InvalidIssue`] when a value is malformed.
    pub fn require_issue_locator(&self) -> Result<IssueLocator, TidyError> {
        match (&self.owner, &self.repo, self.issue) {
            (Some(owner), Some(repo), Some(issue)) => IssueLocator::new(owner, repo, issue),
            (None, _, _) => Err(TidyError::Configuration {
                message: "repository owner is required (use --owner or -o)".to_owned(),
            }),
            (_, None, _) => Err(TidyError::Configuration {
                message: "repository name is required (use --repo or -r)".to_owned(),
            }),
            (_, _, None) => Err(TidyError::Configuration {
                message: "issue number is required (use --issue or -i)".to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests;
