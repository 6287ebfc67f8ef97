//! Identity wrappers for the GitHub objects the tool touches.

use url::Url;

use crate::error::TidyError;

/// Public GitHub REST and GraphQL endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Validated API base URL passed to every gateway constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(Url);

impl ApiBase {
    /// Parses an absolute `http`/`https` URL.
    ///
    /// # Errors
    ///
    /// Returns [`TidyError::InvalidUrl`] when the value is not an absolute
    /// HTTP URL.
    pub fn parse(input: &str) -> Result<Self, TidyError> {
        let parsed =
            Url::parse(input.trim()).map_err(|error| TidyError::InvalidUrl(error.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(TidyError::InvalidUrl(format!(
                "unsupported scheme `{}`",
                parsed.scheme()
            )));
        }
        Ok(Self(parsed))
    }

    /// Borrow the URL as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    /// Validates that the owner login is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`TidyError::InvalidIssue`] when the value is blank or contains
    /// a slash.
    pub fn new(value: &str) -> Result<Self, TidyError> {
        validate_segment(value, "owner").map(Self)
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Validates that the repository name is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`TidyError::InvalidIssue`] when the value is blank or contains
    /// a slash.
    pub fn new(value: &str) -> Result<Self, TidyError> {
        validate_segment(value, "repository name").map(Self)
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

fn validate_segment(value: &str, label: &str) -> Result<String, TidyError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TidyError::InvalidIssue {
            message: format!("{label} must not be empty"),
        });
    }
    if trimmed.contains('/') {
        return Err(TidyError::InvalidIssue {
            message: format!("{label} must not contain '/'"),
        });
    }
    Ok(trimmed.to_owned())
}

/// Issue number, always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueNumber(u64);

impl IssueNumber {
    /// Validates that the number is positive.
    ///
    /// # Errors
    ///
    /// Returns [`TidyError::InvalidIssue`] for zero.
    pub fn new(value: u64) -> Result<Self, TidyError> {
        if value == 0 {
            return Err(TidyError::InvalidIssue {
                message: "issue number must be a positive integer".to_owned(),
            });
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Owner, repository, and issue number addressing one issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueLocator {
    owner: RepositoryOwner,
    repository: RepositoryName,
    number: IssueNumber,
}

impl IssueLocator {
    /// Builds a locator from raw configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`TidyError::InvalidIssue`] when any part is malformed.
    pub fn new(owner: &str, repository: &str, number: u64) -> Result<Self, TidyError> {
        Ok(Self {
            owner: RepositoryOwner::new(owner)?,
            repository: RepositoryName::new(repository)?,
            number: IssueNumber::new(number)?,
        })
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Issue number.
    #[must_use]
    pub const fn number(&self) -> IssueNumber {
        self.number
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TidyError::MissingToken`] when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, TidyError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TidyError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}
