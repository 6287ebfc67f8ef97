//! Error types shared by the repository review and reaction toggle flows.

use thiserror::Error;

/// Errors surfaced while configuring the tool or communicating with GitHub.
///
/// Every variant except [`TidyError::Configuration`] and the input variants is
/// fatal to the running flow: the binary logs the message and exits non-zero.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TidyError {
    /// The authentication token was missing or blank.
    #[error("personal access token is required")]
    MissingToken,

    /// The configured API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Rate limit exceeded - the API returned 403/429 with a rate limit message.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Error message from GitHub.
        message: String,
    },

    /// The GraphQL endpoint answered with an `errors` array.
    #[error("GitHub GraphQL error during {operation}: {message}")]
    GraphQl {
        /// Query or mutation that failed.
        operation: String,
        /// Joined error messages from the response.
        message: String,
    },

    /// The requested repository or issue does not exist or is not visible.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing object.
        what: String,
    },

    /// Invalid pagination parameters.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the invalid parameter.
        message: String,
    },

    /// The configured reaction is not a GitHub reaction content.
    #[error("unsupported reaction `{value}`")]
    InvalidReaction {
        /// Raw configured value.
        value: String,
    },

    /// Owner, repository name, or issue number is malformed.
    #[error("invalid issue reference: {message}")]
    InvalidIssue {
        /// Which part of the reference is wrong.
        message: String,
    },

    /// Configuration could not be loaded or is incomplete.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The interactive prompt stopped before an answer was accepted.
    #[error("prompt aborted: {message}")]
    Prompt {
        /// Why the prompt could not continue.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl TidyError {
    /// Wraps a local I/O failure.
    pub(crate) fn io(error: &std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
