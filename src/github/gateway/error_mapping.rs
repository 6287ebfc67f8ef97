//! Error mapping helpers for the Octocrab GitHub gateway implementations.

use http::StatusCode;

use crate::error::TidyError;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Checks whether the GitHub error represents a rate limit error based on the
/// HTTP status and message / documentation URL content.
pub(super) fn is_rate_limit_error(source: &octocrab::GitHubError) -> bool {
    let is_rate_limit_status = matches!(
        source.status_code,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
    );

    let message_indicates_rate_limit = source.message.to_lowercase().contains("rate limit")
        || source
            .documentation_url
            .as_deref()
            .is_some_and(|url| url.contains("rate-limit"));

    is_rate_limit_status && message_indicates_rate_limit
}

/// Returns the first line of an error's display text.
///
/// Octocrab appends a multi-line backtrace to several error variants; only
/// the leading summary is kept.
pub(super) fn summary_line(error: &impl std::fmt::Display) -> String {
    let rendered = error.to_string();
    rendered
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_owned()
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> TidyError {
    if let octocrab::Error::GitHub { source, .. } = error {
        if is_rate_limit_error(source) {
            return TidyError::RateLimitExceeded {
                message: format!("{operation} failed: {message}", message = source.message),
            };
        }

        return match source.status_code {
            status if is_auth_failure(status) => TidyError::Authentication {
                message: format!(
                    "{operation} failed: GitHub returned {status} {message}",
                    message = source.message
                ),
            },
            StatusCode::NOT_FOUND => TidyError::NotFound {
                what: format!("{operation}: {message}", message = source.message),
            },
            status => TidyError::Api {
                message: format!(
                    "{operation} failed with status {status}: {message}",
                    message = source.message
                ),
            },
        };
    }

    let summary = summary_line(error);
    if is_network_error(error) {
        return TidyError::Network {
            message: format!("{operation} failed: {summary}"),
        };
    }

    TidyError::Api {
        message: format!("{operation} failed: {summary}"),
    }
}
