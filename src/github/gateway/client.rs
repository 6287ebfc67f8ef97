//! Octocrab client construction helpers for gateway implementations.

use http::Uri;
use octocrab::Octocrab;

use crate::error::TidyError;
use crate::github::locator::{ApiBase, PersonalAccessToken};

use super::error_mapping::{map_octocrab_error, summary_line};

/// Builds an Octocrab client for the given token and API base URL.
///
/// Without a token the client sends unauthenticated requests, leaving GitHub
/// to reject them.
///
/// # Errors
///
/// Returns `TidyError::InvalidUrl` when the base URI cannot be parsed or
/// `TidyError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: Option<&PersonalAccessToken>,
    api_base: &ApiBase,
) -> Result<Octocrab, TidyError> {
    let base_uri: Uri = api_base
        .as_str()
        .parse::<Uri>()
        .map_err(|error| TidyError::InvalidUrl(error.to_string()))?;

    let builder = Octocrab::builder();
    let builder = match token {
        Some(token) => builder.personal_token(token.as_ref()),
        None => builder,
    };

    builder
        .base_uri(base_uri)
        .map_err(|error| TidyError::Api {
            message: format!("build client failed: {}", summary_line(&error)),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
