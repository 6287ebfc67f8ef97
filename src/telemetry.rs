//! Structured logging setup.
//!
//! Logs go to stderr so stdout stays free for prompts and JSON output. The
//! filter comes from `RUST_LOG` when set, otherwise from the configured
//! default level.

use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::TidyError;

/// Builds the log filter, preferring `RUST_LOG` over `default_directives`.
///
/// # Errors
///
/// Returns [`TidyError::Configuration`] when neither source holds a valid
/// filter directive.
pub fn build_filter(default_directives: &str) -> Result<EnvFilter, TidyError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(default_directives).map_err(|error| TidyError::Configuration {
        message: format!("invalid log level `{default_directives}`: {error}"),
    })
}

/// Installs the global stderr subscriber.
///
/// # Errors
///
/// Returns [`TidyError::Configuration`] when the filter is invalid or a
/// global subscriber is already installed.
pub fn init(default_directives: &str) -> Result<(), TidyError> {
    let filter = build_filter(default_directives)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
        .map_err(|error| TidyError::Configuration {
            message: format!("failed to install log subscriber: {error}"),
        })
}
