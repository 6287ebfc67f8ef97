//! Tidyhub CLI entrypoint for the archive review and reaction toggle.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use tidyhub::{OperationMode, TidyError, TidyhubConfig, telemetry};
use tracing::error;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report_failure(&mut io::stderr().lock(), &error),
    }
}

/// Logs the failure and prints it as one line for the operator.
fn report_failure<W: Write>(writer: &mut W, error: &TidyError) -> ExitCode {
    error!(%error, "tidyhub failed");
    drop(writeln!(writer, "{error}"));
    ExitCode::FAILURE
}

async fn run() -> Result<(), TidyError> {
    let config = load_config()?;
    telemetry::init(&config.log_level)?;

    match config.operation_mode() {
        OperationMode::RepositoryReview => cli::review::run(&config).await,
        OperationMode::ReactionToggle => cli::reaction::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`TidyError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<TidyhubConfig, TidyError> {
    TidyhubConfig::load().map_err(|error| TidyError::Configuration {
        message: error.to_string(),
    })
}
