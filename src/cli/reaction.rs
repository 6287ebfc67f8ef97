//! Reaction toggle operation.

use std::io::{self, Write};

use tidyhub::github::ReactionGateway;
use tidyhub::{
    ApiBase, OctocrabReactionGateway, PersonalAccessToken, ReactionToggle, TidyError,
    TidyhubConfig, ToggleOutcome,
};
use tracing::info;

use super::output::write_toggle_outcome;

/// Toggles the configured reaction on the configured issue.
///
/// # Errors
///
/// Returns [`TidyError::Configuration`] if the issue reference is incomplete,
/// and the query or mutation error otherwise.
pub async fn run(config: &TidyhubConfig) -> Result<(), TidyError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(config, OctocrabReactionGateway::for_token, &mut stdout)
        .await
        .map(|_outcome| ())
}

/// Toggles the reaction using a custom gateway builder.
///
/// This function is exposed for testing with fake gateways.
pub async fn run_with_gateway_builder<G, F, W>(
    config: &TidyhubConfig,
    build_gateway: F,
    writer: &mut W,
) -> Result<ToggleOutcome, TidyError>
where
    G: ReactionGateway,
    F: FnOnce(Option<&PersonalAccessToken>, &ApiBase) -> Result<G, TidyError>,
    W: Write,
{
    let issue = config.require_issue_locator()?;
    let content = config.reaction_content()?;
    let token = config.personal_access_token();
    let api_base = config.api_base()?;

    let gateway = build_gateway(token.as_ref(), &api_base)?;
    let outcome = ReactionToggle::new(&gateway).toggle(&issue, content).await?;

    info!(
        action = outcome.action.as_str(),
        groups = outcome.reaction_groups.len(),
        "reaction toggled"
    );
    write_toggle_outcome(writer, &outcome)?;
    Ok(outcome)
}
