//! Scenario state and toggle runner for the reaction toggle BDD tests.

use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tidyhub::{
    ApiBase, IssueLocator, OctocrabReactionGateway, PersonalAccessToken, ReactionContent,
    ReactionToggle, TidyError, ToggleOutcome,
};
use wiremock::MockServer;

use super::runtime::{SharedRuntime, server_uri};

#[derive(ScenarioState, Default)]
pub(crate) struct ToggleState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) token: Slot<String>,
    pub(crate) outcome: Slot<ToggleOutcome>,
    pub(crate) error: Slot<TidyError>,
}

/// Parses `owner/repo#number`.
pub(crate) fn parse_issue(reference: &str) -> IssueLocator {
    let (repository, number) = reference
        .split_once('#')
        .unwrap_or_else(|| panic!("issue reference `{reference}` lacks a number"));
    let (owner, name) = repository
        .split_once('/')
        .unwrap_or_else(|| panic!("issue reference `{reference}` lacks an owner"));
    let number = number
        .parse()
        .unwrap_or_else(|error| panic!("invalid issue number in `{reference}`: {error}"));

    IssueLocator::new(owner, name, number)
        .unwrap_or_else(|error| panic!("invalid issue reference `{reference}`: {error}"))
}

/// Runs one toggle against the mock GraphQL endpoint.
pub(crate) fn run_toggle(
    state: &ToggleState,
    issue: &IssueLocator,
    content: ReactionContent,
) -> Result<ToggleOutcome, TidyError> {
    let runtime = state
        .runtime
        .get()
        .unwrap_or_else(|| panic!("runtime not initialised"));
    let api_base = ApiBase::parse(&server_uri(&state.server))?;
    let token = state
        .token
        .get()
        .map(PersonalAccessToken::new)
        .transpose()?;

    runtime.block_on(async {
        let gateway = OctocrabReactionGateway::for_token(token.as_ref(), &api_base)?;
        ReactionToggle::new(&gateway).toggle(issue, content).await
    })
}

/// Returns the GraphQL mutation names the server received, in order.
pub(crate) fn mutations_sent(state: &ToggleState) -> Vec<&'static str> {
    let runtime = state
        .runtime
        .get()
        .unwrap_or_else(|| panic!("runtime not initialised"));

    let requests = state
        .server
        .with_ref(|server| runtime.block_on(server.received_requests()))
        .flatten()
        .unwrap_or_else(|| panic!("request recording should be enabled"));

    requests
        .iter()
        .filter_map(|request| {
            let body = String::from_utf8_lossy(&request.body);
            if body.contains("addReaction(") {
                Some("addReaction")
            } else if body.contains("removeReaction(") {
                Some("removeReaction")
            } else {
                None
            }
        })
        .collect()
}
