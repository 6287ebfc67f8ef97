//! Scenario state and review runner for the repository review BDD tests.

use std::io::Cursor;

use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tidyhub::{
    ApiBase, LinePrompt, LoggingArchiver, OctocrabRepositoryGateway, PersonalAccessToken,
    ReviewReport, ReviewSession, TidyError,
};
use wiremock::MockServer;

use super::runtime::{SharedRuntime, server_uri};

#[derive(ScenarioState, Default)]
pub(crate) struct ReviewState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) token: Slot<String>,
    pub(crate) input: Slot<String>,
    pub(crate) report: Slot<ReviewReport>,
    pub(crate) error: Slot<TidyError>,
    pub(crate) output: Slot<String>,
    pub(crate) prompt_output: Slot<String>,
}

/// Turns `"x,,y"` into one answer line per comma-separated entry.
pub(crate) fn answers_to_input(answers: &str) -> String {
    answers
        .trim_matches('"')
        .split(',')
        .map(|answer| format!("{answer}\n"))
        .collect()
}

/// Runs one review against the mock server, recording what was written.
pub(crate) fn run_review(state: &ReviewState) -> Result<ReviewReport, TidyError> {
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
    let input = state.input.get().unwrap_or_default();

    let mut prompt = LinePrompt::new(Cursor::new(input.into_bytes()), Vec::new());
    let mut output = Vec::new();

    let result = runtime.block_on(async {
        let gateway = OctocrabRepositoryGateway::for_token(token.as_ref(), &api_base)?;
        ReviewSession::new(&gateway, &LoggingArchiver)
            .run(&mut prompt, &mut output)
            .await
    });

    let (_input, prompt_output) = prompt.into_parts();
    state
        .prompt_output
        .set(String::from_utf8_lossy(&prompt_output).into_owned());
    state
        .output
        .set(String::from_utf8_lossy(&output).into_owned());

    result
}

/// Lists the `page` query parameter of every request the server received.
pub(crate) fn requested_pages(state: &ReviewState) -> Vec<String> {
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
            request
                .url
                .query_pairs()
                .find(|(key, _)| key == "page")
                .map(|(_, value)| value.into_owned())
        })
        .collect()
}

/// Reports, per received request, whether it carried an `Authorization`
/// header.
pub(crate) fn authorization_sent(state: &ReviewState) -> Vec<bool> {
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
        .map(|request| request.headers.contains_key("authorization"))
        .collect()
}
