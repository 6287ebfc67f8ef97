//! Behavioural tests for the interactive repository archive review.

#[path = "repository_review_bdd/mod.rs"]
mod repository_review_bdd_support;

use repository_review_bdd_support::{
    ReviewState, answers_to_input, authorization_sent, ensure_runtime_and_server, linked_page_response, mount,
    repository_json, requested_pages, run_review, server_uri,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::json;
use tidyhub::TidyError;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[fixture]
fn review_state() -> ReviewState {
    ReviewState::default()
}

#[given("a mock GitHub API with one page of owned repositories")]
fn seed_single_page(review_state: &ReviewState) {
    let runtime = ensure_runtime_and_server(&review_state.runtime, &review_state.server);

    let body = json!([
        repository_json("alice/active", false, false),
        repository_json("alice/forked", true, false),
        repository_json("alice/retired", false, true)
    ]);
    let mock = Mock::given(method("GET"))
        .and(path("/user/repos"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body));

    mount(&runtime, &review_state.server, mock);
}

#[given("a mock GitHub API with {pages:u32} linked pages of owned repositories")]
fn seed_linked_pages(review_state: &ReviewState, pages: u32) {
    let runtime = ensure_runtime_and_server(&review_state.runtime, &review_state.server);
    let uri = server_uri(&review_state.server);

    for page in 1..=pages {
        let mock = Mock::given(method("GET"))
            .and(path("/user/repos"))
            .and(query_param("page", page.to_string()))
            .respond_with(linked_page_response(&uri, page, pages))
            .expect(1);
        mount(&runtime, &review_state.server, mock);
    }
}

#[given("a mock GitHub API rejecting the token")]
fn seed_rejecting_server(review_state: &ReviewState) {
    let runtime = ensure_runtime_and_server(&review_state.runtime, &review_state.server);

    let mock = Mock::given(method("GET"))
        .and(path("/user/repos"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials",
            "documentation_url": "https://docs.github.com/rest"
        })));

    mount(&runtime, &review_state.server, mock);
}

#[given("a personal access token {token}")]
fn remember_token(review_state: &ReviewState, token: String) {
    review_state.token.set(token);
}

#[given("no personal access token")]
fn forget_token(review_state: &ReviewState) {
    review_state.token.clear();
}

#[given("the operator answers {answers}")]
fn remember_answers(review_state: &ReviewState, answers: String) {
    review_state.input.set(answers_to_input(&answers));
}

#[when("the archive review runs")]
fn run_archive_review(review_state: &ReviewState) {
    match run_review(review_state) {
        Ok(report) => review_state.report.set(report),
        Err(error) => review_state.error.set(error),
    }
}

#[then("the operator is asked about {count:usize} repositories")]
fn assert_prompted(review_state: &ReviewState, count: usize) {
    let prompted = review_state
        .report
        .with_ref(|report| report.prompted)
        .unwrap_or_else(|| panic!("review report missing"));

    assert_eq!(prompted, count, "prompted repository count mismatch");
}

#[then("the review output does not mention {name}")]
fn assert_not_mentioned(review_state: &ReviewState, name: String) {
    let output = review_state
        .output
        .get()
        .unwrap_or_else(|| panic!("review output missing"));

    assert!(
        !output.contains(&name),
        "expected `{name}` to be skipped, got:\n{output}"
    );
}

#[then("the Archive label is shown {count:usize} times")]
fn assert_label_count(review_state: &ReviewState, count: usize) {
    let prompt_output = review_state
        .prompt_output
        .get()
        .unwrap_or_else(|| panic!("prompt output missing"));

    assert_eq!(
        prompt_output.matches("Archive: ").count(),
        count,
        "unexpected prompt count in:\n{prompt_output}"
    );
}

#[then("{count:usize} repositories are marked for archive")]
fn assert_marked(review_state: &ReviewState, count: usize) {
    let marked = review_state
        .report
        .with_ref(|report| report.marked_for_archive)
        .unwrap_or_else(|| panic!("review report missing"));

    assert_eq!(marked, count, "marked repository count mismatch");
}

#[then("the listing requested pages {pages}")]
fn assert_requested_pages(review_state: &ReviewState, pages: String) {
    let expected: Vec<String> = pages.split(',').map(str::to_owned).collect();

    assert_eq!(requested_pages(review_state), expected);
}

#[then("the review fails with an authentication error")]
fn assert_authentication_error(review_state: &ReviewState) {
    let error = review_state
        .error
        .with_ref(Clone::clone)
        .unwrap_or_else(|| panic!("expected the review to fail"));

    assert!(
        matches!(error, TidyError::Authentication { .. }),
        "expected Authentication error, got {error:?}"
    );
    assert!(
        review_state
            .prompt_output
            .get()
            .is_some_and(|written| written.is_empty()),
        "no question should be asked after a rejected listing"
    );
}

#[then("the listing was sent without credentials")]
fn assert_unauthenticated(review_state: &ReviewState) {
    let sent = authorization_sent(review_state);

    assert!(!sent.is_empty(), "the listing should reach the server");
    assert!(
        sent.iter().all(|authorized| !authorized),
        "no request should carry an Authorization header"
    );
}

#[scenario(path = "tests/features/repository_review.feature", index = 0)]
fn forks_and_archived_are_skipped(review_state: ReviewState) {
    let _ = review_state;
}

#[scenario(path = "tests/features/repository_review.feature", index = 1)]
fn invalid_answers_are_asked_again(review_state: ReviewState) {
    let _ = review_state;
}

#[scenario(path = "tests/features/repository_review.feature", index = 2)]
fn linked_pages_are_reviewed_in_order(review_state: ReviewState) {
    let _ = review_state;
}

#[scenario(path = "tests/features/repository_review.feature", index = 3)]
fn rejected_token_ends_review(review_state: ReviewState) {
    let _ = review_state;
}

#[scenario(path = "tests/features/repository_review.feature", index = 4)]
fn missing_token_is_rejected_by_github(review_state: ReviewState) {
    let _ = review_state;
}
