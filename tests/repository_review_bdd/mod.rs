//! Support modules for the repository review BDD tests.

pub(crate) mod fixtures;
#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use fixtures::{linked_page_response, repository_json};
pub(crate) use runtime::{ensure_runtime_and_server, mount, server_uri};
pub(crate) use state::{
    ReviewState, answers_to_input, authorization_sent, requested_pages, run_review,
};
