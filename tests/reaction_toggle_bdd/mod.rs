//! Support modules for the reaction toggle BDD tests.

#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use runtime::{ensure_runtime_and_server, mount};
pub(crate) use state::{ToggleState, mutations_sent, parse_issue, run_toggle};
