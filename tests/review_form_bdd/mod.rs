//! Support modules for the review form BDD tests.

#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use runtime::{SERVICE_PREFIX, ensure_runtime_and_server, service_base};
pub(crate) use state::ReviewFormState;
