//! Shared Tokio runtime and mock service helpers for integration tests.

use std::any::Any;
use std::cell::RefCell;
use std::future::Future;
use std::io;
use std::rc::Rc;

use bubbletea_rs::Cmd;
use pillars::tui::messages::AppMsg;
use rstest_bdd::Slot;
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Path prefix the mock questionnaire service is mounted under.
pub const SERVICE_PREFIX: &str = "/Prod";

/// Shared runtime wrapper that can be stored in an `rstest-bdd` Slot.
#[derive(Clone)]
pub struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }

    /// Runs a TUI command to completion and returns the message it yields.
    pub fn resolve(&self, cmd: Cmd) -> Option<AppMsg> {
        let msg: Box<dyn Any + Send> = self.block_on(cmd)?;
        msg.downcast::<AppMsg>().ok().map(|boxed| *boxed)
    }
}

/// Ensures a Tokio runtime and Wiremock server are initialised.
///
/// # Errors
///
/// Returns an error if the Tokio runtime cannot be created or if the slots
/// behave unexpectedly.
pub fn ensure_runtime_and_server(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
) -> Result<SharedRuntime, io::Error> {
    if runtime.with_ref(|_| ()).is_none() {
        runtime.set(SharedRuntime::new(Runtime::new()?));
    }

    let shared_runtime = runtime
        .get()
        .ok_or_else(|| io::Error::other("runtime not initialised after set"))?;

    if server.with_ref(|_| ()).is_none() {
        server.set(shared_runtime.block_on(MockServer::start()));
    }

    Ok(shared_runtime)
}

/// Base URL of the mock questionnaire service.
pub fn service_base(server: &MockServer) -> String {
    format!("{}{SERVICE_PREFIX}", server.uri())
}
