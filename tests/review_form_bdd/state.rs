//! Scenario state for review form BDD tests.

use pillars::tui::ReviewFormApp;
use pillars::tui::messages::AppMsg;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wiremock::MockServer;

use super::runtime::SharedRuntime;

/// Upper bound on command round-trips triggered by a single step.
const MAX_FOLLOW_UPS: usize = 8;

/// State shared across steps in a review form scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct ReviewFormState {
    /// Runtime that drives HTTP requests issued by commands.
    pub(crate) runtime: Slot<SharedRuntime>,
    /// Mock questionnaire service.
    pub(crate) server: Slot<MockServer>,
    /// The TUI application model under test.
    pub(crate) app: Slot<ReviewFormApp>,
}

impl ReviewFormState {
    /// Delivers `msg` to the app and feeds the messages its commands produce
    /// back in until no command remains.
    pub(crate) fn dispatch(&self, msg: AppMsg) -> Result<(), &'static str> {
        let runtime = self.runtime.get().ok_or("runtime not initialised")?;
        let mut next = Some(msg);

        for _ in 0..MAX_FOLLOW_UPS {
            let Some(current) = next.take() else {
                return Ok(());
            };
            let cmd = self
                .app
                .with_mut(|app| app.handle_message(&current))
                .ok_or("app not initialised")?;
            next = cmd.and_then(|pending| runtime.resolve(pending));
        }

        Err("command chain did not settle")
    }

    /// Runs the startup load command and installs its result.
    pub(crate) fn load(&self) -> Result<(), &'static str> {
        let runtime = self.runtime.get().ok_or("runtime not initialised")?;
        let cmd = self
            .app
            .with_ref(ReviewFormApp::load_questions_cmd)
            .ok_or("app not initialised")?;
        let msg = runtime.resolve(cmd).ok_or("load produced no message")?;
        self.dispatch(msg)
    }
}
