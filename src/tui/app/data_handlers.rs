//! Question loading and review submission handlers.
//!
//! Both requests run as commands on the runtime and report back through
//! [`AppMsg::QuestionsLoaded`] and [`AppMsg::SubmitFinished`]. Commands hold a
//! clone of the session guard, so a response that resolves after the form is
//! torn down produces no message.

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use bubbletea_rs::Cmd;

use super::{FormPhase, ReviewFormApp};
use crate::questionnaire::{
    LoadOutcome, QuestionnaireError, SubmitOutcome, load_questions, submit_review,
};
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;
use crate::tui::state::Notification;
use crate::tui::storage::record_telemetry;

fn missing_gateway_error() -> QuestionnaireError {
    QuestionnaireError::Configuration {
        message: "no questionnaire service configured".to_owned(),
    }
}

impl ReviewFormApp {
    /// Dispatches data loading and submission messages to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if !self.session.is_live() {
            tracing::debug!("ignoring data message after session teardown");
            return None;
        }

        match msg {
            AppMsg::QuestionsLoaded(outcome) => self.handle_questions_loaded(outcome),
            AppMsg::SubmitRequested => self.handle_submit_requested(),
            AppMsg::SubmitFinished {
                outcome,
                answer_count,
                latency_ms,
            } => self.handle_submit_finished(outcome, *answer_count, *latency_ms),
            _ => {
                // Unreachable: caller filters to data messages.
                None
            }
        }
    }

    /// Builds the one-shot command that loads the question set.
    ///
    /// `init()` issues this command at startup. Without a gateway the
    /// command resolves straight to the fallback.
    #[must_use]
    pub fn load_questions_cmd(&self) -> Cmd {
        let session = self.session.clone();
        let gateway = self.gateway.clone();

        Box::pin(async move {
            let outcome = match gateway {
                Some(service) => session.run(load_questions(service.as_ref())).await?,
                None => LoadOutcome::fallback_for(&missing_gateway_error()),
            };
            Some(Box::new(AppMsg::QuestionsLoaded(outcome)) as Box<dyn Any + Send>)
        })
    }

    /// Installs the loaded question set.
    ///
    /// Loading happens once per session; a second outcome is ignored.
    pub(super) fn handle_questions_loaded(&mut self, outcome: &LoadOutcome) -> Option<Cmd> {
        if self.phase == FormPhase::Ready {
            tracing::debug!("ignoring repeated question load");
            return None;
        }

        self.questions = outcome.questions().clone();
        self.load_warning = outcome.warning().map(str::to_owned);
        self.phase = FormPhase::Ready;

        if !self.questions.contains_pillar(&self.active_tab)
            && let Some(first) = self.questions.pillar_at(0)
        {
            tracing::debug!(
                "default pillar '{}' not loaded, opening '{first}'",
                self.active_tab
            );
            self.active_tab = first.to_owned();
        }
        self.focus.reset();
        self.adjust_scroll_to_focus();

        record_telemetry(TelemetryEvent::QuestionsLoaded {
            source: outcome.source(),
            pillar_count: self.questions.pillar_count(),
            question_count: self.questions.question_count(),
        });
        None
    }

    /// Sends a snapshot of the whole answer set.
    ///
    /// There is no in-flight guard: each request issues a new submission and
    /// raises the pending counter until it resolves.
    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    pub(super) fn handle_submit_requested(&mut self) -> Option<Cmd> {
        let snapshot = self.answers.clone();
        let answer_count = snapshot.len();
        let session = self.session.clone();
        let gateway = self.gateway.as_ref().map(Arc::clone);
        self.pending_submissions = self.pending_submissions.saturating_add(1);
        tracing::debug!("submitting review with {answer_count} answers");

        Some(Box::pin(async move {
            let start = Instant::now();
            let outcome = match gateway {
                Some(service) => session.run(submit_review(service.as_ref(), &snapshot)).await?,
                None => SubmitOutcome::Failed(missing_gateway_error()),
            };
            #[expect(
                clippy::cast_possible_truncation,
                reason = "Latency over u64::MAX milliseconds is unrealistic"
            )]
            let latency_ms = start.elapsed().as_millis() as u64;
            Some(Box::new(AppMsg::SubmitFinished {
                outcome,
                answer_count,
                latency_ms,
            }) as Box<dyn Any + Send>)
        }))
    }

    /// Reports a resolved submission through a notification.
    pub(super) fn handle_submit_finished(
        &mut self,
        outcome: &SubmitOutcome,
        answer_count: usize,
        latency_ms: u64,
    ) -> Option<Cmd> {
        self.pending_submissions = self.pending_submissions.saturating_sub(1);

        let text = outcome.notification_text();
        match outcome {
            SubmitOutcome::Accepted(receipt) => {
                record_telemetry(TelemetryEvent::ReviewSubmitted {
                    review_id: receipt.review_id.clone(),
                    answer_count,
                    latency_ms,
                });
                self.notifications.push(Notification::success(text));
            }
            SubmitOutcome::Failed(error) => {
                record_telemetry(TelemetryEvent::ReviewSubmissionFailed {
                    message: error.to_string(),
                });
                self.notifications.push(Notification::failure(text));
            }
        }
        None
    }
}
