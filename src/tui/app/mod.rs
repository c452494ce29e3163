//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the review form state and update logic. It owns the
//! loaded question set, the answer set, tab and focus state, and the queue
//! of submission notifications, and it issues the load and submit requests
//! as `bubbletea-rs` commands.
//!
//! # Module Structure
//!
//! - `model_impl`: `bubbletea_rs::Model` implementation and viewport shaping
//! - `rendering`: View rendering methods for terminal output
//! - `data_handlers`: Question loading and review submission
//! - `form_handlers`: Tab switching, focus movement and answer selection
//! - `lifecycle_handlers`: Quit, help, notifications and resize
//! - `layout`: Body layout and scroll tracking

use std::fmt;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::questionnaire::{AnswerSet, PillarGroup, QuestionnaireGateway};

use super::components::{NotificationComponent, QuestionCardComponent, TabStripComponent};
use super::messages::AppMsg;
use super::session::SessionGuard;
use super::state::{FocusState, Notification, NotificationQueue};
use super::storage::SessionContext;

mod data_handlers;
mod form_handlers;
mod layout;
mod lifecycle_handlers;
mod model_impl;
mod rendering;

/// Whether the form is still waiting for its question set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// The one-shot load has not resolved yet.
    Loading,
    /// Questions are installed and the form is interactive.
    Ready,
}

/// Main application model for the review form TUI.
pub struct ReviewFormApp {
    /// Loaded question set; empty while loading.
    pub(crate) questions: PillarGroup,
    /// Current selections across every pillar.
    pub(crate) answers: AnswerSet,
    /// Loading or ready.
    pub(crate) phase: FormPhase,
    /// Banner text shown when the built-in questions were substituted.
    pub(crate) load_warning: Option<String>,
    /// Name of the pillar whose questions are shown.
    pub(crate) active_tab: String,
    /// Focus cursor and scroll offset within the active tab.
    pub(crate) focus: FocusState,
    /// Notifications awaiting dismissal.
    pub(crate) notifications: NotificationQueue,
    /// Submissions sent but not yet resolved.
    pub(crate) pending_submissions: usize,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    gateway: Option<Arc<dyn QuestionnaireGateway>>,
    session: SessionGuard,
    tab_strip: TabStripComponent,
    question_card: QuestionCardComponent,
    notification_view: NotificationComponent,
}

impl fmt::Debug for ReviewFormApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReviewFormApp")
            .field("phase", &self.phase)
            .field("active_tab", &self.active_tab)
            .field("answers", &self.answers)
            .field("pending_submissions", &self.pending_submissions)
            .field("has_gateway", &self.gateway.is_some())
            .finish_non_exhaustive()
    }
}

impl ReviewFormApp {
    /// Creates a form in the loading phase.
    ///
    /// Without a gateway the form falls back to the built-in questions and
    /// every submission fails with a configuration error.
    #[must_use]
    pub fn new(
        gateway: Option<Arc<dyn QuestionnaireGateway>>,
        default_pillar: impl Into<String>,
    ) -> Self {
        Self {
            questions: PillarGroup::new(),
            answers: AnswerSet::new(),
            phase: FormPhase::Loading,
            load_warning: None,
            active_tab: default_pillar.into(),
            focus: FocusState::new(),
            notifications: NotificationQueue::new(),
            pending_submissions: 0,
            show_help: false,
            width: 80,
            height: 24,
            gateway,
            session: SessionGuard::new(),
            tab_strip: TabStripComponent::new(),
            question_card: QuestionCardComponent::new(),
            notification_view: NotificationComponent::new(),
        }
    }

    /// Creates a form from the stored startup context.
    #[must_use]
    pub fn from_context(context: Option<SessionContext>) -> Self {
        match context {
            Some(ctx) => Self::new(Some(ctx.gateway()), ctx.default_pillar()),
            None => Self::new(None, crate::questionnaire::DEFAULT_PILLAR),
        }
    }

    /// Sets the initial terminal dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self.adjust_scroll_to_focus();
        self
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Returns the installed question set.
    #[must_use]
    pub const fn questions(&self) -> &PillarGroup {
        &self.questions
    }

    /// Returns the recorded answers.
    #[must_use]
    pub const fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Returns the active pillar tab.
    #[must_use]
    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    /// Returns the fallback warning, if one is shown.
    #[must_use]
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    /// Returns the notification currently on screen.
    #[must_use]
    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    /// Returns the number of submissions still in flight.
    #[must_use]
    pub const fn pending_submissions(&self) -> usize {
        self.pending_submissions
    }

    /// Returns the focus cursor.
    #[must_use]
    pub const fn focus(&self) -> &FocusState {
        &self.focus
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands. It delegates to specialised
    /// handlers for each message category to keep cyclomatic complexity low.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_selection() {
            return self.handle_selection_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }
}

impl Drop for ReviewFormApp {
    fn drop(&mut self) {
        self.session.revoke();
    }
}


#[cfg(test)]
mod help_overlay_input_tests;
