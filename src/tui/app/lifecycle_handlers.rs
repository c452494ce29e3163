//! Lifecycle and window handlers for the review form.
//!
//! This module handles quit, help toggling, notification dismissal and
//! terminal resize events.

use bubbletea_rs::Cmd;

use super::ReviewFormApp;
use crate::tui::messages::AppMsg;

impl ReviewFormApp {
    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => self.handle_quit(),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::DismissNotification => {
                self.notifications.dismiss();
                None
            }
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => {
                // Unreachable: caller filters to lifecycle messages.
                None
            }
        }
    }

    /// Tears the session down and stops the program.
    ///
    /// Requests still in flight resolve into nothing once the session guard
    /// is revoked.
    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    fn handle_quit(&mut self) -> Option<Cmd> {
        if self.pending_submissions > 0 {
            tracing::debug!(
                "quitting with {} submissions in flight",
                self.pending_submissions
            );
        }
        self.session.revoke();
        Some(bubbletea_rs::quit())
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        self.adjust_scroll_to_focus();
        None
    }

    /// Returns `true` once the session has been torn down.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        !self.session.is_live()
    }
}
