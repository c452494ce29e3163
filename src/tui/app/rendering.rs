//! Rendering logic for the review form.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::ReviewFormApp;
use crate::tui::components::{NotificationViewContext, TabStripViewContext};
use crate::tui::state::Notification;

const TITLE: &str = "AWS Well-Architected Review";

impl ReviewFormApp {
    /// Renders the header bar.
    pub(super) fn render_header() -> String {
        format!("{TITLE}\n")
    }

    /// Renders the loading screen: title and indicator only.
    pub(super) fn render_loading() -> String {
        let mut output = Self::render_header();
        output.push('\n');
        output.push_str("  Loading questions...\n");
        output
    }

    /// Renders the fallback warning banner, if any.
    pub(super) fn render_warning_banner(&self) -> String {
        self.warning_lines()
            .into_iter()
            .map(|line| format!("{line}\n"))
            .collect()
    }

    /// Renders the pillar tab strip followed by a blank separator.
    pub(super) fn render_tab_strip(&self) -> String {
        let mut output = self.tab_strip.view(&TabStripViewContext {
            pillars: self.questions.pillar_names().collect(),
            active: &self.active_tab,
            max_width: self.content_width(),
        });
        output.push('\n');
        output
    }

    /// Renders the visible slice of the active tab's questions.
    ///
    /// Always yields exactly `body_height` lines so the footer stays pinned.
    pub(super) fn render_body(&self) -> String {
        let height = self.body_height();
        let layout = self.body_layout();

        let mut lines: Vec<String> = if layout.lines.is_empty() {
            vec!["  No questions for this pillar.".to_owned()]
        } else {
            layout
                .lines
                .into_iter()
                .skip(self.focus.scroll_offset)
                .take(height)
                .collect()
        };
        lines.resize(height, String::new());

        lines.into_iter().map(|line| format!("{line}\n")).collect()
    }

    /// Renders the submit control.
    pub(super) fn render_submit_control() -> String {
        "[ Submit Review ]  (press s)\n".to_owned()
    }

    /// Renders the status bar with progress and help hints.
    pub(super) fn render_status_bar(&self) -> String {
        let answered = self.answers.len();
        let total = self.questions.question_count();
        let pending = if self.pending_submissions > 0 {
            format!("  Submitting: {}", self.pending_submissions)
        } else {
            String::new()
        };
        let hints = "Tab:pillar  j/k:move  Space:select  s:submit  ?:help  q:quit";
        format!("Answered {answered}/{total}{pending}  {hints}\n")
    }

    /// Renders the notification currently on screen.
    pub(super) fn render_notification(&self, notification: &Notification) -> String {
        let mut output = Self::render_header();
        output.push_str(&self.notification_view.view(&NotificationViewContext {
            notification,
            queued_behind: self.notifications.len().saturating_sub(1),
            max_width: self.content_width(),
        }));
        output
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay() -> String {
        let help_text = r"
=== Keyboard Shortcuts ===

Pillars:
  Tab, l, Right       Next pillar
  Shift-Tab, h, Left  Previous pillar

Questions:
  j, Down             Next option
  k, Up               Previous option
  Space, Enter        Select focused option
  1-9                 Select option N of the focused question

Other:
  s                   Submit review
  ?                   Toggle this help
  q, Ctrl-C           Quit

Press any key to close this help.
";

        help_text.to_owned()
    }

    /// Renders the interactive form.
    pub(super) fn render_form(&self) -> String {
        let mut output = Self::render_header();
        output.push_str(&self.render_warning_banner());
        output.push_str(&self.render_tab_strip());
        output.push_str(&self.render_body());
        output.push_str(&Self::render_submit_control());
        output.push_str(&self.render_status_bar());
        output
    }
}
