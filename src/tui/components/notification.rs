//! Blocking notification dialog.

use crate::tui::state::{Notification, NotificationKind};

use super::text_wrap::wrap_words;

/// Context for rendering a notification.
#[derive(Debug, Clone, Copy)]
pub struct NotificationViewContext<'a> {
    /// The notification to show.
    pub notification: &'a Notification,
    /// How many further notifications wait behind this one.
    pub queued_behind: usize,
    /// Maximum line width in columns.
    pub max_width: usize,
}

/// Component rendering a notification that must be dismissed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationComponent;

impl NotificationComponent {
    /// Creates a notification component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the dialog as newline-terminated lines.
    #[must_use]
    pub fn view(&self, ctx: &NotificationViewContext<'_>) -> String {
        let title = match ctx.notification.kind {
            NotificationKind::Success => "=== Review Submitted ===",
            NotificationKind::Failure => "=== Submission Failed ===",
        };

        let mut output = format!("\n{title}\n\n");
        for line in wrap_words(&ctx.notification.text, ctx.max_width.max(1)) {
            output.push_str(&line);
            output.push('\n');
        }
        output.push('\n');
        output.push_str("Press Enter to dismiss");
        if ctx.queued_behind > 0 {
            output.push_str(&format!(" ({} more)", ctx.queued_behind));
        }
        output.push('\n');
        output
    }
}
