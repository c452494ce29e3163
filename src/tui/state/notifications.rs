//! Queue of blocking notifications shown one at a time.

use std::collections::VecDeque;

/// Tone of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The action succeeded.
    Success,
    /// The action failed.
    Failure,
}

/// A message the user must dismiss before continuing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Tone used for the title line.
    pub kind: NotificationKind,
    /// Message body.
    pub text: String,
}

impl Notification {
    /// Creates a success notification.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            text: text.into(),
        }
    }

    /// Creates a failure notification.
    #[must_use]
    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Failure,
            text: text.into(),
        }
    }
}

/// First-in first-out notification queue.
///
/// Overlapping submissions each resolve with their own notification, so
/// results queue up instead of overwriting one another.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
}

impl NotificationQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification behind any already queued.
    pub fn push(&mut self, notification: Notification) {
        self.pending.push_back(notification);
    }

    /// The notification currently shown.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.pending.front()
    }

    /// Removes the notification currently shown, revealing the next one.
    pub fn dismiss(&mut self) {
        self.pending.pop_front();
    }

    /// Number of notifications waiting, including the one shown.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` when nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Notification, NotificationQueue};

    #[test]
    fn dismiss_reveals_next_in_arrival_order() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::success("first"));
        queue.push(Notification::failure("second"));

        assert_eq!(queue.current().map(|n| n.text.as_str()), Some("first"));
        queue.dismiss();
        assert_eq!(queue.current().map(|n| n.text.as_str()), Some("second"));
        queue.dismiss();
        assert!(queue.is_empty());
    }

    #[test]
    fn dismissing_empty_queue_is_harmless() {
        let mut queue = NotificationQueue::new();

        queue.dismiss();

        assert!(queue.current().is_none());
        assert_eq!(queue.len(), 0);
    }
}
