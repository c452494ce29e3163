//! State management for the review form TUI.
//!
//! This module provides the focus cursor within the active pillar tab and
//! the queue of notifications awaiting dismissal.

mod focus;
mod notifications;

pub use focus::FocusState;
pub use notifications::{Notification, NotificationKind, NotificationQueue};
