//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::questionnaire::{LoadOutcome, SubmitOutcome};

/// Messages for the review form TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Show the next pillar tab, wrapping at the end.
    NextTab,
    /// Show the previous pillar tab, wrapping at the start.
    PreviousTab,
    /// Show a specific pillar tab.
    SelectTab(String),
    /// Move focus to the previous option.
    FocusUp,
    /// Move focus to the next option.
    FocusDown,

    // Answer selection
    /// Record `option` as the answer to `question_id`.
    SelectAnswer {
        /// Pillar the question belongs to.
        pillar: String,
        /// Question being answered.
        question_id: String,
        /// Chosen option text.
        option: String,
    },
    /// Select the focused option.
    SelectFocused,
    /// Select the option with this 1-based number on the focused question.
    SelectOptionNumber(usize),

    // Data loading and submission
    /// The one-shot question load resolved.
    QuestionsLoaded(LoadOutcome),
    /// Submit the whole answer set.
    SubmitRequested,
    /// A submission resolved.
    SubmitFinished {
        /// What the service said.
        outcome: SubmitOutcome,
        /// Number of answers in the submitted snapshot.
        answer_count: usize,
        /// Round-trip time of the request.
        latency_ms: u64,
    },

    // Application lifecycle
    /// Close the notification currently shown.
    DismissNotification,
    /// Toggle help overlay.
    ToggleHelp,
    /// Quit the application.
    Quit,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns `true` for tab and focus movement.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NextTab | Self::PreviousTab | Self::SelectTab(_) | Self::FocusUp | Self::FocusDown
        )
    }

    /// Returns `true` for answer selection.
    #[must_use]
    pub const fn is_selection(&self) -> bool {
        matches!(
            self,
            Self::SelectAnswer { .. } | Self::SelectFocused | Self::SelectOptionNumber(_)
        )
    }

    /// Returns `true` for loading and submission traffic.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::QuestionsLoaded(_) | Self::SubmitRequested | Self::SubmitFinished { .. }
        )
    }
}
