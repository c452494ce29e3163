//! Layout helpers for the review form model.
//!
//! This module assembles the scrollable body for the active tab and keeps the
//! scroll offset positioned so the focused option stays visible.

use super::ReviewFormApp;
use crate::tui::components::{QuestionCardViewContext, wrap_with_prefix};

/// Rows below the body: submit control and status bar.
const FOOTER_HEIGHT: usize = 2;

/// Rows above the body besides the warning banner: title, tab strip and a
/// blank separator.
const HEADER_HEIGHT: usize = 3;

/// The active tab's rendered body.
#[derive(Debug, Clone, Default)]
pub(super) struct BodyLayout {
    /// Every body line, unscrolled.
    pub(super) lines: Vec<String>,
    /// Line holding the focused option.
    pub(super) focus_line: Option<usize>,
    /// First line of the focused question's card.
    pub(super) focus_card_start: Option<usize>,
}

impl ReviewFormApp {
    /// Usable line width: one column short of the terminal to avoid autowrap.
    pub(super) fn content_width(&self) -> usize {
        usize::from(self.width).saturating_sub(1).max(1)
    }

    /// Warning banner lines, empty when no warning is shown.
    pub(super) fn warning_lines(&self) -> Vec<String> {
        self.load_warning
            .as_deref()
            .map(|warning| wrap_with_prefix(warning, "! ", "  ", self.content_width()))
            .unwrap_or_default()
    }

    /// Rows available to the scrolling body.
    pub(super) fn body_height(&self) -> usize {
        let chrome = HEADER_HEIGHT
            .saturating_add(self.warning_lines().len())
            .saturating_add(FOOTER_HEIGHT);
        usize::from(self.height).saturating_sub(chrome).max(1)
    }

    /// Renders every question card on the active tab.
    pub(super) fn body_layout(&self) -> BodyLayout {
        let mut layout = BodyLayout::default();
        let max_width = self.content_width();

        for (index, question) in self.active_questions().iter().enumerate() {
            let has_focus = index == self.focus.question_index;
            let card = self.question_card.view(&QuestionCardViewContext {
                number: index.saturating_add(1),
                question,
                selected: self.answers.selected_option(&question.id),
                focused_option: has_focus.then_some(self.focus.option_index),
                max_width,
            });

            let start = layout.lines.len();
            if has_focus {
                layout.focus_card_start = Some(start);
                layout.focus_line = card.focus_line.map(|line| start.saturating_add(line));
            }
            layout.lines.extend(card.lines);
        }

        layout
    }

    /// Adjusts the scroll offset so the focused option remains visible.
    ///
    /// When scrolling up, the focused question's prompt is brought into view
    /// as well if it fits.
    pub(super) fn adjust_scroll_to_focus(&mut self) {
        let layout = self.body_layout();
        let height = self.body_height();
        let max_offset = layout.lines.len().saturating_sub(height);

        let Some(focus_line) = layout.focus_line else {
            self.focus.scroll_offset = self.focus.scroll_offset.min(max_offset);
            return;
        };

        let offset = self.focus.scroll_offset;
        let next = if focus_line < offset {
            layout
                .focus_card_start
                .filter(|start| focus_line < start.saturating_add(height))
                .unwrap_or(focus_line)
        } else if focus_line >= offset.saturating_add(height) {
            focus_line.saturating_add(1).saturating_sub(height)
        } else {
            offset
        };

        self.focus.scroll_offset = next.min(max_offset);
    }
}
