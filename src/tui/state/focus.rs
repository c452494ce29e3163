//! Option focus within the active pillar tab.

/// Which option of which question currently has focus.
///
/// Focus walks every option of every question on the active tab in display
/// order: moving down from a question's last option lands on the next
/// question's first option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusState {
    /// Index of the focused question on the active tab.
    pub question_index: usize,
    /// Index of the focused option within that question.
    pub option_index: usize,
    /// Number of body lines scrolled off the top.
    pub scroll_offset: usize,
}

impl FocusState {
    /// Creates focus on the first option of the first question.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            question_index: 0,
            option_index: 0,
            scroll_offset: 0,
        }
    }

    /// Moves focus back to the top of the tab.
    pub const fn reset(&mut self) {
        *self = Self::new();
    }

    /// Moves focus to the next option, given each question's option count.
    ///
    /// Stays put on the last option of the last question.
    pub fn move_down(&mut self, option_counts: &[usize]) {
        let Some(&current_count) = option_counts.get(self.question_index) else {
            return;
        };

        if self.option_index.saturating_add(1) < current_count {
            self.option_index += 1;
            return;
        }

        let next_question = option_counts
            .iter()
            .enumerate()
            .skip(self.question_index.saturating_add(1))
            .find(|(_, count)| **count > 0)
            .map(|(index, _)| index);

        if let Some(index) = next_question {
            self.question_index = index;
            self.option_index = 0;
        }
    }

    /// Moves focus to the previous option, given each question's option
    /// count.
    ///
    /// Stays put on the first option of the first question.
    pub fn move_up(&mut self, option_counts: &[usize]) {
        if self.option_index > 0 {
            self.option_index -= 1;
            return;
        }

        let previous_question = option_counts
            .iter()
            .enumerate()
            .take(self.question_index)
            .rev()
            .find(|(_, count)| **count > 0);

        if let Some((index, count)) = previous_question {
            self.question_index = index;
            self.option_index = count - 1;
        }
    }

}
