//! Tab, focus and answer selection handlers for the review form.

use bubbletea_rs::Cmd;

use super::ReviewFormApp;
use crate::questionnaire::{Answer, Question};
use crate::tui::messages::AppMsg;

impl ReviewFormApp {
    /// Dispatches tab and focus movement messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::NextTab => self.handle_step_tab(true),
            AppMsg::PreviousTab => self.handle_step_tab(false),
            AppMsg::SelectTab(pillar) => self.handle_select_tab(pillar),
            AppMsg::FocusUp => self.handle_focus_up(),
            AppMsg::FocusDown => self.handle_focus_down(),
            _ => {
                // Unreachable: caller filters to navigation messages.
                None
            }
        }
    }

    /// Dispatches answer selection messages to their handlers.
    pub(super) fn handle_selection_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SelectAnswer {
                pillar,
                question_id,
                option,
            } => {
                self.select_answer(pillar, question_id, option);
                None
            }
            AppMsg::SelectFocused => self.handle_select_focused(),
            AppMsg::SelectOptionNumber(number) => self.handle_select_option_number(*number),
            _ => {
                // Unreachable: caller filters to selection messages.
                None
            }
        }
    }

    /// Records `option` as the answer to `question_id` in `pillar`.
    ///
    /// Replaces any earlier answer for the same question and leaves every
    /// other question untouched. Selections naming an unknown question or an
    /// option the question does not offer are ignored.
    ///
    /// Returns `true` when the selection was recorded.
    pub fn select_answer(&mut self, pillar: &str, question_id: &str, option: &str) -> bool {
        let Some(question) = self.questions.question(pillar, question_id) else {
            tracing::warn!("ignoring selection for unknown question '{question_id}' in '{pillar}'");
            return false;
        };

        if !question.has_option(option) {
            tracing::warn!("ignoring selection of unknown option '{option}' for '{question_id}'");
            return false;
        }

        self.answers.select(question_id, Answer::new(pillar, option));
        true
    }

    /// Questions on the active tab.
    pub(super) fn active_questions(&self) -> &[Question] {
        self.questions.questions(&self.active_tab)
    }

    /// Option count of each question on the active tab.
    pub(super) fn active_option_counts(&self) -> Vec<usize> {
        self.active_questions()
            .iter()
            .map(|question| question.options.len())
            .collect()
    }

    fn focused_question(&self) -> Option<&Question> {
        self.active_questions().get(self.focus.question_index)
    }

    fn handle_step_tab(&mut self, forward: bool) -> Option<Cmd> {
        let count = self.questions.pillar_count();
        if count == 0 {
            return None;
        }

        let current = self.questions.pillar_position(&self.active_tab).unwrap_or(0);
        let last = count - 1;
        let next = match (forward, current) {
            (true, position) if position >= last => 0,
            (true, position) => position + 1,
            (false, 0) => last,
            (false, position) => position - 1,
        };

        if let Some(pillar) = self.questions.pillar_at(next) {
            self.active_tab = pillar.to_owned();
        }
        self.focus.reset();
        self.adjust_scroll_to_focus();
        None
    }

    fn handle_select_tab(&mut self, pillar: &str) -> Option<Cmd> {
        if !self.questions.contains_pillar(pillar) {
            tracing::warn!("ignoring switch to unknown pillar '{pillar}'");
            return None;
        }

        pillar.clone_into(&mut self.active_tab);
        self.focus.reset();
        self.adjust_scroll_to_focus();
        None
    }

    fn handle_focus_up(&mut self) -> Option<Cmd> {
        let counts = self.active_option_counts();
        self.focus.move_up(&counts);
        self.adjust_scroll_to_focus();
        None
    }

    fn handle_focus_down(&mut self) -> Option<Cmd> {
        let counts = self.active_option_counts();
        self.focus.move_down(&counts);
        self.adjust_scroll_to_focus();
        None
    }

    fn handle_select_focused(&mut self) -> Option<Cmd> {
        let question = self.focused_question()?;
        let option = question.options.get(self.focus.option_index)?;

        let question_id = question.id.clone();
        let choice = option.clone();
        let pillar = self.active_tab.clone();
        self.select_answer(&pillar, &question_id, &choice);
        None
    }

    /// Picks option `number` (1-based) of the focused question and moves
    /// focus onto it.
    fn handle_select_option_number(&mut self, number: usize) -> Option<Cmd> {
        let index = number.checked_sub(1)?;
        let question = self.focused_question()?;
        let option = question.options.get(index)?;

        let question_id = question.id.clone();
        let choice = option.clone();
        let pillar = self.active_tab.clone();
        if self.select_answer(&pillar, &question_id, &choice) {
            self.focus.option_index = index;
            self.adjust_scroll_to_focus();
        }
        None
    }
}
