//! `Model` trait implementation for the review form.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `ReviewFormApp`, handling initialisation, update dispatch, and view
//! rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::{FormPhase, ReviewFormApp};
use crate::tui::input::{InputContext, map_key_to_message};
use crate::tui::messages::AppMsg;
use crate::tui::storage::{get_initial_terminal_size, get_session_context};

impl Model for ReviewFormApp {
    fn init() -> (Self, Option<Cmd>) {
        let (width, height) = get_initial_terminal_size();
        let model = Self::from_context(get_session_context()).with_dimensions(width, height);

        // The question load is the only request issued at startup.
        let cmd = model.load_questions_cmd();

        (model, Some(cmd))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs with context-aware mapping
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let mapped = map_key_to_message(key_msg, self.input_context());
            return mapped.and_then(|app_msg| self.handle_message(&app_msg));
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&Self::render_help_overlay());
        }

        if let Some(notification) = self.notifications.current() {
            return self.normalise_viewport(&self.render_notification(notification));
        }

        let output = match self.phase {
            FormPhase::Loading => Self::render_loading(),
            FormPhase::Ready => self.render_form(),
        };
        self.normalise_viewport(&output)
    }
}

impl ReviewFormApp {
    /// Returns the current input context for context-aware key mapping.
    pub(super) fn input_context(&self) -> InputContext {
        if !self.notifications.is_empty() {
            return InputContext::Notification;
        }
        match self.phase {
            FormPhase::Loading => InputContext::Loading,
            FormPhase::Ready => InputContext::Form,
        }
    }

    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap, and padded with spaces so shorter rows clear stale cells
    /// left by a previous frame.
    fn normalise_viewport(&self, output: &str) -> String {
        let safe_width = self.content_width();
        let height = usize::from(self.height.max(1));

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| fit_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

/// Pads or truncates `line` to exactly `width` display columns.
fn fit_line(line: &str, width: usize) -> String {
    let mut output = String::with_capacity(line.len());
    let mut visible_width = 0_usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible_width.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    output.push_str(&" ".repeat(width.saturating_sub(visible_width)));
    output
}
