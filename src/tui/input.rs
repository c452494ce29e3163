//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. Mapping depends on what the form is
//! currently showing.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;

/// What the form is showing, for context-aware key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The question load is still outstanding.
    Loading,
    /// The tabbed form is interactive.
    Form,
    /// A blocking notification is on screen.
    Notification,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    if is_interrupt(key) {
        return Some(AppMsg::Quit);
    }

    match context {
        InputContext::Loading => map_loading_key(key.key),
        InputContext::Form => map_form_key(key.key),
        InputContext::Notification => map_notification_key(key.key),
    }
}

fn is_interrupt(key: &bubbletea_rs::event::KeyMsg) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.key == KeyCode::Char('c')
}

const fn map_loading_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        _ => None,
    }
}

fn map_form_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(AppMsg::NextTab),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(AppMsg::PreviousTab),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::FocusDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::FocusUp),
        KeyCode::Char(' ') | KeyCode::Enter => Some(AppMsg::SelectFocused),
        KeyCode::Char('s') => Some(AppMsg::SubmitRequested),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Char(digit @ '1'..='9') => digit
            .to_digit(10)
            .and_then(|number| usize::try_from(number).ok())
            .map(AppMsg::SelectOptionNumber),
        _ => None,
    }
}

/// Notifications block the form: only dismissal keys get through.
const fn map_notification_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(AppMsg::DismissNotification),
        _ => None,
    }
}
