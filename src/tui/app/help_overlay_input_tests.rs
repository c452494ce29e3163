//! Regression tests for help overlay key handling in the TUI update loop.

use bubbletea_rs::Model;
use crossterm::event::{KeyCode, KeyModifiers};

use super::tests::ready_app;
use super::*;
use crate::questionnaire::fallback_questions;

fn key_msg(key: KeyCode) -> bubbletea_rs::event::KeyMsg {
    bubbletea_rs::event::KeyMsg {
        key,
        modifiers: KeyModifiers::empty(),
    }
}

fn app_with_help_open() -> ReviewFormApp {
    let mut app = ready_app(fallback_questions(), "Security");
    app.update(Box::new(key_msg(KeyCode::Char('?'))));
    assert!(app.show_help);
    app
}

#[test]
fn help_overlay_replaces_form_view() {
    let app = app_with_help_open();

    let view = app.view();

    assert!(view.contains("=== Keyboard Shortcuts ==="));
    assert!(!view.contains("[ Submit Review ]"));
}

#[test]
fn help_overlay_closes_on_unmapped_key() {
    let mut app = app_with_help_open();

    let cmd = app.update(Box::new(key_msg(KeyCode::Char('x'))));

    assert!(cmd.is_none());
    assert!(!app.show_help);
}

#[test]
fn closing_help_restores_form_view() {
    let mut app = app_with_help_open();

    app.update(Box::new(key_msg(KeyCode::Esc)));
    let view = app.view();

    assert!(!view.contains("=== Keyboard Shortcuts ==="));
    assert!(view.contains("[ Submit Review ]"));
}

#[test]
fn help_overlay_consumes_q_without_quitting() {
    let mut app = app_with_help_open();

    let cmd = app.update(Box::new(key_msg(KeyCode::Char('q'))));

    assert!(cmd.is_none());
    assert!(!app.show_help);
    assert!(!app.is_torn_down());
}

#[test]
fn help_overlay_consumes_s_without_submitting() {
    let mut app = app_with_help_open();

    let cmd = app.update(Box::new(key_msg(KeyCode::Char('s'))));

    assert!(cmd.is_none());
    assert_eq!(app.pending_submissions(), 0);
}

#[test]
fn q_still_quits_when_help_overlay_is_hidden() {
    let mut app = ready_app(fallback_questions(), "Security");
    assert!(!app.show_help);

    let cmd = app.update(Box::new(key_msg(KeyCode::Char('q'))));

    assert!(cmd.is_some());
}
