//! UI components for the review form TUI.
//!
//! This module provides reusable UI components following the bubbletea-rs
//! Model-View pattern. Components are stateless: each renders from a view
//! context assembled by the application model.

mod notification;
mod question_card;
mod tab_strip;
mod text_wrap;

pub use notification::{NotificationComponent, NotificationViewContext};
pub use question_card::{QuestionCardComponent, QuestionCardViewContext, RenderedCard};
pub use tab_strip::{TabStripComponent, TabStripViewContext};
pub use text_wrap::{wrap_with_prefix, wrap_words};
