//! Terminal User Interface for the Well-Architected review form.
//!
//! This module provides an interactive TUI that shows review questions as
//! one tab per pillar, records the user's answers and submits them, using
//! the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::ReviewFormApp`]
//! - **View**: Rendering logic in the app and each component's `view()`
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Focus and notification state
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//! - [`session`]: Liveness guard for background requests
//!
//! # Startup Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the gateway and default tab are handed over through
//! module-level storage. Call [`set_session_context`] before starting the
//! program; `ReviewFormApp::init()` reads it and issues the question load.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod session;
pub mod state;
mod storage;

pub use app::{FormPhase, ReviewFormApp};
pub use storage::{
    SessionContext, set_initial_terminal_size, set_session_context, set_telemetry_sink,
};
