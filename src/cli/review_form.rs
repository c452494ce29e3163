//! TUI mode for answering a Well-Architected review.
//!
//! This module wires configuration into the startup context and runs the
//! bubbletea-rs program.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use pillars::telemetry::{BufferedTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use pillars::tui::{
    ReviewFormApp, SessionContext, set_initial_terminal_size, set_session_context,
    set_telemetry_sink,
};
use pillars::{HttpQuestionnaireGateway, PillarsConfig, QuestionnaireError};

/// Runs the review form against the configured questionnaire service.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built for the configured base URL
/// - The TUI fails to initialise or exits abnormally
pub async fn run(config: &PillarsConfig) -> Result<(), QuestionnaireError> {
    let gateway = HttpQuestionnaireGateway::new(config.api_base(), config.request_timeout())?;
    tracing::debug!("using questionnaire service at {}", gateway.base_url());

    // Store the context for Model::init(). If already set (e.g. re-running
    // the TUI in the same process), the existing context is kept.
    let _ = set_session_context(SessionContext::new(
        Arc::new(gateway),
        config.default_pillar(),
    ));

    // The form owns the terminal, so telemetry is held back until it exits.
    let telemetry_buffer = config.telemetry.then(|| {
        let buffer = Arc::new(BufferedTelemetrySink::default());
        let _ = set_telemetry_sink(Arc::clone(&buffer) as Arc<dyn TelemetrySink>);
        buffer
    });

    if let Ok((width, height)) = crossterm::terminal::size() {
        let _ = set_initial_terminal_size(width, height);
    }

    let outcome = run_tui().await;

    if let Some(buffer) = telemetry_buffer {
        buffer.flush_to(&StderrJsonlTelemetrySink);
    }

    outcome.map_err(|error| QuestionnaireError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `ReviewFormApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // ReviewFormApp::init() reads the startup context from module storage.
    let program = Program::<ReviewFormApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
