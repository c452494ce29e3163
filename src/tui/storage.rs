//! Startup context storage for the review form TUI.
//!
//! `bubbletea-rs` constructs the model through a static `init()`, so the
//! gateway, default tab, terminal size and telemetry sink are stored in
//! `OnceLock` values before the program starts. Per-session UI state lives on
//! the model itself, never here.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::questionnaire::QuestionnaireGateway;
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

/// Global storage for the session context.
static SESSION_CONTEXT: OnceLock<SessionContext> = OnceLock::new();

/// Global storage for initial terminal dimensions.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Global storage for telemetry sink.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Static fallback telemetry sink to avoid allocations on each call.
static DEFAULT_TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Everything the review form needs from its environment.
#[derive(Clone)]
pub struct SessionContext {
    gateway: Arc<dyn QuestionnaireGateway>,
    default_pillar: String,
}

impl SessionContext {
    /// Creates a context around `gateway`, opening on `default_pillar`.
    #[must_use]
    pub fn new(gateway: Arc<dyn QuestionnaireGateway>, default_pillar: impl Into<String>) -> Self {
        Self {
            gateway,
            default_pillar: default_pillar.into(),
        }
    }

    /// The gateway used for loading and submitting.
    #[must_use]
    pub fn gateway(&self) -> Arc<dyn QuestionnaireGateway> {
        Arc::clone(&self.gateway)
    }

    /// The tab shown before and, when present, after loading.
    #[must_use]
    pub fn default_pillar(&self) -> &str {
        &self.default_pillar
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("default_pillar", &self.default_pillar)
            .finish_non_exhaustive()
    }
}

/// Sets the session context for the TUI application.
///
/// This must be called before starting the bubbletea-rs program; without it
/// the form starts with the built-in questions and cannot submit.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_session_context(context: SessionContext) -> bool {
    SESSION_CONTEXT.set(context).is_ok()
}

/// Sets the initial terminal dimensions for the TUI application.
///
/// # Returns
///
/// `true` if the dimensions were set, `false` if they were already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Sets the telemetry sink used by the review form.
///
/// # Returns
///
/// `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Gets a clone of the stored session context.
pub(crate) fn get_session_context() -> Option<SessionContext> {
    SESSION_CONTEXT.get().cloned()
}

/// Gets the initial terminal dimensions, or 80x24 when none were stored.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}

fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_TELEMETRY_SINK.get_or_init(|| Arc::new(NoopTelemetrySink)))
    })
}

/// Records a telemetry event with the configured sink.
pub(crate) fn record_telemetry(event: TelemetryEvent) {
    get_telemetry_sink().record(event);
}
