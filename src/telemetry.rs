//! Application telemetry events and sinks.
//!
//! Telemetry never leaves the machine. When enabled it is written to stderr
//! as JSON lines to help diagnose service behaviour during a review session.
//! The form owns the terminal while it runs, so the review form buffers
//! events and writes them out once the session has ended.

use std::io;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::questionnaire::QuestionSource;

/// A structured telemetry event emitted by the review form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Records which question set was installed at startup.
    QuestionsLoaded {
        /// Whether the set came from the service or the fallback.
        source: QuestionSource,
        /// Number of pillars in the installed set.
        pillar_count: usize,
        /// Number of questions in the installed set.
        question_count: usize,
    },
    /// Records a submission the service accepted.
    ReviewSubmitted {
        /// Identifier returned by the service.
        review_id: String,
        /// Number of answers sent.
        answer_count: usize,
        /// Round-trip latency in milliseconds.
        latency_ms: u64,
    },
    /// Records a submission that failed.
    ReviewSubmissionFailed {
        /// User-facing failure message.
        message: String,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Holds events in memory until [`BufferedTelemetrySink::flush_to`] is called.
#[derive(Debug, Default)]
pub struct BufferedTelemetrySink {
    events: Mutex<Vec<TelemetryEvent>>,
}

impl BufferedTelemetrySink {
    /// Number of events waiting to be flushed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    /// Returns `true` when no events are waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forwards every buffered event to `target` in recording order and
    /// empties the buffer.
    pub fn flush_to(&self, target: &dyn TelemetrySink) {
        let drained = self
            .events
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default();

        for event in drained {
            target.record(event);
        }
    }
}

impl TelemetrySink for BufferedTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

/// Test doubles for telemetry assertions.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every recorded event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns a copy of the events recorded so far.
        #[must_use]
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|events| events.clone())
                .unwrap_or_default()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }
    }
}
