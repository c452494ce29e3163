//! Error types exposed by the questionnaire layer.

use thiserror::Error;

/// Errors surfaced while configuring the client or talking to the
/// questionnaire service.
///
/// The `Display` text of each variant is the message shown to the user, so
/// it stays free-form rather than carrying structured codes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuestionnaireError {
    /// Networking failed before a response was received.
    #[error("network error talking to the questionnaire service: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The service answered with a status outside the 2xx range.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Raw response body, or a placeholder when it could not be read.
        body: String,
    },

    /// A successful response carried a body that could not be decoded.
    #[error("could not decode service response: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// A decoded question set broke one of its invariants.
    #[error("invalid question set: {message}")]
    InvalidQuestionSet {
        /// Which invariant failed and where.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
