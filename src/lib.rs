//! Pillars library crate for AWS Well-Architected reviews.
//!
//! The library loads a pillar-grouped questionnaire from a remote service,
//! falling back to a built-in sample set when the service is unavailable,
//! and submits the collected answers back to the service. The [`tui`]
//! module presents the questionnaire as a tabbed terminal form.

pub mod config;
pub mod questionnaire;
pub mod telemetry;
pub mod tui;

pub use config::PillarsConfig;
pub use questionnaire::{
    Answer, AnswerSet, HttpQuestionnaireGateway, LoadOutcome, PillarGroup, Question,
    QuestionnaireError, QuestionnaireGateway, SubmitOutcome, SubmitReceipt,
};
