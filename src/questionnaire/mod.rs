//! Questionnaire domain: question sets, answers, and the service gateway.
//!
//! The question set is loaded once per session through a
//! [`QuestionnaireGateway`], with the compiled-in [`fallback_questions`]
//! standing in whenever the service cannot deliver a usable set. Answers are
//! collected in an [`AnswerSet`] and submitted as a whole.

pub mod error;
pub mod fallback;
pub mod gateway;
pub mod load;
pub mod model;
pub mod submit;

pub use error::QuestionnaireError;
pub use fallback::fallback_questions;
pub use gateway::{HttpQuestionnaireGateway, QuestionnaireGateway};
pub use load::{LoadOutcome, QuestionSource, load_questions};
pub use model::{
    Answer, AnswerSet, DEFAULT_PILLAR, PillarGroup, Question, ReviewSubmission, SubmitReceipt,
};
pub use submit::{SubmitOutcome, submit_review};
