//! Gateways for talking to the questionnaire service.
//!
//! The trait keeps the review form independent of the transport so tests can
//! substitute a mock, while [`HttpQuestionnaireGateway`] performs the real
//! HTTP calls.

mod http;

pub use http::HttpQuestionnaireGateway;

use async_trait::async_trait;

use super::error::QuestionnaireError;
use super::model::{AnswerSet, PillarGroup, SubmitReceipt};

/// Gateway that can load questions and accept review submissions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionnaireGateway: Send + Sync {
    /// Fetch the pillar-grouped question set.
    async fn fetch_questions(&self) -> Result<PillarGroup, QuestionnaireError>;

    /// Submit the full answer set and return the service's receipt.
    async fn submit_review(&self, answers: &AnswerSet)
    -> Result<SubmitReceipt, QuestionnaireError>;
}
