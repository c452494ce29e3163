//! Review submission and the user-facing outcome text.

use super::error::QuestionnaireError;
use super::gateway::QuestionnaireGateway;
use super::model::{AnswerSet, SubmitReceipt};

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The service stored the review.
    Accepted(SubmitReceipt),
    /// The request failed; the review was not stored.
    Failed(QuestionnaireError),
}

impl SubmitOutcome {
    /// Returns `true` for [`SubmitOutcome::Accepted`].
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Message shown to the user once the submission resolves.
    #[must_use]
    pub fn notification_text(&self) -> String {
        match self {
            Self::Accepted(receipt) => format!("Review submitted! ID: {}", receipt.review_id),
            Self::Failed(error) => format!("Failed to submit review: {error}"),
        }
    }
}

/// Submits `answers` through `gateway`.
pub async fn submit_review(
    gateway: &dyn QuestionnaireGateway,
    answers: &AnswerSet,
) -> SubmitOutcome {
    match gateway.submit_review(answers).await {
        Ok(receipt) => {
            tracing::info!("review submitted with id {}", receipt.review_id);
            SubmitOutcome::Accepted(receipt)
        }
        Err(error) => {
            tracing::warn!("review submission failed: {error}");
            SubmitOutcome::Failed(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{SubmitOutcome, submit_review};
    use crate::questionnaire::gateway::MockQuestionnaireGateway;
    use crate::questionnaire::{Answer, AnswerSet, QuestionnaireError, SubmitReceipt};

    #[rstest]
    fn accepted_notification_names_review_id() {
        let outcome = SubmitOutcome::Accepted(SubmitReceipt {
            review_id: "abc123".to_owned(),
            message: None,
        });

        assert_eq!(outcome.notification_text(), "Review submitted! ID: abc123");
    }

    #[rstest]
    fn failed_notification_names_status_and_body() {
        let outcome = SubmitOutcome::Failed(QuestionnaireError::Status {
            status: 500,
            body: "server error".to_owned(),
        });

        let text = outcome.notification_text();
        assert!(text.contains("500"), "missing status: {text}");
        assert!(text.contains("server error"), "missing body: {text}");
    }

    #[rstest]
    #[tokio::test]
    async fn submit_forwards_exact_answer_set() {
        let mut answers = AnswerSet::new();
        answers.select("OPS1", Answer::new("Operational Excellence", "Manual"));
        let expected = answers.clone();

        let mut gateway = MockQuestionnaireGateway::new();
        gateway
            .expect_submit_review()
            .withf(move |sent| sent == &expected)
            .times(1)
            .returning(|_| {
                Ok(SubmitReceipt {
                    review_id: "rev-7".to_owned(),
                    message: None,
                })
            });

        let outcome = submit_review(&gateway, &answers).await;

        assert!(outcome.is_accepted());
    }
}
