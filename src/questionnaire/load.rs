//! Initial question-set loading with static fallback.

use serde::{Deserialize, Serialize};

use super::error::QuestionnaireError;
use super::fallback::fallback_questions;
use super::gateway::QuestionnaireGateway;
use super::model::PillarGroup;

/// Where a loaded question set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSource {
    /// Parsed from the service response.
    Service,
    /// The compiled-in sample set.
    Fallback,
}

/// Result of the one-shot question load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The service answered with a usable question set.
    Loaded(PillarGroup),
    /// The service failed and the static set was substituted.
    LoadedFallback {
        /// The fallback question set.
        questions: PillarGroup,
        /// Human-readable warning naming the failure.
        reason: String,
    },
}

impl LoadOutcome {
    /// Builds a fallback outcome for `error`.
    #[must_use]
    pub fn fallback_for(error: &QuestionnaireError) -> Self {
        Self::LoadedFallback {
            questions: fallback_questions(),
            reason: format!(
                "Could not load questions from the service ({error}). \
                 Showing built-in sample questions."
            ),
        }
    }

    /// The question set to install.
    #[must_use]
    pub const fn questions(&self) -> &PillarGroup {
        match self {
            Self::Loaded(questions) | Self::LoadedFallback { questions, .. } => questions,
        }
    }

    /// The warning to display, if the fallback was used.
    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        match self {
            Self::Loaded(_) => None,
            Self::LoadedFallback { reason, .. } => Some(reason.as_str()),
        }
    }

    /// Where the question set came from.
    #[must_use]
    pub const fn source(&self) -> QuestionSource {
        match self {
            Self::Loaded(_) => QuestionSource::Service,
            Self::LoadedFallback { .. } => QuestionSource::Fallback,
        }
    }
}

/// Fetches the question set, substituting the static fallback on any failure.
pub async fn load_questions(gateway: &dyn QuestionnaireGateway) -> LoadOutcome {
    match gateway.fetch_questions().await {
        Ok(questions) => LoadOutcome::Loaded(questions),
        Err(error) => {
            tracing::warn!("falling back to built-in questions: {error}");
            LoadOutcome::fallback_for(&error)
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{LoadOutcome, QuestionSource, load_questions};
    use crate::questionnaire::gateway::MockQuestionnaireGateway;
    use crate::questionnaire::{PillarGroup, Question, QuestionnaireError, fallback_questions};

    fn service_questions() -> PillarGroup {
        PillarGroup::from_pillars([(
            "Reliability".to_owned(),
            vec![Question {
                id: "REL9".to_owned(),
                text: "Do you test failover?".to_owned(),
                options: vec!["No".to_owned(), "Yes".to_owned()],
                recommendation: "Run game days".to_owned(),
            }],
        )])
    }

    #[rstest]
    #[tokio::test]
    async fn successful_fetch_installs_service_questions_without_warning() {
        let mut gateway = MockQuestionnaireGateway::new();
        gateway
            .expect_fetch_questions()
            .times(1)
            .returning(|| Ok(service_questions()));

        let outcome = load_questions(&gateway).await;

        assert_eq!(outcome, LoadOutcome::Loaded(service_questions()));
        assert_eq!(outcome.warning(), None);
        assert_eq!(outcome.source(), QuestionSource::Service);
    }

    #[rstest]
    #[case::status(QuestionnaireError::Status { status: 503, body: "down".to_owned() }, "503")]
    #[case::network(
        QuestionnaireError::Network { message: "connection refused".to_owned() },
        "connection refused"
    )]
    #[tokio::test]
    async fn failed_fetch_installs_fallback_with_warning(
        #[case] error: QuestionnaireError,
        #[case] expected_detail: &str,
    ) {
        let mut gateway = MockQuestionnaireGateway::new();
        let returned = error.clone();
        gateway
            .expect_fetch_questions()
            .times(1)
            .returning(move || Err(returned.clone()));

        let outcome = load_questions(&gateway).await;

        assert_eq!(outcome.questions(), &fallback_questions());
        assert_eq!(outcome.source(), QuestionSource::Fallback);
        let warning = outcome.warning().expect("fallback should carry a warning");
        assert!(
            warning.contains(expected_detail),
            "warning should name the failure: {warning}"
        );
    }
}
