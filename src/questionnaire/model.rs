//! Question set and answer types exchanged with the questionnaire service.
//!
//! The wire shapes mirror the service contract: the question set is a JSON
//! object mapping pillar names to arrays of questions, and a submission is a
//! JSON object with a single `answers` mapping keyed by question id.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::QuestionnaireError;

/// Pillar shown first until a question set is loaded.
pub const DEFAULT_PILLAR: &str = "Operational Excellence";

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique across every pillar of a question set.
    pub id: String,
    /// Prompt shown to the user.
    #[serde(rename = "question")]
    pub text: String,
    /// Selectable choices in display order.
    pub options: Vec<String>,
    /// Guidance rendered below the choices.
    pub recommendation: String,
}

impl Question {
    /// Returns `true` when `option` is one of this question's choices.
    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|candidate| candidate == option)
    }
}

/// Questions grouped by pillar, in the order the mapping was received.
///
/// Iteration order drives tab order, so the mapping is backed by an
/// [`IndexMap`] rather than a hash or B-tree map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PillarGroup {
    pillars: IndexMap<String, Vec<Question>>,
}

impl PillarGroup {
    /// Creates an empty question set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a question set from `(pillar, questions)` pairs, keeping their
    /// order.
    #[must_use]
    pub fn from_pillars<I>(pillars: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<Question>)>,
    {
        Self {
            pillars: pillars.into_iter().collect(),
        }
    }

    /// Returns `true` when no pillars are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pillars.is_empty()
    }

    /// Number of pillars.
    #[must_use]
    pub fn pillar_count(&self) -> usize {
        self.pillars.len()
    }

    /// Total number of questions across all pillars.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.pillars.values().map(Vec::len).sum()
    }

    /// Pillar names in tab order.
    pub fn pillar_names(&self) -> impl Iterator<Item = &str> {
        self.pillars.keys().map(String::as_str)
    }

    /// Returns the pillar at `index` in tab order.
    #[must_use]
    pub fn pillar_at(&self, index: usize) -> Option<&str> {
        self.pillars.get_index(index).map(|(name, _)| name.as_str())
    }

    /// Returns the tab position of `pillar`.
    #[must_use]
    pub fn pillar_position(&self, pillar: &str) -> Option<usize> {
        self.pillars.get_index_of(pillar)
    }

    /// Returns `true` when `pillar` is one of the loaded pillars.
    #[must_use]
    pub fn contains_pillar(&self, pillar: &str) -> bool {
        self.pillars.contains_key(pillar)
    }

    /// Questions for `pillar`, or an empty slice for unknown pillars.
    #[must_use]
    pub fn questions(&self, pillar: &str) -> &[Question] {
        self.pillars
            .get(pillar)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Looks up a question by id within a specific pillar.
    #[must_use]
    pub fn question(&self, pillar: &str, question_id: &str) -> Option<&Question> {
        self.questions(pillar)
            .iter()
            .find(|question| question.id == question_id)
    }

    /// Iterates `(pillar, questions)` pairs in tab order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Question])> {
        self.pillars
            .iter()
            .map(|(name, questions)| (name.as_str(), questions.as_slice()))
    }

    /// Checks the invariants a loaded question set must satisfy.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionnaireError::InvalidQuestionSet`] when a question id
    /// repeats anywhere in the set or a question offers no options.
    pub fn validate(&self) -> Result<(), QuestionnaireError> {
        let mut seen = HashSet::new();

        for (pillar, questions) in self.iter() {
            for question in questions {
                if question.options.is_empty() {
                    return Err(QuestionnaireError::InvalidQuestionSet {
                        message: format!(
                            "question '{}' in pillar '{pillar}' has no options",
                            question.id
                        ),
                    });
                }

                if !seen.insert(question.id.as_str()) {
                    return Err(QuestionnaireError::InvalidQuestionSet {
                        message: format!("question id '{}' appears more than once", question.id),
                    });
                }
            }
        }

        Ok(())
    }
}

/// One recorded selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Pillar the question belongs to.
    pub pillar: String,
    /// Selected option text.
    pub answer: String,
}

impl Answer {
    /// Creates an answer for `pillar` with the selected option.
    #[must_use]
    pub fn new(pillar: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            pillar: pillar.into(),
            answer: answer.into(),
        }
    }
}

/// The user's current selections keyed by question id.
///
/// Absence of a key means the question is unanswered. At most one answer
/// exists per question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    entries: IndexMap<String, Answer>,
}

impl AnswerSet {
    /// Creates an empty answer set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `answer` for `question_id`, returning the answer it replaced.
    pub fn select(&mut self, question_id: impl Into<String>, answer: Answer) -> Option<Answer> {
        self.entries.insert(question_id.into(), answer)
    }

    /// Returns the answer recorded for `question_id`.
    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.entries.get(question_id)
    }

    /// Returns the selected option text for `question_id`.
    #[must_use]
    pub fn selected_option(&self, question_id: &str) -> Option<&str> {
        self.get(question_id).map(|answer| answer.answer.as_str())
    }

    /// Number of answered questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing has been answered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Request body for a review submission.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReviewSubmission<'a> {
    /// Every recorded answer, across all pillars.
    pub answers: &'a AnswerSet,
}

/// Successful submission response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmitReceipt {
    /// Identifier the service assigned to the stored review.
    pub review_id: String,
    /// Optional human-readable confirmation from the service.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
