//! Client-side answer store
//!
//! Maps question identity to the current answer. Iteration follows the
//! order in which questions were first answered; re-answering a question
//! keeps its original position.

use indexmap::IndexMap;
use questionnaire_model::{AnswerValue, QuestionId};

/// In-memory answers for one wizard session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerStore {
    entries: IndexMap<QuestionId, AnswerValue>,
}

impl AnswerStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the answer for a question
    ///
    /// # Returns
    /// The previous answer, if any
    pub fn upsert(&mut self, id: QuestionId, value: AnswerValue) -> Option<AnswerValue> {
        self.entries.insert(id, value)
    }

    /// Current answer for a question
    #[inline]
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&AnswerValue> {
        self.entries.get(id)
    }

    /// Whether the question has a non-empty answer
    #[must_use]
    pub fn is_answered(&self, id: &str) -> bool {
        self.get(id).is_some_and(|v| !v.is_empty())
    }

    /// Answers in first-answered order
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.entries.iter()
    }

    /// Number of recorded answers, empty ones included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was recorded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<QuestionId>> FromIterator<(K, AnswerValue)> for AnswerStore {
    fn from_iter<I: IntoIterator<Item = (K, AnswerValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
