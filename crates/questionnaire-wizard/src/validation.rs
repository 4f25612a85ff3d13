//! Required-answer validation

use questionnaire_model::{AnswerValue, Question, QuestionId, REQUIRED_MESSAGE};
use std::fmt;

/// Inline error for one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Question the message belongs to
    pub question_id: QuestionId,
    /// Human-readable message
    pub message: String,
}

impl ValidationError {
    /// Required-but-unanswered error
    #[must_use]
    pub fn required(question_id: QuestionId) -> Self {
        Self {
            question_id,
            message: REQUIRED_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.question_id, self.message)
    }
}

/// Check one question against its current answer.
///
/// Only presence is checked: missing, empty string and empty list fail a
/// required question. The content of a non-empty answer is never inspected,
/// so `"0"` for a number question passes.
pub fn validate(question: &Question, answer: Option<&AnswerValue>) -> Result<(), ValidationError> {
    if question.required && answer.map_or(true, AnswerValue::is_empty) {
        return Err(ValidationError::required(question.id.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use questionnaire_model::QuestionType;

    fn required(kind: QuestionType) -> Question {
        Question::new("q", "Question?", kind).required()
    }

    #[test]
    fn optional_question_always_passes() {
        let q = Question::new("q", "Question?", QuestionType::Text);
        assert!(validate(&q, None).is_ok());
        assert!(validate(&q, Some(&AnswerValue::scalar(""))).is_ok());
    }

    #[test]
    fn required_question_without_answer_fails() {
        let err = validate(&required(QuestionType::Text), None).unwrap_err();
        assert_eq!(err.message, REQUIRED_MESSAGE);
        assert_eq!(err.question_id.as_str(), "q");
    }

    #[test]
    fn empty_checkbox_list_is_unanswered() {
        let q = required(QuestionType::Checkbox).with_options(["a", "b"]);
        assert!(validate(&q, Some(&AnswerValue::MultiSelect(vec![]))).is_err());
        assert!(validate(&q, Some(&AnswerValue::multi(["a"]))).is_ok());
    }

    proptest! {
        #[test]
        fn prop_any_numeric_text_passes(n in any::<i64>()) {
            let q = required(QuestionType::Number);
            prop_assert!(validate(&q, Some(&AnswerValue::scalar(n.to_string()))).is_ok());
        }

        #[test]
        fn prop_non_empty_scalar_passes(s in ".+") {
            let q = required(QuestionType::LongText);
            prop_assert!(validate(&q, Some(&AnswerValue::Scalar(s))).is_ok());
        }
    }
}
