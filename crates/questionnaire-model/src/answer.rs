//! Answer values and their wire form
//!
//! The transport only carries text, so every [`AnswerValue`] travels as its
//! JSON encoding inside an [`AnswerPair`]. A scalar `John` becomes `"John"`
//! (with the quotes), a selection `[a, b]` becomes `["a","b"]`.

use crate::error::CodecError;
use crate::question::QuestionType;
use serde::{Deserialize, Serialize};

/// Answer to a single question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Text, number, dropdown and radio answers
    Scalar(String),
    /// Checkbox answers, in the order they were selected
    MultiSelect(Vec<String>),
}

impl AnswerValue {
    /// Create scalar answer
    #[inline]
    #[must_use]
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    /// Create multi-select answer
    #[must_use]
    pub fn multi<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MultiSelect(values.into_iter().map(Into::into).collect())
    }

    /// Empty string or empty list counts as no answer.
    ///
    /// Content is not inspected, so a numeric `"0"` is answered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Scalar(s) => s.is_empty(),
            Self::MultiSelect(items) => items.is_empty(),
        }
    }

    /// Whether this shape is accepted by a question of `kind`
    #[inline]
    #[must_use]
    pub fn fits(&self, kind: QuestionType) -> bool {
        match self {
            Self::Scalar(_) => !kind.is_multi_valued(),
            Self::MultiSelect(_) => kind.is_multi_valued(),
        }
    }

    /// Short human-readable rendering for review screens
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Scalar(s) => s.clone(),
            Self::MultiSelect(items) => items.join(", "),
        }
    }
}

/// One `(questionId, value)` pair as it crosses the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerPair {
    /// Question identity
    pub question_id: String,
    /// JSON encoding of the answer value
    pub value: Option<String>,
}

impl AnswerPair {
    /// Create pair from already-encoded text
    #[must_use]
    pub fn new(question_id: impl Into<String>, value: Option<String>) -> Self {
        Self {
            question_id: question_id.into(),
            value,
        }
    }

    /// Encode a value into its wire form
    ///
    /// # Errors
    /// - `CodecError::Encode` if the serializer fails
    pub fn encode(question_id: impl Into<String>, value: &AnswerValue) -> Result<Self, CodecError> {
        let question_id = question_id.into();
        match serde_json::to_string(value) {
            Ok(text) => Ok(Self::new(question_id, Some(text))),
            Err(source) => Err(CodecError::Encode {
                question_id,
                source,
            }),
        }
    }

    /// Decode the wire text back into a value; `None` when no value was sent
    ///
    /// # Errors
    /// - `CodecError::Decode` if the text is not a string or list of strings
    pub fn decode(&self) -> Result<Option<AnswerValue>, CodecError> {
        self.value
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(|source| CodecError::Decode {
                question_id: self.question_id.clone(),
                source,
            })
    }
}

/// Full answer set sent by the client, mirrors `QuestionnaireResponseInput`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    /// Pairs in the order the questions were first answered
    pub answers: Vec<AnswerPair>,
}

impl SubmissionPayload {
    /// Create payload from pairs
    #[inline]
    #[must_use]
    pub fn new(answers: Vec<AnswerPair>) -> Self {
        Self { answers }
    }

    /// Number of pairs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether no answers are carried
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn scalar_encodes_as_json_string() {
        let pair = AnswerPair::encode("1", &AnswerValue::scalar("John")).unwrap();
        assert_eq!(pair.value.as_deref(), Some("\"John\""));
    }

    #[test]
    fn multi_select_encodes_as_json_array() {
        let pair = AnswerPair::encode("3", &AnswerValue::multi(["a", "b"])).unwrap();
        assert_eq!(pair.value.as_deref(), Some(r#"["a","b"]"#));
    }

    #[test]
    fn missing_value_decodes_to_none() {
        let pair = AnswerPair::new("1", None);
        assert_eq!(pair.decode().unwrap(), None);
    }

    #[test]
    fn non_string_payload_is_rejected() {
        let pair = AnswerPair::new("1", Some("{\"x\":1}".to_string()));
        assert!(matches!(pair.decode(), Err(CodecError::Decode { .. })));
    }

    #[test]
    fn zero_is_not_empty() {
        assert!(!AnswerValue::scalar("0").is_empty());
        assert!(AnswerValue::scalar("").is_empty());
        assert!(AnswerValue::MultiSelect(vec![]).is_empty());
    }

    #[test]
    fn shape_fits_question_kind() {
        assert!(AnswerValue::scalar("x").fits(QuestionType::Radio));
        assert!(!AnswerValue::scalar("x").fits(QuestionType::Checkbox));
        assert!(AnswerValue::multi(["x"]).fits(QuestionType::Checkbox));
        assert!(!AnswerValue::multi(["x"]).fits(QuestionType::Number));
    }

    #[test]
    fn payload_uses_camel_case_keys() {
        let payload = SubmissionPayload::new(vec![AnswerPair::new("1", Some("\"a\"".into()))]);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["answers"][0]["questionId"], "1");
    }

    fn value_strategy() -> impl Strategy<Value = AnswerValue> {
        prop_oneof![
            any::<String>().prop_map(AnswerValue::Scalar),
            prop::collection::vec(any::<String>(), 0..5).prop_map(AnswerValue::MultiSelect),
        ]
    }

    proptest! {
        #[test]
        fn prop_encoded_value_decodes_to_itself(id in "[a-z0-9]{1,8}", value in value_strategy()) {
            let pair = AnswerPair::encode(id.clone(), &value).unwrap();
            prop_assert_eq!(&pair.question_id, &id);
            prop_assert_eq!(pair.decode().unwrap(), Some(value));
        }
    }
}
