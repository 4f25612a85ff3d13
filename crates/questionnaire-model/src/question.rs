//! Question definitions
//!
//! A question is immutable once the catalog is loaded. Its [`QuestionType`]
//! decides which input is rendered and which [`crate::AnswerValue`] shape it
//! accepts.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Question identity as it appears in the catalog and on the wire
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Create identity from any string
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for QuestionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for QuestionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Input kind of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionType {
    /// Single-line text
    Text,
    /// Multi-line text
    LongText,
    /// Numeric input, carried as text
    Number,
    /// Single-select dropdown
    Dropdown,
    /// Multi-select checkbox group
    Checkbox,
    /// Single-select radio group
    Radio,
}

impl QuestionType {
    /// Wire tag used by the catalog and the GraphQL `type` field
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::LongText => "longText",
            Self::Number => "number",
            Self::Dropdown => "dropdown",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
        }
    }

    /// Whether the answer is picked from a list of options
    #[inline]
    #[must_use]
    pub fn is_selection(self) -> bool {
        matches!(self, Self::Dropdown | Self::Checkbox | Self::Radio)
    }

    /// Whether the answer is a list rather than a single value
    #[inline]
    #[must_use]
    pub fn is_multi_valued(self) -> bool {
        matches!(self, Self::Checkbox)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Identity, unique within the catalog
    pub id: QuestionId,
    /// Display text
    pub text: String,
    /// Input kind
    #[serde(rename = "type")]
    pub kind: QuestionType,
    /// Whether an answer must be given before moving on
    #[serde(default)]
    pub required: bool,
    /// Choices for selection types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl Question {
    /// Create question without options
    #[must_use]
    pub fn new(id: impl Into<QuestionId>, text: impl Into<String>, kind: QuestionType) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind,
            required: false,
            options: None,
        }
    }

    /// Mark as required
    #[inline]
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// With selection options
    #[must_use]
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Options as a slice, empty for free-form types
    #[inline]
    #[must_use]
    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }
}
