//! Error types for the questionnaire model
//!
//! Provides error handling for:
//! - Catalog parsing and integrity checks
//! - Encoding and decoding answer values on the wire

use crate::question::{QuestionId, QuestionType};

/// Errors while loading a question catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog document is not a JSON array of questions
    #[error("malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Catalog has no questions
    #[error("catalog contains no questions")]
    Empty,

    /// Two questions share an identity
    #[error("duplicate question id: {0}")]
    DuplicateId(QuestionId),

    /// Selection question declared without options
    #[error("question {id} of type {kind} has no options")]
    MissingOptions {
        /// Offending question
        id: QuestionId,
        /// Its declared type
        kind: QuestionType,
    },
}

/// Errors while converting answer values to and from their text form
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Value could not be encoded
    #[error("failed to encode answer for question {question_id}: {source}")]
    Encode {
        /// Question the value belongs to
        question_id: String,
        /// Underlying serializer error
        #[source]
        source: serde_json::Error,
    },

    /// Text is not a valid encoded answer
    #[error("failed to decode answer for question {question_id}: {source}")]
    Decode {
        /// Question the value belongs to
        question_id: String,
        /// Underlying deserializer error
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_error_display() {
        let err = CatalogError::MissingOptions {
            id: QuestionId::from("color"),
            kind: QuestionType::Radio,
        };
        assert_eq!(err.to_string(), "question color of type radio has no options");
        assert!(CatalogError::Empty.to_string().contains("no questions"));
    }
}
