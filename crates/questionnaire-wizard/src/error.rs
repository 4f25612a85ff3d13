//! Error types for the wizard and its gateway
//!
//! Validation failures are not errors here: they are recorded on the wizard
//! as [`crate::ValidationError`] values and surfaced inline. The enums below
//! cover misuse of the state machine and failures talking to the server.

use crate::state::Phase;
use questionnaire_model::{CatalogError, CodecError, QuestionType};
use std::path::PathBuf;

/// Errors raised by the wizard state machine
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    /// No catalog loaded yet
    #[error("catalog not loaded")]
    CatalogNotLoaded,

    /// Question id not present in the catalog
    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    /// Value shape does not fit the question type
    #[error("answer for question {question_id} does not fit type {kind}")]
    ShapeMismatch {
        /// Question being answered
        question_id: String,
        /// Its declared type
        kind: QuestionType,
    },

    /// Transition not present in the transition table
    #[error("illegal transition: {from:?} -> {to:?}")]
    IllegalTransition {
        /// Current phase
        from: Phase,
        /// Requested phase
        to: Phase,
    },

    /// Operation not available in the current phase
    #[error("cannot {action} while {phase:?}")]
    NotAllowed {
        /// Attempted operation
        action: &'static str,
        /// Current phase
        phase: Phase,
    },

    /// A submission is already in flight
    #[error("submission already in flight")]
    SubmissionInFlight,

    /// Questionnaire was already submitted
    #[error("questionnaire already submitted")]
    AlreadySubmitted,

    /// Answers could not be encoded for transport
    #[error("encoding failed: {0}")]
    Encode(#[from] CodecError),
}

/// Errors talking to the questionnaire server
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Network or protocol failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server returned {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },

    /// GraphQL errors in the response
    #[error("graphql error: {0}")]
    Graphql(String),

    /// Server answered but did not store the submission
    #[error("server rejected the submission")]
    Rejected,
}

impl GatewayError {
    /// Whether a later retry could succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Http { .. } | Self::Rejected)
    }
}

/// Errors fetching the question catalog
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Local catalog file could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        /// Catalog file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Remote catalog could not be fetched
    #[error("failed to fetch catalog: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Catalog document is invalid
    #[error("invalid catalog: {0}")]
    Invalid(#[from] CatalogError),
}
