//! Testing utilities for the questionnaire workspace
//!
//! Shared catalogs, gateways, and store helpers.

#![allow(missing_docs)]

use async_trait::async_trait;
use parking_lot::Mutex;
use questionnaire_model::{Catalog, Question, QuestionType, SubmissionPayload};
use questionnaire_store::{SharedStore, SubmissionStore};
use questionnaire_wizard::{GatewayError, SubmissionGateway};
use tempfile::TempDir;

/// `1`: required text, `2`: optional number
pub fn two_question_catalog() -> Catalog {
    Catalog::new(vec![
        Question::new("1", "What is your name?", QuestionType::Text).required(),
        Question::new("2", "How old are you?", QuestionType::Number),
    ])
    .unwrap()
}

/// One question of every type
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        Question::new("name", "What is your name?", QuestionType::Text).required(),
        Question::new("bio", "Tell us about yourself", QuestionType::LongText),
        Question::new("age", "How old are you?", QuestionType::Number).required(),
        Question::new("country", "Where do you live?", QuestionType::Dropdown)
            .required()
            .with_options(["Canada", "Germany", "Japan"]),
        Question::new("languages", "Which languages do you use?", QuestionType::Checkbox)
            .with_options(["Rust", "Go", "TypeScript"]),
        Question::new("contact", "May we contact you?", QuestionType::Radio)
            .required()
            .with_options(["Yes", "No"]),
    ])
    .unwrap()
}

/// Store in a fresh temp dir; keep the dir alive as long as the store
pub async fn temp_store() -> (TempDir, SharedStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = SubmissionStore::open_shared(dir.path().join("questionnaire-data.json"))
        .await
        .unwrap();
    (dir, store)
}

/// Gateway writing straight into a store
#[derive(Debug, Clone)]
pub struct StoreGateway(pub SharedStore);

#[async_trait]
impl SubmissionGateway for StoreGateway {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), GatewayError> {
        self.0
            .append(payload.answers.clone())
            .await
            .map(|_| ())
            .map_err(|_| GatewayError::Rejected)
    }
}

/// Gateway that keeps every payload and can be switched to fail
#[derive(Debug, Default)]
pub struct RecordingGateway {
    sent: Mutex<Vec<SubmissionPayload>>,
    failing: Mutex<bool>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let gateway = Self::default();
        gateway.set_failing(true);
        gateway
    }

    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock() = failing;
    }

    pub fn sent(&self) -> Vec<SubmissionPayload> {
        self.sent.lock().clone()
    }

    pub fn attempts(&self) -> usize {
        self.sent.lock().len()
    }
}

#[async_trait]
impl SubmissionGateway for RecordingGateway {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), GatewayError> {
        self.sent.lock().push(payload.clone());
        if *self.failing.lock() {
            Err(GatewayError::Rejected)
        } else {
            Ok(())
        }
    }
}
