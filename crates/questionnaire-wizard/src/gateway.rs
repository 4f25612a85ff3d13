//! Submission gateway
//!
//! Turns the answer store into the text-only wire payload and hands it to
//! the server. [`GraphqlClient`] is the production implementation; tests
//! plug in their own [`SubmissionGateway`].
//!
//! One attempt per call. Failures are logged and returned, never retried
//! here; retrying is the wizard's `SubmitFailed` affordance.

use crate::answers::AnswerStore;
use crate::error::GatewayError;
use async_trait::async_trait;
use questionnaire_model::{AnswerPair, CodecError, Submission, SubmissionPayload};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

/// Mutation sent for every submission
pub const SUBMIT_QUESTIONNAIRE: &str = "\
mutation SubmitQuestionnaire($response: QuestionnaireResponseInput!) {
  submitQuestionnaire(response: $response)
}";

/// Query listing stored submissions
pub const LIST_SUBMISSIONS: &str = "\
query Submissions {
  submissions { id createdAt answers { questionId value } }
}";

/// Default GraphQL endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:4000/graphql";

/// Where submissions go
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Deliver one payload
    ///
    /// # Errors
    /// Any [`GatewayError`]; the caller decides how to surface it
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), GatewayError>;
}

/// Encode every answer into `(questionId, json-text)` pairs, order preserved
///
/// # Errors
/// - `CodecError::Encode` if a value fails to serialize
pub fn encode_answers(answers: &AnswerStore) -> Result<SubmissionPayload, CodecError> {
    answers
        .iter()
        .map(|(id, value)| AnswerPair::encode(id.as_str(), value))
        .collect::<Result<Vec<_>, _>>()
        .map(SubmissionPayload::new)
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitData {
    submit_questionnaire: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct SubmissionsData {
    submissions: Vec<Submission>,
}

/// GraphQL client for the questionnaire server
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GraphqlClient {
    /// Create client for `endpoint`
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Create client reusing an existing HTTP client
    #[must_use]
    pub fn with_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint URL
    #[inline]
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Underlying HTTP client
    #[inline]
    #[must_use]
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, GatewayError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: String = response
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(512)
                .collect();
            return Err(GatewayError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GraphqlResponse<T> = response.json().await?;
        if !envelope.errors.is_empty() {
            let messages: Vec<_> = envelope.errors.into_iter().map(|e| e.message).collect();
            return Err(GatewayError::Graphql(messages.join("; ")));
        }

        envelope
            .data
            .ok_or_else(|| GatewayError::Graphql("response carried no data".to_string()))
    }

    /// Run `submitQuestionnaire`
    ///
    /// # Returns
    /// The server's boolean verdict, `false` for a `null` result
    ///
    /// # Errors
    /// - `GatewayError::Transport` / `GatewayError::Http` on network failure
    /// - `GatewayError::Graphql` if the server reports errors
    pub async fn submit_questionnaire(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<bool, GatewayError> {
        let data: SubmitData = self
            .execute(SUBMIT_QUESTIONNAIRE, json!({ "response": payload }))
            .await?;
        Ok(data.submit_questionnaire.unwrap_or(false))
    }

    /// Run the `submissions` query
    ///
    /// # Errors
    /// Same as [`GraphqlClient::submit_questionnaire`]
    pub async fn list_submissions(&self) -> Result<Vec<Submission>, GatewayError> {
        let data: SubmissionsData = self.execute(LIST_SUBMISSIONS, json!({})).await?;
        Ok(data.submissions)
    }
}

#[async_trait]
impl SubmissionGateway for GraphqlClient {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), GatewayError> {
        debug!(endpoint = %self.endpoint, answers = payload.len(), "sending submission");

        match self.submit_questionnaire(payload).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                warn!(endpoint = %self.endpoint, "server did not store the submission");
                Err(GatewayError::Rejected)
            }
            Err(err) => {
                warn!(endpoint = %self.endpoint, error = %err, "submission failed");
                Err(err)
            }
        }
    }
}
