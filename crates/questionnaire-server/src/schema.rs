//! GraphQL schema
//!
//! ```graphql
//! type Query {
//!   submissions: [Submission!]!
//!   questions: [Question!]!
//! }
//! type Mutation {
//!   submitQuestionnaire(response: QuestionnaireResponseInput!): Boolean
//! }
//! ```
//!
//! `submitQuestionnaire` reports persistence failures as `false`; it never
//! turns them into GraphQL errors.

use async_graphql::{Context, EmptySubscription, InputObject, Object, Schema, SimpleObject, ID};
use questionnaire_model::{AnswerPair, Catalog, Question, Submission};
use questionnaire_store::SharedStore;
use tracing::{error, info};

/// Full schema type
pub type QuestionnaireSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build schema over a store and an optional catalog
#[must_use]
pub fn build_schema(store: SharedStore, catalog: Option<Catalog>) -> QuestionnaireSchema {
    let builder = Schema::build(QueryRoot, MutationRoot, EmptySubscription).data(store);
    match catalog {
        Some(catalog) => builder.data(catalog).finish(),
        None => builder.finish(),
    }
}

/// One stored answer
#[derive(Debug, SimpleObject)]
#[graphql(name = "Answer")]
pub struct AnswerObject {
    question_id: ID,
    value: Option<String>,
}

impl From<AnswerPair> for AnswerObject {
    fn from(pair: AnswerPair) -> Self {
        Self {
            question_id: ID(pair.question_id),
            value: pair.value,
        }
    }
}

/// One stored submission
#[derive(Debug, SimpleObject)]
#[graphql(name = "Submission")]
pub struct SubmissionObject {
    id: ID,
    created_at: String,
    answers: Vec<AnswerObject>,
}

impl From<Submission> for SubmissionObject {
    fn from(submission: Submission) -> Self {
        Self {
            id: ID(submission.id.to_string()),
            created_at: submission.created_at_iso(),
            answers: submission.answers.into_iter().map(AnswerObject::from).collect(),
        }
    }
}

/// One catalog question
#[derive(Debug, SimpleObject)]
#[graphql(name = "Question")]
pub struct QuestionObject {
    id: ID,
    text: String,
    #[graphql(name = "type")]
    kind: String,
    required: bool,
    options: Option<Vec<Option<String>>>,
}

impl From<&Question> for QuestionObject {
    fn from(question: &Question) -> Self {
        Self {
            id: ID(question.id.to_string()),
            text: question.text.clone(),
            kind: question.kind.as_str().to_string(),
            required: question.required,
            options: question
                .options
                .as_ref()
                .map(|options| options.iter().cloned().map(Some).collect()),
        }
    }
}

/// One submitted answer
#[derive(Debug, InputObject)]
pub struct AnswerInput {
    /// Question identity
    pub question_id: ID,
    /// JSON-encoded answer value
    pub value: Option<String>,
}

/// Full answer set
#[derive(Debug, InputObject)]
pub struct QuestionnaireResponseInput {
    /// Answers in client order
    pub answers: Vec<AnswerInput>,
}

impl QuestionnaireResponseInput {
    fn into_pairs(self) -> Vec<AnswerPair> {
        self.answers
            .into_iter()
            .map(|a| AnswerPair::new(a.question_id.0, a.value))
            .collect()
    }
}

/// Query root
#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All stored submissions
    async fn submissions(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<SubmissionObject>> {
        let store = ctx.data::<SharedStore>()?;
        Ok(store
            .list()
            .await
            .into_iter()
            .map(SubmissionObject::from)
            .collect())
    }

    /// Questions of the catalog this server was started with
    async fn questions(&self, ctx: &Context<'_>) -> Vec<QuestionObject> {
        ctx.data_opt::<Catalog>()
            .map(|catalog| catalog.questions().iter().map(QuestionObject::from).collect())
            .unwrap_or_default()
    }
}

/// Mutation root
#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Store a response; `true` once it is on disk
    async fn submit_questionnaire(
        &self,
        ctx: &Context<'_>,
        response: QuestionnaireResponseInput,
    ) -> Option<bool> {
        let store = match ctx.data::<SharedStore>() {
            Ok(store) => store,
            Err(err) => {
                error!(error = ?err, "submission store missing from schema");
                return Some(false);
            }
        };

        match store.append(response.into_pairs()).await {
            Ok(id) => {
                info!(id = %id, "questionnaire submitted");
                Some(true)
            }
            Err(err) => {
                error!(error = %err, "error submitting questionnaire");
                Some(false)
            }
        }
    }
}
