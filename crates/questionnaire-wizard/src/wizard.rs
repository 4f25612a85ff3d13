//! Wizard state machine
//!
//! Walks a respondent through the catalog one question at a time:
//!
//! ```text
//! Loading ──load──▶ Asking(0) ──advance──▶ Asking(i) ──advance──▶ Reviewing
//!    │                  ▲  ◀──retreat──        ▲                      │
//!    ▼                  └──────────retreat─────┴──────────────────────┤
//! CatalogUnavailable                                               submit
//!                                                                     ▼
//!                     SubmitFailed ◀──gateway error── Submitting ──ok──▶ Submitted
//! ```
//!
//! Advancing validates only the current question; submitting re-validates
//! all of them. A failed submission can be retried; a finished one cannot
//! be sent twice.

use crate::answers::AnswerStore;
use crate::error::{GatewayError, WizardError};
use crate::gateway::{encode_answers, SubmissionGateway};
use crate::state::{validate_transition, Phase, WizardState};
use crate::validation::{validate, ValidationError};
use indexmap::IndexMap;
use questionnaire_model::{AnswerValue, Catalog, Question, QuestionId, SubmissionPayload};
use tracing::{debug, info, warn};

/// Result of [`Wizard::advance`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the question at this index
    Moved(usize),
    /// Last question passed, now reviewing
    Review,
    /// Current question failed validation; position unchanged
    Blocked(ValidationError),
}

/// Result of [`Wizard::begin_submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeginSubmit {
    /// All questions valid; send this payload, then call `complete_submit`
    Ready(SubmissionPayload),
    /// Some questions failed; wizard is back in review
    Invalid(Vec<ValidationError>),
}

/// Result of [`Wizard::submit_all`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Server stored the submission
    Submitted,
    /// Gateway failed; wizard is in `SubmitFailed`
    Failed(String),
    /// Validation failed; nothing was sent
    Invalid(Vec<ValidationError>),
}

/// One line of the review screen
#[derive(Debug, Clone, Copy)]
pub struct ReviewItem<'a> {
    /// Question
    pub question: &'a Question,
    /// Recorded answer, if any
    pub answer: Option<&'a AnswerValue>,
    /// Pending validation message, if any
    pub error: Option<&'a str>,
}

/// Questionnaire wizard
#[derive(Debug, Clone)]
pub struct Wizard {
    catalog: Option<Catalog>,
    answers: AnswerStore,
    errors: IndexMap<QuestionId, String>,
    state: WizardState,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    /// Create wizard waiting for its catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: None,
            answers: AnswerStore::new(),
            errors: IndexMap::new(),
            state: WizardState::Loading,
        }
    }

    /// Create wizard positioned on the first question
    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Some(catalog),
            answers: AnswerStore::new(),
            errors: IndexMap::new(),
            state: WizardState::Asking(0),
        }
    }

    // ---- loading -------------------------------------------------------

    /// Install the catalog and show the first question
    ///
    /// # Errors
    /// - `WizardError::IllegalTransition` if a catalog is already in use
    pub fn load(&mut self, catalog: Catalog) -> Result<(), WizardError> {
        self.transition(WizardState::Asking(0))?;
        info!(questions = catalog.len(), "catalog loaded");
        self.catalog = Some(catalog);
        Ok(())
    }

    /// Record that the catalog could not be obtained
    ///
    /// # Errors
    /// - `WizardError::IllegalTransition` unless still loading
    pub fn catalog_failed(&mut self, reason: impl Into<String>) -> Result<(), WizardError> {
        let reason = reason.into();
        warn!(reason = %reason, "catalog unavailable");
        self.transition(WizardState::CatalogUnavailable(reason))
    }

    // ---- queries -------------------------------------------------------

    /// Current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Answer for a question
    #[must_use]
    pub fn answer(&self, id: &str) -> Option<&AnswerValue> {
        self.answers.get(id)
    }

    /// Question being asked, if any
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            WizardState::Asking(i) => self.catalog.as_ref()?.get(i),
            _ => None,
        }
    }

    /// `(position, total)` with a 1-based position while asking
    #[must_use]
    pub fn progress(&self) -> Option<(usize, usize)> {
        match self.state {
            WizardState::Asking(i) => self.catalog.as_ref().map(|c| (i + 1, c.len())),
            _ => None,
        }
    }

    /// Whether the first question is showing
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.state == WizardState::Asking(0)
    }

    /// Whether the last question is showing
    #[must_use]
    pub fn is_last(&self) -> bool {
        matches!(self.progress(), Some((pos, total)) if pos == total)
    }

    /// Pending validation message for a question
    #[must_use]
    pub fn error(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(String::as_str)
    }

    /// Every question with its answer, in catalog order
    #[must_use]
    pub fn review(&self) -> Vec<ReviewItem<'_>> {
        self.catalog
            .iter()
            .flat_map(Catalog::questions)
            .map(|question| ReviewItem {
                question,
                answer: self.answers.get(question.id.as_str()),
                error: self.error(question.id.as_str()),
            })
            .collect()
    }

    // ---- mutations -----------------------------------------------------

    /// Store an answer and clear that question's error
    ///
    /// # Errors
    /// - `WizardError::CatalogNotLoaded` before the catalog is available
    /// - `WizardError::SubmissionInFlight` / `WizardError::AlreadySubmitted`
    ///   once submitting has begun
    /// - `WizardError::UnknownQuestion` for ids outside the catalog
    /// - `WizardError::ShapeMismatch` if the value does not fit the type
    pub fn record(&mut self, id: &str, value: AnswerValue) -> Result<(), WizardError> {
        self.ensure_editable()?;

        let question = self
            .catalog
            .as_ref()
            .and_then(|c| c.find(id))
            .ok_or_else(|| WizardError::UnknownQuestion(id.to_string()))?;

        if !value.fits(question.kind) {
            return Err(WizardError::ShapeMismatch {
                question_id: id.to_string(),
                kind: question.kind,
            });
        }

        let qid = question.id.clone();
        self.errors.shift_remove(id);
        self.answers.upsert(qid, value);
        Ok(())
    }

    /// Validate the current question and move forward
    ///
    /// # Errors
    /// - `WizardError::NotAllowed` unless a question is showing
    pub fn advance(&mut self) -> Result<Advance, WizardError> {
        let WizardState::Asking(index) = self.state else {
            return Err(self.not_allowed("advance"));
        };

        let catalog = self.catalog.as_ref().ok_or(WizardError::CatalogNotLoaded)?;
        let question = catalog.get(index).ok_or(WizardError::CatalogNotLoaded)?;
        let total = catalog.len();

        if let Err(err) = validate(question, self.answers.get(question.id.as_str())) {
            debug!(question = %err.question_id, "advance blocked");
            self.errors.insert(err.question_id.clone(), err.message.clone());
            return Ok(Advance::Blocked(err));
        }

        let next = index + 1;
        if next < total {
            self.transition(WizardState::Asking(next))?;
            Ok(Advance::Moved(next))
        } else {
            self.transition(WizardState::Reviewing)?;
            Ok(Advance::Review)
        }
    }

    /// Move back one question
    ///
    /// No-op on the first question. From review, or after a failed
    /// submission, returns to the last question.
    ///
    /// # Errors
    /// - `WizardError::SubmissionInFlight` / `WizardError::AlreadySubmitted`
    ///   once submitting has begun
    /// - `WizardError::NotAllowed` without a catalog
    pub fn retreat(&mut self) -> Result<&WizardState, WizardError> {
        match self.state {
            WizardState::Asking(0) => {}
            WizardState::Asking(i) => self.transition(WizardState::Asking(i - 1))?,
            WizardState::Reviewing | WizardState::SubmitFailed(_) => {
                let last = self
                    .catalog
                    .as_ref()
                    .map(|c| c.len() - 1)
                    .ok_or(WizardError::CatalogNotLoaded)?;
                self.transition(WizardState::Asking(last))?;
            }
            WizardState::Submitting => return Err(WizardError::SubmissionInFlight),
            WizardState::Submitted => return Err(WizardError::AlreadySubmitted),
            WizardState::Loading | WizardState::CatalogUnavailable(_) => {
                return Err(self.not_allowed("retreat"));
            }
        }
        Ok(&self.state)
    }

    /// Re-validate every question, refreshing the error map
    pub fn validate_all(&mut self) -> Vec<ValidationError> {
        let Some(catalog) = self.catalog.as_ref() else {
            return Vec::new();
        };

        let failures: Vec<_> = catalog
            .questions()
            .iter()
            .filter_map(|q| validate(q, self.answers.get(q.id.as_str())).err())
            .collect();

        for err in &failures {
            self.errors.insert(err.question_id.clone(), err.message.clone());
        }
        failures
    }

    /// First half of a submission: validate everything and enter `Submitting`
    ///
    /// # Errors
    /// - `WizardError::SubmissionInFlight` if already submitting
    /// - `WizardError::AlreadySubmitted` after success
    /// - `WizardError::NotAllowed` outside review
    /// - `WizardError::Encode` if answers cannot be encoded
    pub fn begin_submit(&mut self) -> Result<BeginSubmit, WizardError> {
        match self.state {
            WizardState::Reviewing | WizardState::SubmitFailed(_) => {}
            WizardState::Submitting => return Err(WizardError::SubmissionInFlight),
            WizardState::Submitted => return Err(WizardError::AlreadySubmitted),
            _ => return Err(self.not_allowed("submit")),
        }

        let failures = self.validate_all();
        if !failures.is_empty() {
            debug!(count = failures.len(), "submit blocked by validation");
            if self.state.phase() != Phase::Reviewing {
                self.transition(WizardState::Reviewing)?;
            }
            return Ok(BeginSubmit::Invalid(failures));
        }

        let payload = encode_answers(&self.answers)?;
        self.transition(WizardState::Submitting)?;
        Ok(BeginSubmit::Ready(payload))
    }

    /// Second half of a submission: apply the gateway's outcome
    ///
    /// # Errors
    /// - `WizardError::NotAllowed` unless submitting
    pub fn complete_submit(
        &mut self,
        outcome: Result<(), GatewayError>,
    ) -> Result<&WizardState, WizardError> {
        if self.state != WizardState::Submitting {
            return Err(self.not_allowed("complete submission"));
        }

        match outcome {
            Ok(()) => {
                info!(answers = self.answers.len(), "questionnaire submitted");
                self.transition(WizardState::Submitted)?;
            }
            Err(err) => {
                warn!(
                    error = %err,
                    retryable = err.is_retryable(),
                    "questionnaire submission failed"
                );
                self.transition(WizardState::SubmitFailed(err.to_string()))?;
            }
        }
        Ok(&self.state)
    }

    /// Validate, send through `gateway` and settle on the real outcome
    ///
    /// # Errors
    /// Same as [`Wizard::begin_submit`]
    pub async fn submit_all(
        &mut self,
        gateway: &dyn SubmissionGateway,
    ) -> Result<SubmitOutcome, WizardError> {
        let payload = match self.begin_submit()? {
            BeginSubmit::Ready(payload) => payload,
            BeginSubmit::Invalid(failures) => return Ok(SubmitOutcome::Invalid(failures)),
        };

        let result = gateway.submit(&payload).await;
        let outcome = match &result {
            Ok(()) => SubmitOutcome::Submitted,
            Err(err) => SubmitOutcome::Failed(err.to_string()),
        };
        self.complete_submit(result)?;
        Ok(outcome)
    }

    // ---- internals -----------------------------------------------------

    fn transition(&mut self, to: WizardState) -> Result<(), WizardError> {
        validate_transition(self.state.phase(), to.phase())?;
        debug!(from = ?self.state, to = ?to, "wizard transition");
        self.state = to;
        Ok(())
    }

    fn ensure_editable(&self) -> Result<(), WizardError> {
        match self.state {
            WizardState::Asking(_) | WizardState::Reviewing | WizardState::SubmitFailed(_) => {
                Ok(())
            }
            WizardState::Submitting => Err(WizardError::SubmissionInFlight),
            WizardState::Submitted => Err(WizardError::AlreadySubmitted),
            WizardState::Loading | WizardState::CatalogUnavailable(_) => {
                Err(WizardError::CatalogNotLoaded)
            }
        }
    }

    fn not_allowed(&self, action: &'static str) -> WizardError {
        WizardError::NotAllowed {
            action,
            phase: self.state.phase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use questionnaire_model::{AnswerPair, QuestionType, REQUIRED_MESSAGE};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Question::new("name", "What is your name?", QuestionType::Text).required(),
            Question::new("age", "How old are you?", QuestionType::Number).required(),
            Question::new("pets", "Which pets?", QuestionType::Checkbox)
                .required()
                .with_options(["cat", "dog", "fish"]),
            Question::new("bio", "Tell us more", QuestionType::LongText),
        ])
        .unwrap()
    }

    fn answered_wizard() -> Wizard {
        let mut wizard = Wizard::with_catalog(catalog());
        wizard.record("name", AnswerValue::scalar("Ada")).unwrap();
        wizard.advance().unwrap();
        wizard.record("age", AnswerValue::scalar("36")).unwrap();
        wizard.advance().unwrap();
        wizard.record("pets", AnswerValue::multi(["cat"])).unwrap();
        wizard.advance().unwrap();
        assert_eq!(wizard.advance().unwrap(), Advance::Review);
        wizard
    }

    #[derive(Default)]
    struct RecordingGateway {
        sent: Mutex<Vec<SubmissionPayload>>,
        fail: bool,
    }

    #[async_trait]
    impl SubmissionGateway for RecordingGateway {
        async fn submit(&self, payload: &SubmissionPayload) -> Result<(), GatewayError> {
            self.sent.lock().push(payload.clone());
            if self.fail {
                Err(GatewayError::Rejected)
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn starts_loading_until_catalog_arrives() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.state(), &WizardState::Loading);
        assert!(wizard.current_question().is_none());
        assert!(matches!(
            wizard.record("name", AnswerValue::scalar("x")),
            Err(WizardError::CatalogNotLoaded)
        ));

        wizard.load(catalog()).unwrap();
        assert_eq!(wizard.state(), &WizardState::Asking(0));
        assert_eq!(wizard.progress(), Some((1, 4)));
        assert!(wizard.is_first());
    }

    #[test]
    fn catalog_failure_is_a_distinct_state() {
        let mut wizard = Wizard::new();
        wizard.catalog_failed("connection refused").unwrap();
        assert_eq!(
            wizard.state(),
            &WizardState::CatalogUnavailable("connection refused".into())
        );
        assert!(matches!(wizard.advance(), Err(WizardError::NotAllowed { .. })));

        wizard.load(catalog()).unwrap();
        assert_eq!(wizard.state(), &WizardState::Asking(0));
    }

    #[test]
    fn loading_twice_is_illegal() {
        let mut wizard = Wizard::with_catalog(catalog());
        assert!(matches!(
            wizard.load(catalog()),
            Err(WizardError::IllegalTransition { .. })
        ));
    }

    #[test]
    fn required_question_blocks_advance() {
        let mut wizard = Wizard::with_catalog(catalog());

        let result = wizard.advance().unwrap();

        assert_eq!(result, Advance::Blocked(ValidationError::required("name".into())));
        assert_eq!(wizard.state(), &WizardState::Asking(0));
        assert_eq!(wizard.error("name"), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn record_clears_pending_error() {
        let mut wizard = Wizard::with_catalog(catalog());
        wizard.advance().unwrap();

        wizard.record("name", AnswerValue::scalar("Ada")).unwrap();

        assert_eq!(wizard.error("name"), None);
        assert_eq!(wizard.advance().unwrap(), Advance::Moved(1));
    }

    #[test]
    fn number_zero_is_an_answer() {
        let mut wizard = Wizard::with_catalog(catalog());
        wizard.record("name", AnswerValue::scalar("Ada")).unwrap();
        wizard.advance().unwrap();

        wizard.record("age", AnswerValue::scalar("0")).unwrap();

        assert_eq!(wizard.advance().unwrap(), Advance::Moved(2));
        assert_eq!(wizard.error("age"), None);
    }

    #[test]
    fn empty_checkbox_selection_is_unanswered() {
        let mut wizard = answered_wizard();
        wizard.retreat().unwrap();
        wizard.retreat().unwrap();
        assert_eq!(wizard.current_question().unwrap().id.as_str(), "pets");

        wizard.record("pets", AnswerValue::MultiSelect(vec![])).unwrap();
        assert!(matches!(wizard.advance().unwrap(), Advance::Blocked(_)));
        assert_eq!(wizard.error("pets"), Some(REQUIRED_MESSAGE));

        wizard.record("pets", AnswerValue::multi(["dog"])).unwrap();
        assert_eq!(wizard.error("pets"), None);
        assert_eq!(wizard.advance().unwrap(), Advance::Moved(3));
    }

    #[test]
    fn retreat_then_advance_reraises_same_error() {
        let mut wizard = Wizard::with_catalog(catalog());
        wizard.record("name", AnswerValue::scalar("Ada")).unwrap();
        wizard.advance().unwrap();
        let first = wizard.advance().unwrap();

        wizard.retreat().unwrap();
        assert_eq!(wizard.state(), &WizardState::Asking(0));
        wizard.advance().unwrap();
        let second = wizard.advance().unwrap();

        assert_eq!(wizard.state(), &WizardState::Asking(1));
        assert_eq!(first, second);
        assert!(matches!(second, Advance::Blocked(_)));
    }

    #[test]
    fn retreat_on_first_question_is_noop() {
        let mut wizard = Wizard::with_catalog(catalog());
        assert_eq!(wizard.retreat().unwrap(), &WizardState::Asking(0));
    }

    #[test]
    fn retreat_from_review_returns_to_last_question() {
        let mut wizard = answered_wizard();
        assert_eq!(wizard.retreat().unwrap(), &WizardState::Asking(3));
        assert!(wizard.is_last());
    }

    #[test]
    fn record_rejects_unknown_ids_and_wrong_shapes() {
        let mut wizard = Wizard::with_catalog(catalog());
        assert!(matches!(
            wizard.record("missing", AnswerValue::scalar("x")),
            Err(WizardError::UnknownQuestion(_))
        ));
        assert!(matches!(
            wizard.record("pets", AnswerValue::scalar("cat")),
            Err(WizardError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            wizard.record("name", AnswerValue::multi(["Ada"])),
            Err(WizardError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn submit_revalidates_every_question() {
        let mut wizard = answered_wizard();
        wizard.record("name", AnswerValue::scalar("")).unwrap();
        wizard.record("pets", AnswerValue::MultiSelect(vec![])).unwrap();

        let result = wizard.begin_submit().unwrap();

        let BeginSubmit::Invalid(failures) = result else {
            panic!("expected validation failure");
        };
        let ids: Vec<_> = failures.iter().map(|e| e.question_id.as_str()).collect();
        assert_eq!(ids, ["name", "pets"]);
        assert_eq!(wizard.state(), &WizardState::Reviewing);
        assert_eq!(wizard.error("name"), Some(REQUIRED_MESSAGE));
        assert_eq!(wizard.error("pets"), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn submit_outside_review_is_not_allowed() {
        let mut wizard = Wizard::with_catalog(catalog());
        assert!(matches!(
            wizard.begin_submit(),
            Err(WizardError::NotAllowed { action: "submit", .. })
        ));
    }

    #[test]
    fn in_flight_submission_blocks_everything() {
        let mut wizard = answered_wizard();
        assert!(matches!(wizard.begin_submit().unwrap(), BeginSubmit::Ready(_)));
        assert_eq!(wizard.state(), &WizardState::Submitting);

        assert!(matches!(wizard.begin_submit(), Err(WizardError::SubmissionInFlight)));
        assert!(matches!(wizard.retreat(), Err(WizardError::SubmissionInFlight)));
        assert!(matches!(
            wizard.record("bio", AnswerValue::scalar("x")),
            Err(WizardError::SubmissionInFlight)
        ));
    }

    #[tokio::test]
    async fn successful_submit_is_terminal() {
        let mut wizard = answered_wizard();
        let gateway = RecordingGateway::default();

        let outcome = wizard.submit_all(&gateway).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Submitted);
        assert_eq!(wizard.state(), &WizardState::Submitted);
        assert!(matches!(
            wizard.submit_all(&gateway).await,
            Err(WizardError::AlreadySubmitted)
        ));
        assert_eq!(gateway.sent.lock().len(), 1);
    }

    #[tokio::test]
    async fn payload_follows_answer_order() {
        let mut wizard = answered_wizard();
        let gateway = RecordingGateway::default();

        wizard.submit_all(&gateway).await.unwrap();

        let sent = gateway.sent.lock();
        assert_eq!(
            sent[0].answers,
            vec![
                AnswerPair::new("name", Some("\"Ada\"".into())),
                AnswerPair::new("age", Some("\"36\"".into())),
                AnswerPair::new("pets", Some("[\"cat\"]".into())),
            ]
        );
    }

    #[tokio::test]
    async fn failed_submit_can_be_retried() {
        let mut wizard = answered_wizard();
        let failing = RecordingGateway {
            fail: true,
            ..RecordingGateway::default()
        };

        let outcome = wizard.submit_all(&failing).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert!(matches!(wizard.state(), WizardState::SubmitFailed(_)));

        let working = RecordingGateway::default();
        assert_eq!(wizard.submit_all(&working).await.unwrap(), SubmitOutcome::Submitted);
        assert_eq!(wizard.state(), &WizardState::Submitted);
    }

    fn failing_gateway() -> RecordingGateway {
        RecordingGateway {
            fail: true,
            ..RecordingGateway::default()
        }
    }

    #[tokio::test]
    async fn retreat_after_failure_returns_to_last_question() {
        let mut wizard = answered_wizard();
        wizard.submit_all(&failing_gateway()).await.unwrap();
        assert!(matches!(wizard.state(), WizardState::SubmitFailed(_)));

        assert_eq!(wizard.retreat().unwrap(), &WizardState::Asking(3));
        assert_eq!(wizard.advance().unwrap(), Advance::Review);
    }

    #[tokio::test]
    async fn resubmit_with_cleared_answer_goes_back_to_review() {
        let mut wizard = answered_wizard();
        wizard.submit_all(&failing_gateway()).await.unwrap();
        wizard.record("name", AnswerValue::scalar("")).unwrap();

        let working = RecordingGateway::default();
        let outcome = wizard.submit_all(&working).await.unwrap();

        let SubmitOutcome::Invalid(failures) = &outcome else {
            panic!("expected validation failure, got {outcome:?}");
        };
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].question_id.as_str(), "name");
        assert_eq!(wizard.state(), &WizardState::Reviewing);
        assert_eq!(wizard.error("name"), Some(REQUIRED_MESSAGE));
        assert!(working.sent.lock().is_empty());

        wizard.record("name", AnswerValue::scalar("Ada")).unwrap();
        assert_eq!(wizard.submit_all(&working).await.unwrap(), SubmitOutcome::Submitted);
        assert_eq!(working.sent.lock().len(), 1);
    }

    #[tokio::test]
    async fn nothing_changes_after_submitted() {
        let mut wizard = answered_wizard();
        wizard.submit_all(&RecordingGateway::default()).await.unwrap();
        assert!(wizard.state().is_terminal());

        assert!(matches!(
            wizard.record("bio", AnswerValue::scalar("late")),
            Err(WizardError::AlreadySubmitted)
        ));
        assert!(matches!(wizard.retreat(), Err(WizardError::AlreadySubmitted)));
        assert!(matches!(wizard.advance(), Err(WizardError::NotAllowed { .. })));
        assert_eq!(wizard.answer("bio"), None);
        assert_eq!(wizard.state(), &WizardState::Submitted);
    }

    #[test]
    fn complete_without_begin_is_not_allowed() {
        let mut wizard = answered_wizard();
        assert!(matches!(
            wizard.complete_submit(Ok(())),
            Err(WizardError::NotAllowed { .. })
        ));
    }

    #[test]
    fn review_lists_every_question() {
        let wizard = answered_wizard();
        let review = wizard.review();

        assert_eq!(review.len(), 4);
        assert_eq!(review[0].answer, Some(&AnswerValue::scalar("Ada")));
        assert!(review[3].answer.is_none());
        assert!(review.iter().all(|item| item.error.is_none()));
    }
}
