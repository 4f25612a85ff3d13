//! Interactive session driving a [`Wizard`] over line-based I/O
//!
//! Input is read asynchronously so the same loop serves stdin and in-memory
//! buffers. Output goes to any [`Write`].

use crate::error::SessionError;
use crate::input::{parse_answer, Command, BACK, QUIT, SUBMIT};
use crate::render::{self, THANK_YOU};
use questionnaire_wizard::{SubmissionGateway, SubmitOutcome, Wizard, WizardError, WizardState};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// Server stored the answers
    Submitted,
    /// User left, or input ran out, before a successful submit
    Quit,
    /// Catalog never became available
    CatalogUnavailable(String),
}

/// Terminal session
#[derive(Debug)]
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    /// Create session over `input` and `output`
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the wizard is submitted, the user quits, or input ends.
    ///
    /// # Errors
    /// - `SessionError::Io` on terminal failure
    /// - `SessionError::Wizard` if the wizard has no catalog decision yet
    pub async fn run(
        &mut self,
        wizard: &mut Wizard,
        gateway: &dyn SubmissionGateway,
    ) -> Result<SessionEnd, SessionError> {
        loop {
            if wizard.state().is_terminal() {
                writeln!(self.output, "{THANK_YOU}")?;
                debug!("session finished after submit");
                return Ok(SessionEnd::Submitted);
            }

            let step = match wizard.state().clone() {
                WizardState::Asking(_) => self.ask(wizard).await?,
                WizardState::Reviewing | WizardState::SubmitFailed(_) => {
                    self.review(wizard, gateway).await?
                }
                WizardState::CatalogUnavailable(reason) => {
                    writeln!(self.output, "The questionnaire is unavailable: {reason}")?;
                    Some(SessionEnd::CatalogUnavailable(reason))
                }
                WizardState::Loading => return Err(WizardError::CatalogNotLoaded.into()),
                WizardState::Submitting => return Err(WizardError::SubmissionInFlight.into()),
                WizardState::Submitted => return Err(WizardError::AlreadySubmitted.into()),
            };
            if let Some(end) = step {
                debug!(end = ?end, "session finished");
                return Ok(end);
            }
        }
    }

    async fn ask(&mut self, wizard: &mut Wizard) -> Result<Option<SessionEnd>, SessionError> {
        let question = wizard
            .current_question()
            .cloned()
            .ok_or(WizardError::CatalogNotLoaded)?;
        render::question(&mut self.output, wizard, &question)?;

        let Some(line) = self.read_line().await? else {
            return Ok(Some(SessionEnd::Quit));
        };
        match parse_answer(&question, &line) {
            Ok(Command::Quit) => return Ok(Some(SessionEnd::Quit)),
            Ok(Command::Back) => {
                wizard.retreat()?;
            }
            Ok(Command::Keep) => {
                wizard.advance()?;
            }
            Ok(Command::Answer(value)) => {
                wizard.record(question.id.as_str(), value)?;
                wizard.advance()?;
            }
            Err(err) => writeln!(self.output, "! {err}")?,
        }
        Ok(None)
    }

    async fn review(
        &mut self,
        wizard: &mut Wizard,
        gateway: &dyn SubmissionGateway,
    ) -> Result<Option<SessionEnd>, SessionError> {
        let failure = match wizard.state() {
            WizardState::SubmitFailed(reason) => Some(reason.clone()),
            _ => None,
        };
        render::review(&mut self.output, &wizard.review(), failure.as_deref())?;

        let Some(line) = self.read_line().await? else {
            return Ok(Some(SessionEnd::Quit));
        };
        match line.trim() {
            SUBMIT => {
                writeln!(self.output, "Submitting...")?;
                if let SubmitOutcome::Invalid(failures) = wizard.submit_all(gateway).await? {
                    writeln!(self.output, "! {} question(s) need an answer", failures.len())?;
                }
            }
            BACK => {
                wizard.retreat()?;
            }
            QUIT => return Ok(Some(SessionEnd::Quit)),
            other => writeln!(self.output, "! unknown command '{other}'")?,
        }
        Ok(None)
    }

    async fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
