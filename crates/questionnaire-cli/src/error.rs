//! Session errors

use questionnaire_wizard::WizardError;
use thiserror::Error;

/// Errors that end a terminal session
#[derive(Debug, Error)]
pub enum SessionError {
    /// Terminal read or write failed
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Wizard refused an operation the session relied on
    #[error(transparent)]
    Wizard(#[from] WizardError),
}
