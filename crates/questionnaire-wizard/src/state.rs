//! Wizard states and their transition table

use crate::error::WizardError;

/// Where the wizard currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardState {
    /// Catalog not yet available
    Loading,
    /// Catalog could not be fetched or was invalid
    CatalogUnavailable(String),
    /// Showing the question at this index
    Asking(usize),
    /// All questions passed, waiting for confirmation
    Reviewing,
    /// Submission sent, waiting for the server
    Submitting,
    /// Server stored the submission
    Submitted,
    /// Server call failed; may be retried
    SubmitFailed(String),
}

impl WizardState {
    /// Data-free tag used by the transition table
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Self::Loading => Phase::Loading,
            Self::CatalogUnavailable(_) => Phase::CatalogUnavailable,
            Self::Asking(_) => Phase::Asking,
            Self::Reviewing => Phase::Reviewing,
            Self::Submitting => Phase::Submitting,
            Self::Submitted => Phase::Submitted,
            Self::SubmitFailed(_) => Phase::SubmitFailed,
        }
    }

    /// Whether no further transition is possible
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Submitted)
    }
}

/// State tag without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// See [`WizardState::Loading`]
    Loading,
    /// See [`WizardState::CatalogUnavailable`]
    CatalogUnavailable,
    /// See [`WizardState::Asking`]
    Asking,
    /// See [`WizardState::Reviewing`]
    Reviewing,
    /// See [`WizardState::Submitting`]
    Submitting,
    /// See [`WizardState::Submitted`]
    Submitted,
    /// See [`WizardState::SubmitFailed`]
    SubmitFailed,
}

/// Validates a phase transition.
pub fn validate_transition(from: Phase, to: Phase) -> Result<(), WizardError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(WizardError::IllegalTransition { from, to })
    }
}

/// Phases reachable in one step from `from`.
#[must_use]
pub fn allowed_transitions(from: Phase) -> Vec<Phase> {
    use Phase::*;
    match from {
        Loading => vec![Asking, CatalogUnavailable],
        CatalogUnavailable => vec![Asking],
        Asking => vec![Asking, Reviewing],
        Reviewing => vec![Asking, Submitting],
        Submitting => vec![Submitted, SubmitFailed],
        SubmitFailed => vec![Asking, Reviewing, Submitting],
        Submitted => vec![],
    }
}
