//! Wizard error types

use crate::state_machine::{TransitionError, WizardState};
use thiserror::Error;

/// Failure reported by the signer or the clipboard
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CollaboratorError {
    pub message: String,
}

impl CollaboratorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors that stop a wizard session.
///
/// Invalid field values are not errors: they re-ask the question.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Input ended in state {state} before the wizard finished")]
    InputExhausted { state: WizardState },

    #[error("Failed to read input: {0}")]
    Input(#[source] std::io::Error),

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("Failed to sign token: {0}")]
    Signer(#[source] CollaboratorError),

    #[error("Failed to copy token to clipboard: {0}")]
    Clipboard(#[source] CollaboratorError),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}
