//! Pure state transition function
//!
//! Given the session and one event, decide the next state, the text to print
//! and the effects to run. No I/O happens here: reading input and calling the
//! signer and clipboard belong to the executor.

use super::{Effect, Event, Session, WizardState};
use crate::prompts;
use thiserror::Error;

/// Result of a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    pub new_state: WizardState,
    pub output: Option<String>,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: WizardState) -> Self {
        Self {
            new_state: state,
            output: None,
            effects: vec![],
        }
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Errors that can occur during transition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Session is already done")]
    SessionFinished,
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Pure transition function
pub fn transition(session: &Session, event: Event) -> Result<TransitionResult, TransitionError> {
    let current_key = session.current_key.as_deref().unwrap_or_default();

    match (session.state, event) {
        (WizardState::Done, _) => Err(TransitionError::SessionFinished),

        // ============================================================
        // Collecting a field
        // ============================================================
        (WizardState::Start, Event::Proceed) => {
            Ok(TransitionResult::new(WizardState::AskingForKey).with_output(prompts::STARTING))
        }

        (WizardState::AskingForKey, Event::Proceed) => Ok(TransitionResult::new(
            WizardState::ReadingKey,
        )
        .with_output(prompts::asking_for_key(session.payload.len() + 1))),

        (WizardState::ReadingKey, Event::Line(key)) => {
            Ok(TransitionResult::new(WizardState::AskingForValue)
                .with_effect(Effect::SetCurrentKey(key)))
        }

        (WizardState::AskingForValue, Event::Proceed) => {
            Ok(TransitionResult::new(WizardState::ReadingValue)
                .with_output(prompts::asking_for_value(current_key)))
        }

        // Rejected values go back to the question, not straight to reading
        (WizardState::ReadingValue, Event::Line(value)) => {
            if session.validators().validate(current_key, &value) {
                Ok(TransitionResult::new(WizardState::Validating)
                    .with_effect(Effect::accept_field(current_key, value)))
            } else {
                Ok(TransitionResult::new(WizardState::AskingForValue)
                    .with_output(prompts::invalid_value(current_key)))
            }
        }

        (WizardState::Validating, Event::Proceed) => {
            if session.has_required_fields() {
                Ok(TransitionResult::new(WizardState::AskingForMoreData))
            } else {
                Ok(TransitionResult::new(WizardState::AskingForKey))
            }
        }

        // ============================================================
        // Finishing a round
        // ============================================================
        (WizardState::AskingForMoreData, Event::Proceed) => {
            Ok(TransitionResult::new(WizardState::ReadingMoreData)
                .with_output(prompts::ASKING_FOR_MORE_DATA))
        }

        (WizardState::ReadingMoreData, Event::Line(answer)) => {
            if prompts::is_yes(&answer) {
                Ok(TransitionResult::new(WizardState::AskingForKey))
            } else {
                Ok(TransitionResult::new(WizardState::AskingAnother)
                    .with_effect(Effect::IssueToken)
                    .with_output(prompts::TOKEN_COPIED))
            }
        }

        (WizardState::AskingAnother, Event::Proceed) => {
            Ok(TransitionResult::new(WizardState::ReadingAnother)
                .with_output(prompts::ASKING_ANOTHER))
        }

        (WizardState::ReadingAnother, Event::Line(answer)) => {
            if prompts::is_yes(&answer) {
                Ok(TransitionResult::new(WizardState::Start))
            } else {
                Ok(TransitionResult::new(WizardState::Done))
            }
        }

        // ============================================================
        // Invalid Transitions
        // ============================================================
        (state, event) => Err(TransitionError::InvalidTransition(format!(
            "No transition from {state} with event {event:?}"
        ))),
    }
}
