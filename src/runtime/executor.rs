//! Wizard executor
//!
//! Feeds input into the pure transition function and carries out the
//! effects it returns.

use super::traits::{ClipboardSink, LineSource, TokenSigner};
use crate::error::WizardError;
use crate::state_machine::{transition, Effect, Event, Session, WizardState};
use std::io::Write;

/// Outcome of a single `advance` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub state: WizardState,
    pub output: Option<String>,
}

/// Generic wizard that can work with any input, signer and clipboard implementations
pub struct Wizard<I, S, C>
where
    I: LineSource,
    S: TokenSigner,
    C: ClipboardSink,
{
    session: Session,
    input: I,
    signer: S,
    clipboard: C,
}

impl<I, S, C> Wizard<I, S, C>
where
    I: LineSource,
    S: TokenSigner,
    C: ClipboardSink,
{
    pub fn new(session: Session, input: I, signer: S, clipboard: C) -> Self {
        Self {
            session,
            input,
            signer,
            clipboard,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Move the conversation forward by one state.
    ///
    /// Reads at most one line, and only in a reading state. The signer and
    /// clipboard are only reached through `Effect::IssueToken`. On error the
    /// session keeps its current state.
    pub fn advance(&mut self) -> Result<Step, WizardError> {
        let state = self.session.state;
        let event = if state.reads_input() {
            match self.input.read_line().map_err(WizardError::Input)? {
                Some(line) => Event::line(line),
                None => return Err(WizardError::InputExhausted { state }),
            }
        } else {
            Event::Proceed
        };

        let result = transition(&self.session, event)?;

        if state == WizardState::ReadingValue && result.new_state == WizardState::AskingForValue {
            tracing::debug!(
                field = self.session.current_key.as_deref().unwrap_or_default(),
                "Field value rejected by validator"
            );
        }

        for effect in result.effects {
            self.execute_effect(effect)?;
        }

        tracing::debug!(from = %state, to = %result.new_state, "Wizard transition");
        self.session.state = result.new_state;

        Ok(Step {
            state: result.new_state,
            output: result.output,
        })
    }

    /// Drive the conversation to `done`, writing every message to `out`
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<(), WizardError> {
        loop {
            let step = self.advance()?;

            if let Some(output) = &step.output {
                writeln!(out, "{output}").map_err(WizardError::Output)?;
                out.flush().map_err(WizardError::Output)?;
            }

            if step.state.is_terminal() {
                return Ok(());
            }
        }
    }

    fn execute_effect(&mut self, effect: Effect) -> Result<(), WizardError> {
        match effect {
            Effect::SetCurrentKey(key) => {
                self.session.current_key = Some(key);
            }

            Effect::AcceptField { key, value } => {
                tracing::debug!(field = %key, "Field accepted");
                self.session.payload.insert(key, value);
                self.session.current_key = None;
            }

            Effect::IssueToken => {
                let token = self
                    .signer
                    .sign(&self.session.payload, self.session.secret())
                    .map_err(WizardError::Signer)?;

                self.clipboard
                    .copy(&token)
                    .map_err(WizardError::Clipboard)?;

                tracing::info!(fields = self.session.payload.len(), "Token copied to clipboard");
            }
        }

        Ok(())
    }
}
