//! Core wizard state machine
//!
//! Pure transitions: a state plus an event yields the next state, the text
//! to print and the effects for the executor to run.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::{Payload, Secret, Session, WizardState};
pub use transition::{transition, TransitionError};
