//! Runtime for driving a wizard session
//!
//! Couples the pure state machine to the terminal, the signer and the clipboard.

mod executor;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use executor::Wizard;
pub use traits::*;
