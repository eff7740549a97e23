//! jwizard - interactive JWT builder
//!
//! Prompts for payload fields on the terminal, signs them as an HS256 JSON
//! Web Token and copies the token to the clipboard.

mod clipboard;
mod config;
mod error;
mod prompts;
mod runtime;
mod state_machine;
mod token;
mod validators;

use clipboard::SystemClipboard;
use config::WizardConfig;
use runtime::{BufReadLines, Wizard};
use state_machine::Session;
use std::io;
use std::process::ExitCode;
use token::Hs256Signer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize logging; stdout is reserved for the conversation
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jwizard=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(io::stderr),
        )
        .init();

    // Configuration
    let config = WizardConfig::from_env(std::env::args_os().skip(1));
    let session = Session::new(config.required_fields.iter().cloned(), config.resolve_secret());
    tracing::debug!(required_fields = ?session.required_fields(), "Starting wizard");

    let input = BufReadLines::new(io::stdin().lock());
    let mut wizard = Wizard::new(session, input, Hs256Signer, SystemClipboard);

    match wizard.run(&mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, state = %wizard.session().state, "Wizard stopped");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
