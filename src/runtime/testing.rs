//! Mock implementations for testing
//!
//! These mocks enable executor testing without a terminal or clipboard.

use super::traits::*;
use crate::error::CollaboratorError;
use crate::state_machine::{Payload, Secret};
use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

// ============================================================================
// Scripted Input
// ============================================================================

/// Input source that replays a fixed script, then reports exhaustion
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    /// Number of lines handed out so far
    pub reads: usize,
}

impl ScriptedInput {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            reads: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let line = self.lines.pop_front();
        if line.is_some() {
            self.reads += 1;
        }
        Ok(line)
    }
}

// ============================================================================
// Mock Signer
// ============================================================================

/// Signer returning a fixed token and recording every call
pub struct MockSigner {
    token: String,
    error: Option<CollaboratorError>,
    /// Record of all signing requests
    pub calls: Mutex<Vec<(Payload, Secret)>>,
}

impl MockSigner {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            error: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            token: String::new(),
            error: Some(CollaboratorError::new(message)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded_calls(&self) -> Vec<(Payload, Secret)> {
        self.calls.lock().unwrap().clone()
    }
}

impl TokenSigner for MockSigner {
    fn sign(&self, payload: &Payload, secret: &Secret) -> Result<String, CollaboratorError> {
        self.calls
            .lock()
            .unwrap()
            .push((payload.clone(), secret.clone()));
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(self.token.clone()),
        }
    }
}

// ============================================================================
// Mock Clipboard
// ============================================================================

/// Clipboard that keeps everything copied into it, or refuses every copy
#[derive(Debug, Default)]
pub struct MockClipboard {
    error: Option<CollaboratorError>,
    /// Every text successfully copied, oldest first
    pub copied: Vec<String>,
    /// Number of copy attempts, including failed ones
    pub attempts: usize,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            error: Some(CollaboratorError::new(message)),
            ..Self::default()
        }
    }
}

impl ClipboardSink for MockClipboard {
    fn copy(&mut self, text: &str) -> Result<(), CollaboratorError> {
        self.attempts += 1;
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        self.copied.push(text.to_string());
        Ok(())
    }
}
