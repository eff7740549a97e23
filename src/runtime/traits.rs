//! Trait abstractions for the wizard's external collaborators
//!
//! These traits enable testing the executor with mock implementations.

use crate::error::CollaboratorError;
use crate::state_machine::{Payload, Secret};
use std::io::{self, BufRead};

/// Blocking source of user input, one line at a time
pub trait LineSource {
    /// Read the next line without its trailing newline.
    /// `Ok(None)` means the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Turns a payload into an opaque token
pub trait TokenSigner {
    fn sign(&self, payload: &Payload, secret: &Secret) -> Result<String, CollaboratorError>;
}

/// Destination for the issued token
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<(), CollaboratorError>;
}

// ============================================================================
// Reference implementations for borrowed collaborators
// ============================================================================

impl<T: LineSource + ?Sized> LineSource for &mut T {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}

impl<T: TokenSigner + ?Sized> TokenSigner for &T {
    fn sign(&self, payload: &Payload, secret: &Secret) -> Result<String, CollaboratorError> {
        (**self).sign(payload, secret)
    }
}

impl<T: ClipboardSink + ?Sized> ClipboardSink for &mut T {
    fn copy(&mut self, text: &str) -> Result<(), CollaboratorError> {
        (**self).copy(text)
    }
}

// ============================================================================
// Production Adapters
// ============================================================================

/// Adapter to use any buffered reader (stdin in production) as a `LineSource`
#[derive(Debug)]
pub struct BufReadLines<R> {
    reader: R,
}

impl<R: BufRead> BufReadLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for BufReadLines<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
        }
        if line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}
