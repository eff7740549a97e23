//! System clipboard sink

use crate::error::CollaboratorError;
use crate::runtime::ClipboardSink;
use copypasta_ext::{copypasta::ClipboardProvider, x11_fork::ClipboardContext};

/// Copies into the desktop clipboard.
///
/// A fresh context is opened for every copy, so a missing display only
/// matters once a token is actually issued.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), CollaboratorError> {
        let mut ctx = ClipboardContext::new()
            .map_err(|e| CollaboratorError::new(format!("Clipboard unavailable: {e}")))?;
        ctx.set_contents(text.to_string())
            .map_err(|e| CollaboratorError::new(e.to_string()))?;

        tracing::debug!(bytes = text.len(), "Copied to system clipboard");
        Ok(())
    }
}
