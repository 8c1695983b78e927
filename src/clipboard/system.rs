use arboard::Clipboard;

use super::backend::{ClipboardError, ClipboardProvider, ClipboardResult};

/// The desktop clipboard via arboard
///
/// A fresh handle is opened per operation so the provider stays `Send`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl ClipboardProvider for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;

        clipboard.get_text().map_err(|_| ClipboardError::ReadError)
    }

    fn write_text(&mut self, text: &str) -> ClipboardResult {
        let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;

        clipboard
            .set_text(text)
            .map_err(|_| ClipboardError::WriteError)
    }
}
