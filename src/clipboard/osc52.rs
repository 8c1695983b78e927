//! OSC 52 clipboard backend
//!
//! Provides clipboard access via terminal escape sequences,
//! useful for remote sessions (SSH, tmux). Reading is not supported.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardProvider, ClipboardResult};

/// Writes OSC 52 sequences to a terminal stream
pub struct Osc52Clipboard<W: Write + Send> {
    out: W,
}

impl Osc52Clipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write + Send> ClipboardProvider for Osc52Clipboard<W> {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        Err(ClipboardError::ReadUnsupported)
    }

    fn write_text(&mut self, text: &str) -> ClipboardResult {
        let sequence = encode_osc52(text);

        self.out
            .write_all(sequence.as_bytes())
            .map_err(|_| ClipboardError::WriteError)?;

        self.out.flush().map_err(|_| ClipboardError::WriteError)
    }
}

/// Encode text for OSC 52
///
/// Format: \x1b]52;c;{base64}\x07
///
/// The sequence consists of:
/// - `\x1b]52;` - OSC 52 introducer
/// - `c;` - clipboard selection (c = clipboard, p = primary)
/// - `{base64}` - base64-encoded content
/// - `\x07` - string terminator (BEL)
pub fn encode_osc52(text: &str) -> String {
    let encoded = STANDARD.encode(text);
    format!("\x1b]52;c;{}\x07", encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_osc52_simple() {
        // "hello" in base64 is "aGVsbG8="
        assert_eq!(encode_osc52("hello"), "\x1b]52;c;aGVsbG8=\x07");
    }

    #[test]
    fn test_encode_osc52_empty() {
        assert_eq!(encode_osc52(""), "\x1b]52;c;\x07");
    }

    #[test]
    fn test_encode_osc52_unicode() {
        let result = encode_osc52("日本語");
        let base64_part = &result[7..result.len() - 1];
        let decoded = STANDARD.decode(base64_part).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "日本語");
    }

    #[test]
    fn test_write_emits_sequence_to_stream() {
        let mut out = Vec::new();
        Osc52Clipboard::new(&mut out).write_text("foo").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), encode_osc52("foo"));
    }

    #[test]
    fn test_read_is_unsupported() {
        let mut clipboard = Osc52Clipboard::new(Vec::new());
        assert_eq!(clipboard.read_text(), Err(ClipboardError::ReadUnsupported));
    }
}
