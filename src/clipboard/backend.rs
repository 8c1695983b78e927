use thiserror::Error;

use super::{memory::MemoryClipboard, osc52::Osc52Clipboard, system::SystemClipboard};
use crate::config::ClipboardBackend;

pub type ClipboardResult = Result<(), ClipboardError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("system clipboard unavailable")]
    SystemUnavailable,
    #[error("clipboard read failed")]
    ReadError,
    #[error("clipboard write failed")]
    WriteError,
    #[error("backend cannot read the clipboard")]
    ReadUnsupported,
    #[error("clipboard worker stopped")]
    WorkerGone,
}

/// Something that can hold clipboard text
///
/// Providers are moved onto the clipboard worker thread, so they must be `Send`.
pub trait ClipboardProvider: Send {
    fn read_text(&mut self) -> Result<String, ClipboardError>;
    fn write_text(&mut self, text: &str) -> ClipboardResult;
}

/// System clipboard, falling back to OSC 52 for writes and to an
/// in-process buffer for reads when no system clipboard is reachable.
pub struct AutoClipboard {
    system: SystemClipboard,
    osc52: Osc52Clipboard<std::io::Stdout>,
    memory: MemoryClipboard,
}

impl AutoClipboard {
    pub fn new() -> Self {
        Self {
            system: SystemClipboard,
            osc52: Osc52Clipboard::stdout(),
            memory: MemoryClipboard::new(),
        }
    }
}

impl Default for AutoClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardProvider for AutoClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.system
            .read_text()
            .or_else(|_| self.memory.read_text())
    }

    fn write_text(&mut self, text: &str) -> ClipboardResult {
        self.memory.write_text(text)?;
        self.system
            .write_text(text)
            .or_else(|_| self.osc52.write_text(text))
    }
}

pub fn provider_for(backend: ClipboardBackend) -> Box<dyn ClipboardProvider> {
    match backend {
        ClipboardBackend::System => Box::new(SystemClipboard),
        ClipboardBackend::Osc52 => Box::new(Osc52Clipboard::stdout()),
        ClipboardBackend::Memory => Box::new(MemoryClipboard::new()),
        ClipboardBackend::Auto => Box::new(AutoClipboard::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_provider_round_trips() {
        let mut provider = provider_for(ClipboardBackend::Memory);
        provider.write_text("hello").unwrap();
        assert_eq!(provider.read_text().unwrap(), "hello");
    }

    #[test]
    fn test_osc52_provider_cannot_read() {
        let mut provider = provider_for(ClipboardBackend::Osc52);
        assert_eq!(provider.read_text(), Err(ClipboardError::ReadUnsupported));
    }

    #[test]
    fn test_system_provider_returns_result() {
        let mut provider = provider_for(ClipboardBackend::System);
        let result = provider.write_text("test");
        assert!(
            result.is_ok()
                || matches!(
                    result,
                    Err(ClipboardError::SystemUnavailable) | Err(ClipboardError::WriteError)
                )
        );
    }

    #[test]
    fn test_auto_provider_reads_back_what_it_wrote() {
        let mut provider = AutoClipboard::new();
        assert!(provider.write_text("auto text").is_ok());
        // Either the system clipboard or the in-process fallback answers
        let read = provider.read_text();
        assert!(read.is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ClipboardError::ReadUnsupported.to_string(),
            "backend cannot read the clipboard"
        );
        assert_eq!(ClipboardError::WorkerGone.to_string(), "clipboard worker stopped");
    }
}
