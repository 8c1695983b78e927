//! In-process clipboard buffer
//!
//! Used when no desktop clipboard exists and by tests. Clones share one buffer.

use std::sync::{Arc, Mutex, PoisonError};

use super::backend::{ClipboardError, ClipboardProvider, ClipboardResult};

#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    buffer: Arc<Mutex<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(text.to_string())),
        }
    }

    /// Current buffer contents
    pub fn contents(&self) -> String {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        Ok(self.contents())
    }

    fn write_text(&mut self, text: &str) -> ClipboardResult {
        let mut buffer = self.buffer.lock().map_err(|_| ClipboardError::WriteError)?;
        buffer.clear();
        buffer.push_str(text);
        Ok(())
    }
}
