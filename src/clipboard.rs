//! Clipboard module for clipshim
//!
//! Provides clipboard access with support for:
//! - System clipboard (via arboard)
//! - OSC 52 escape sequences (write-only, for remote terminals)
//! - A process-local memory buffer
//! - Auto mode (system with fallbacks)
//!
//! All I/O goes through [`ClipboardWorker`] so callers never block on it.

mod backend;
mod memory;
mod osc52;
mod system;
mod worker;

pub use backend::{
    AutoClipboard, ClipboardError, ClipboardProvider, ClipboardResult, provider_for,
};
pub use memory::MemoryClipboard;
pub use osc52::{Osc52Clipboard, encode_osc52};
pub use system::SystemClipboard;
pub use worker::{ClipboardRequest, ClipboardResponse, ClipboardWorker};
