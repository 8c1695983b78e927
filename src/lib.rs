//! clipshim library - clipboard shortcut interception
//!
//! Recognises Ctrl/Cmd + C, X, V and A, and carries out copy, cut, paste
//! and select-all against an injected [`Page`], either through the host's
//! own commands or directly through an asynchronous clipboard worker.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod interceptor;
pub mod notification;
pub mod page;
pub mod shortcut;
pub mod surface;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use dispatcher::{KeyDispatcher, KeyListener, ListenerId};
pub use interceptor::{ClipboardOutcome, InterceptMode, Interceptor, setup};
pub use shortcut::Shortcut;
pub use surface::{Page, TextSurface};
