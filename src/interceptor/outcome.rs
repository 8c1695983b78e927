use crate::clipboard::ClipboardError;
use crate::shortcut::Shortcut;

/// Result of an asynchronous clipboard operation started by a shortcut
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardOutcome {
    /// Copy or cut text reached the clipboard
    Written { shortcut: Shortcut, chars: usize },
    /// Clipboard text was inserted into the focused element
    Pasted { chars: usize },
    /// Clipboard text arrived but no text element was focused
    PasteDiscarded { chars: usize },
    Failed {
        shortcut: Shortcut,
        error: ClipboardError,
    },
}

impl ClipboardOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, ClipboardOutcome::Failed { .. })
    }

    /// Short human-readable summary
    pub fn message(&self) -> String {
        match self {
            ClipboardOutcome::Written {
                shortcut: Shortcut::Cut,
                chars,
            } => format!("Cut {} chars", chars),
            ClipboardOutcome::Written { chars, .. } => format!("Copied {} chars", chars),
            ClipboardOutcome::Pasted { chars } => format!("Pasted {} chars", chars),
            ClipboardOutcome::PasteDiscarded { .. } => "Nothing to paste into".to_string(),
            ClipboardOutcome::Failed { shortcut, error } => {
                format!("{} failed: {}", shortcut.command_name(), error)
            }
        }
    }
}

/// Receives every [`ClipboardOutcome`]
pub type OutcomeSink = Box<dyn FnMut(&ClipboardOutcome)>;
