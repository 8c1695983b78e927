//! Shortcut recognition
//!
//! Maps key-down events to the four clipboard/selection shortcuts. Terminal
//! key events and DOM-style key codes (`"KeyC"`) are both accepted.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A recognised clipboard or selection shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shortcut {
    Copy,
    Cut,
    Paste,
    SelectAll,
}

impl Shortcut {
    pub const ALL: [Shortcut; 4] = [
        Shortcut::Copy,
        Shortcut::Cut,
        Shortcut::Paste,
        Shortcut::SelectAll,
    ];

    /// Recognise a shortcut from a terminal key event
    ///
    /// Release events never match. Key repeats do, the same way a held
    /// key keeps firing key-down.
    pub fn from_key_event(key: &KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release || !has_command_modifier(key.modifiers) {
            return None;
        }

        match key.code {
            KeyCode::Char(c) => Self::from_letter(c),
            _ => None,
        }
    }

    /// Recognise a shortcut from a DOM `KeyboardEvent.code` value
    pub fn from_code(code: &str, ctrl: bool, meta: bool) -> Option<Self> {
        if !(ctrl || meta) {
            return None;
        }

        match code {
            "KeyC" => Some(Shortcut::Copy),
            "KeyX" => Some(Shortcut::Cut),
            "KeyV" => Some(Shortcut::Paste),
            "KeyA" => Some(Shortcut::SelectAll),
            _ => None,
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'c' => Some(Shortcut::Copy),
            'x' => Some(Shortcut::Cut),
            'v' => Some(Shortcut::Paste),
            'a' => Some(Shortcut::SelectAll),
            _ => None,
        }
    }

    /// Name of the host built-in command carrying out this shortcut
    pub fn command_name(self) -> &'static str {
        match self {
            Shortcut::Copy => "copy",
            Shortcut::Cut => "cut",
            Shortcut::Paste => "paste",
            Shortcut::SelectAll => "selectAll",
        }
    }
}

/// Control on every platform, Command (reported as super or meta) on macOS
fn has_command_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META)
}
