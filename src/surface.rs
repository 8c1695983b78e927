//! Page and text-surface abstraction
//!
//! The interceptor never reads ambient state directly. Hosts hand it a
//! [`Page`], which exposes the focused element as a [`TextSurface`] plus a
//! few page-wide operations. Offsets are char offsets into the value.

pub mod edit;

use crate::shortcut::Shortcut;

/// A focusable element as seen by the interceptor
pub trait TextSurface {
    /// Current text value, or `None` if the element is not text-editable
    fn value(&self) -> Option<String>;

    fn set_value(&mut self, value: &str);

    /// Selection as `(start, end)`; a collapsed cursor has `start == end`
    fn selection_range(&self) -> (usize, usize);

    fn set_selection_range(&mut self, start: usize, end: usize);

    /// Text covered by the current selection
    fn selected_text(&self) -> String {
        match self.value() {
            Some(value) => {
                let (start, end) = self.selection_range();
                edit::slice_chars(&value, start, end).to_string()
            }
            None => String::new(),
        }
    }
}

/// The host environment the interceptor operates on
pub trait Page {
    /// The element receiving keyboard input, if any
    fn focused(&mut self) -> Option<&mut dyn TextSurface>;

    /// Text of the page-wide selection
    fn selection_text(&self) -> String;

    /// Select the whole document body
    fn select_body(&mut self);

    /// Run the host's built-in command for `shortcut`.
    /// Returns false when the host has no such command.
    fn exec_command(&mut self, shortcut: Shortcut) -> bool;
}
