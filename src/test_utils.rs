//! Shared test utilities for clipshim
//!
//! Fakes for the page abstraction and key-event helpers used across
//! multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::shortcut::Shortcut;
    use crate::surface::{Page, TextSurface, edit};

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a Ctrl+letter KeyEvent
    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Helper to create a Cmd+letter KeyEvent as macOS terminals report it
    pub fn cmd(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::SUPER)
    }

    /// In-memory element; `value == None` models a non-text element
    #[derive(Debug, Clone, Default)]
    pub struct FakeSurface {
        pub value: Option<String>,
        pub start: usize,
        pub end: usize,
    }

    impl FakeSurface {
        pub fn text(value: &str) -> Self {
            Self {
                value: Some(value.to_string()),
                start: 0,
                end: 0,
            }
        }

        pub fn with_selection(mut self, start: usize, end: usize) -> Self {
            self.start = start;
            self.end = end;
            self
        }

        pub fn non_text() -> Self {
            Self::default()
        }
    }

    impl TextSurface for FakeSurface {
        fn value(&self) -> Option<String> {
            self.value.clone()
        }

        fn set_value(&mut self, value: &str) {
            if self.value.is_some() {
                self.value = Some(value.to_string());
            }
        }

        fn selection_range(&self) -> (usize, usize) {
            (self.start, self.end)
        }

        fn set_selection_range(&mut self, start: usize, end: usize) {
            let len = self.value.as_deref().map(edit::char_len).unwrap_or(0);
            let (start, end) = edit::normalize_range(start, end, len);
            self.start = start;
            self.end = end;
        }
    }

    /// In-memory page with an optional focused element and a body
    #[derive(Debug, Default)]
    pub struct FakePage {
        pub focused: Option<FakeSurface>,
        pub body: String,
        pub body_selected: bool,
        pub commands: Vec<Shortcut>,
        pub supports_commands: bool,
    }

    impl FakePage {
        pub fn empty() -> Self {
            Self {
                body: "page body".to_string(),
                supports_commands: true,
                ..Self::default()
            }
        }

        pub fn with_focus(surface: FakeSurface) -> Self {
            Self {
                focused: Some(surface),
                ..Self::empty()
            }
        }

        pub fn value(&self) -> Option<&str> {
            self.focused.as_ref().and_then(|s| s.value.as_deref())
        }

        pub fn range(&self) -> Option<(usize, usize)> {
            self.focused.as_ref().map(|s| (s.start, s.end))
        }
    }

    impl Page for FakePage {
        fn focused(&mut self) -> Option<&mut dyn TextSurface> {
            self.focused.as_mut().map(|s| s as &mut dyn TextSurface)
        }

        fn selection_text(&self) -> String {
            if let Some(surface) = &self.focused {
                let selected = surface.selected_text();
                if !selected.is_empty() {
                    return selected;
                }
            }
            if self.body_selected {
                return self.body.clone();
            }
            String::new()
        }

        fn select_body(&mut self) {
            self.body_selected = true;
        }

        fn exec_command(&mut self, shortcut: Shortcut) -> bool {
            self.commands.push(shortcut);
            self.supports_commands
        }
    }
}
