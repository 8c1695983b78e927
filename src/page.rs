//! Demo host page
//!
//! A small form: text fields, a button that can take focus but holds no
//! text, and a read-only body. Implements [`Page`] so the interceptor can
//! drive it, and maps native commands onto the fields' own yank buffer.

mod text_field;

pub use text_field::TextField;

use crossterm::event::{KeyCode, KeyEvent};

use crate::shortcut::Shortcut;
use crate::surface::{Page, TextSurface};

pub const DEFAULT_BODY: &str = "Focus a field with Tab, select text and try Ctrl+C, Ctrl+X, Ctrl+V \
     and Ctrl+A. With nothing focused, Ctrl+A selects this text.";

/// A focusable element that holds no text
pub struct Button {
    pub label: String,
}

impl TextSurface for Button {
    fn value(&self) -> Option<String> {
        None
    }

    fn set_value(&mut self, _value: &str) {}

    fn selection_range(&self) -> (usize, usize) {
        (0, 0)
    }

    fn set_selection_range(&mut self, _start: usize, _end: usize) {}
}

pub enum Element {
    Field(TextField),
    Button(Button),
}

impl Element {
    fn surface_mut(&mut self) -> &mut dyn TextSurface {
        match self {
            Element::Field(field) => field,
            Element::Button(button) => button,
        }
    }

    fn set_focused(&mut self, focused: bool) {
        if let Element::Field(field) = self {
            field.set_focused(focused);
        }
    }
}

pub struct DemoPage {
    pub elements: Vec<Element>,
    /// Index into `elements`; `None` means the body has focus
    focus: Option<usize>,
    pub body: String,
    body_selected: bool,
    /// Host-side buffer used by native copy/cut/paste
    yank: String,
}

impl DemoPage {
    pub fn new(elements: Vec<Element>, body: &str) -> Self {
        let mut page = Self {
            elements,
            focus: None,
            body: body.to_string(),
            body_selected: false,
            yank: String::new(),
        };
        page.set_focus(if page.elements.is_empty() { None } else { Some(0) });
        page
    }

    /// The default form shown by the binary
    pub fn demo() -> Self {
        Self::new(
            vec![
                Element::Field(TextField::single_line("Name", "")),
                Element::Field(TextField::multi_line(
                    "Notes",
                    "Select me and press Ctrl+X",
                )),
                Element::Button(Button {
                    label: "Submit".to_string(),
                }),
            ],
            DEFAULT_BODY,
        )
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn body_selected(&self) -> bool {
        self.body_selected
    }

    pub fn set_focus(&mut self, focus: Option<usize>) {
        let focus = focus.filter(|&i| i < self.elements.len());
        for (i, element) in self.elements.iter_mut().enumerate() {
            element.set_focused(Some(i) == focus);
        }
        self.focus = focus;
        self.body_selected = false;
    }

    /// Cycle elements then the body
    pub fn focus_next(&mut self) {
        let next = match self.focus {
            Some(i) if i + 1 < self.elements.len() => Some(i + 1),
            Some(_) => None,
            None if self.elements.is_empty() => None,
            None => Some(0),
        };
        self.set_focus(next);
    }

    pub fn focus_prev(&mut self) {
        let prev = match self.focus {
            Some(0) => None,
            Some(i) => Some(i - 1),
            None => self.elements.len().checked_sub(1),
        };
        self.set_focus(prev);
    }

    pub fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus.and_then(|i| self.elements.get_mut(i)) {
            Some(Element::Field(field)) => Some(field),
            _ => None,
        }
    }

    /// Key input that no listener consumed goes to the focused field
    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.body_selected = false;
        let Some(field) = self.focused_field() else {
            return false;
        };
        if !field.is_multiline() && key.code == KeyCode::Enter {
            return false;
        }
        field.textarea.input(key)
    }

    /// Bracketed paste from the terminal
    pub fn insert_text(&mut self, text: &str) -> bool {
        let Some(field) = self.focused_field() else {
            return false;
        };
        let text = if field.is_multiline() {
            text.to_string()
        } else {
            text.replace(['\r', '\n'], " ")
        };
        field.textarea.insert_str(text)
    }

    fn native_on_field(field: &mut TextField, shortcut: Shortcut, yank: &mut String) {
        match shortcut {
            Shortcut::Copy => {
                field.textarea.copy();
                *yank = field.textarea.yank_text();
            }
            Shortcut::Cut => {
                if field.textarea.cut() {
                    *yank = field.textarea.yank_text();
                }
            }
            Shortcut::Paste => {
                field.textarea.set_yank_text(yank.clone());
                field.textarea.paste();
            }
            Shortcut::SelectAll => field.textarea.select_all(),
        }
    }
}

impl Page for DemoPage {
    fn focused(&mut self) -> Option<&mut dyn TextSurface> {
        let index = self.focus?;
        self.elements.get_mut(index).map(Element::surface_mut)
    }

    fn selection_text(&self) -> String {
        if let Some(Element::Field(field)) = self.focus.and_then(|i| self.elements.get(i)) {
            let selected = field.selected_text();
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
        let yank = &mut self.yank;
        let focused = self.focus.and_then(|i| self.elements.get_mut(i));

        match (focused, shortcut) {
            (Some(Element::Field(field)), _) => {
                Self::native_on_field(field, shortcut, yank);
                true
            }
            (_, Shortcut::SelectAll) => {
                self.body_selected = true;
                true
            }
            (_, Shortcut::Copy) if self.body_selected => {
                *yank = self.body.clone();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod page_tests;
