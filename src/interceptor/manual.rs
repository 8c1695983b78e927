//! Manual mode: selection and clipboard handled by the interceptor itself

use super::{ClipboardOutcome, InFlight, Interceptor};
use crate::shortcut::Shortcut;
use crate::surface::{Page, edit};

impl Interceptor {
    pub(super) fn copy(&mut self, page: &mut dyn Page) {
        let text = page.selection_text();
        if text.is_empty() {
            log::debug!("Copy with empty selection, leaving clipboard untouched");
            return;
        }
        self.start_write(Shortcut::Copy, text);
    }

    pub(super) fn cut(&mut self, page: &mut dyn Page) {
        let text = page.selection_text();
        if text.is_empty() {
            log::debug!("Cut with empty selection, nothing to do");
            return;
        }
        self.start_write(Shortcut::Cut, text);

        let Some(surface) = page.focused() else {
            log::debug!("Cut without a focused element, clipboard only");
            return;
        };
        let Some(value) = surface.value() else {
            return;
        };

        let (start, end) = surface.selection_range();
        let (remaining, cursor) = edit::splice(&value, start, end, "");
        surface.set_value(&remaining);
        surface.set_selection_range(cursor, cursor);
    }

    pub(super) fn paste(&mut self) {
        match self.clipboard.read() {
            Ok(id) => {
                self.in_flight.insert(
                    id,
                    InFlight {
                        shortcut: Shortcut::Paste,
                        chars: 0,
                    },
                );
            }
            Err(error) => self.report(ClipboardOutcome::Failed {
                shortcut: Shortcut::Paste,
                error,
            }),
        }
    }

    pub(super) fn select_all(&mut self, page: &mut dyn Page) {
        if let Some(surface) = page.focused()
            && let Some(value) = surface.value()
        {
            surface.set_selection_range(0, edit::char_len(&value));
            return;
        }
        page.select_body();
    }

    /// Insert clipboard text into whatever is focused now
    pub(super) fn apply_paste(&self, text: &str, page: &mut dyn Page) -> ClipboardOutcome {
        let chars = edit::char_len(text);

        let Some(surface) = page.focused() else {
            return ClipboardOutcome::PasteDiscarded { chars };
        };
        let Some(value) = surface.value() else {
            return ClipboardOutcome::PasteDiscarded { chars };
        };

        let (start, end) = surface.selection_range();
        let (updated, cursor) = edit::splice(&value, start, end, text);
        surface.set_value(&updated);
        surface.set_selection_range(cursor, cursor);

        ClipboardOutcome::Pasted { chars }
    }

    fn start_write(&mut self, shortcut: Shortcut, text: String) {
        let chars = edit::char_len(&text);
        match self.clipboard.write(text) {
            Ok(id) => {
                self.in_flight.insert(id, InFlight { shortcut, chars });
            }
            Err(error) => self.report(ClipboardOutcome::Failed { shortcut, error }),
        }
    }
}
