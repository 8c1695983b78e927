//! Text field element backed by tui-textarea

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

use crate::surface::{TextSurface, edit};

pub struct TextField {
    pub title: String,
    pub textarea: TextArea<'static>,
    multiline: bool,
    focused: bool,
}

impl TextField {
    pub fn single_line(title: &str, value: &str) -> Self {
        Self::build(title, value, false)
    }

    pub fn multi_line(title: &str, value: &str) -> Self {
        Self::build(title, value, true)
    }

    fn build(title: &str, value: &str, multiline: bool) -> Self {
        let mut field = Self {
            title: title.to_string(),
            textarea: TextArea::default(),
            multiline,
            focused: false,
        };
        field.set_value(value);
        field
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Restyle the border for the current focus state
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.apply_style();
    }

    fn apply_style(&mut self) {
        let border = if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        self.textarea.set_cursor_line_style(Style::default());
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", self.title))
                .border_style(Style::default().fg(border)),
        );
    }

    /// Char offset of a (row, col) position
    fn offset_of(&self, (row, col): (usize, usize)) -> usize {
        let lines = self.textarea.lines();
        let before: usize = lines
            .iter()
            .take(row)
            .map(|line| edit::char_len(line) + 1)
            .sum();
        before + col
    }

    /// (row, col) position of a char offset, clamped to the text
    fn position_of(&self, offset: usize) -> (usize, usize) {
        let lines = self.textarea.lines();
        let mut remaining = offset;
        for (row, line) in lines.iter().enumerate() {
            let len = edit::char_len(line);
            if remaining <= len {
                return (row, remaining);
            }
            remaining -= len + 1;
        }
        let last = lines.len().saturating_sub(1);
        (last, lines.last().map(|l| edit::char_len(l)).unwrap_or(0))
    }

    fn jump_to(&mut self, offset: usize) {
        let (row, col) = self.position_of(offset);
        if let (Ok(r), Ok(c)) = (u16::try_from(row), u16::try_from(col)) {
            self.textarea.move_cursor(CursorMove::Jump(r, c));
            return;
        }

        // Jump only takes u16 coordinates, walk the remainder
        let near = u16::try_from(row).unwrap_or(u16::MAX);
        self.textarea.move_cursor(CursorMove::Jump(near, 0));
        for _ in usize::from(near)..row {
            self.textarea.move_cursor(CursorMove::Down);
        }
        self.textarea.move_cursor(CursorMove::Head);

        let line_len = self
            .textarea
            .lines()
            .get(row)
            .map(|line| edit::char_len(line))
            .unwrap_or(0);
        if col >= line_len {
            self.textarea.move_cursor(CursorMove::End);
        } else {
            for _ in 0..col {
                self.textarea.move_cursor(CursorMove::Forward);
            }
        }
    }
}

impl TextSurface for TextField {
    fn value(&self) -> Option<String> {
        Some(self.textarea.lines().join("\n"))
    }

    fn set_value(&mut self, value: &str) {
        let lines: Vec<String> = if self.multiline {
            value.split('\n').map(str::to_string).collect()
        } else {
            vec![value.replace('\n', " ")]
        };

        self.textarea = TextArea::new(lines);
        self.apply_style();
    }

    fn selection_range(&self) -> (usize, usize) {
        match self.textarea.selection_range() {
            Some((start, end)) => {
                let (a, b) = (self.offset_of(start), self.offset_of(end));
                (a.min(b), a.max(b))
            }
            None => {
                let cursor = self.offset_of(self.textarea.cursor());
                (cursor, cursor)
            }
        }
    }

    fn set_selection_range(&mut self, start: usize, end: usize) {
        let len = self.value().map(|v| edit::char_len(&v)).unwrap_or(0);
        let (start, end) = edit::normalize_range(start, end, len);

        self.textarea.cancel_selection();
        self.jump_to(start);
        if start != end {
            self.textarea.start_selection();
            self.jump_to(end);
        }
    }
}
