use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::App;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// How long to wait for in-flight clipboard writes before exiting
const SHUTDOWN_FLUSH_TIMEOUT: Duration = Duration::from_millis(500);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.page.insert_text(&text);
                }
                _ => {}
            }
        }

        self.tick();
        Ok(())
    }

    /// Apply finished clipboard work
    pub fn tick(&mut self) {
        self.dispatcher.poll(&mut self.page);
        self.drain_outcomes();
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        if self.dispatcher.dispatch(&key, &mut self.page) {
            return;
        }

        self.page.input(key);
    }

    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                true
            }
            KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::Tab => {
                self.page.focus_next();
                true
            }
            KeyCode::BackTab => {
                self.page.focus_prev();
                true
            }
            KeyCode::F(2) => {
                self.toggle_interception();
                true
            }
            _ => false,
        }
    }

    /// Let pending clipboard writes land before the process exits
    pub fn shutdown(&mut self) {
        self.dispatcher.flush(&mut self.page, SHUTDOWN_FLUSH_TIMEOUT);
        self.drain_outcomes();
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
