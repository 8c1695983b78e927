//! Clipboard shortcut interceptor
//!
//! Recognises Ctrl/Cmd + C, X, V and A on every key-down and carries the
//! action out itself so the host's default handling never runs.
//!
//! Two modes:
//! - [`InterceptMode::Native`] forwards to the host's built-in command
//! - [`InterceptMode::Manual`] reads the selection and talks to the
//!   clipboard worker directly
//!
//! Clipboard I/O is asynchronous. Completions are applied when the host
//! calls [`Interceptor::poll`] or [`Interceptor::flush`], and every result,
//! failures included, is handed to the outcome sink.

mod manual;
mod native;
mod outcome;

pub use outcome::{ClipboardOutcome, OutcomeSink};

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;

use crate::clipboard::{ClipboardError, ClipboardResponse, ClipboardWorker, provider_for};
pub use crate::config::InterceptMode;
use crate::config::Config;
use crate::dispatcher::{KeyDispatcher, KeyListener, ListenerId};
use crate::shortcut::Shortcut;
use crate::surface::Page;

/// Bookkeeping for a clipboard request that has not completed yet
#[derive(Debug, Clone, Copy)]
struct InFlight {
    shortcut: Shortcut,
    /// Chars handed to the clipboard; zero for reads
    chars: usize,
}

pub struct Interceptor {
    mode: InterceptMode,
    clipboard: ClipboardWorker,
    in_flight: HashMap<u64, InFlight>,
    on_outcome: Option<OutcomeSink>,
}

impl Interceptor {
    pub fn new(mode: InterceptMode, clipboard: ClipboardWorker) -> Self {
        Self {
            mode,
            clipboard,
            in_flight: HashMap::new(),
            on_outcome: None,
        }
    }

    /// Build from configuration, spawning a worker for the configured backend
    pub fn from_config(config: &Config) -> Self {
        let provider = provider_for(config.clipboard.backend);
        Self::new(config.interceptor.mode, ClipboardWorker::spawn(provider))
    }

    pub fn with_outcome_sink(mut self, sink: impl FnMut(&ClipboardOutcome) + 'static) -> Self {
        self.on_outcome = Some(Box::new(sink));
        self
    }

    pub fn mode(&self) -> InterceptMode {
        self.mode
    }

    /// Number of clipboard operations still in flight
    pub fn pending(&self) -> usize {
        self.in_flight.len()
    }

    /// Handle one key-down. Returns true if it was one of the four
    /// shortcuts, in which case the host must not process it further.
    pub fn handle_key(&mut self, key: &KeyEvent, page: &mut dyn Page) -> bool {
        match Shortcut::from_key_event(key) {
            Some(shortcut) => {
                self.handle_shortcut(shortcut, page);
                true
            }
            None => false,
        }
    }

    /// Same as [`Interceptor::handle_key`] for hosts that report DOM
    /// `KeyboardEvent.code` values and modifier flags
    pub fn handle_code(
        &mut self,
        code: &str,
        ctrl: bool,
        meta: bool,
        page: &mut dyn Page,
    ) -> bool {
        match Shortcut::from_code(code, ctrl, meta) {
            Some(shortcut) => {
                self.handle_shortcut(shortcut, page);
                true
            }
            None => false,
        }
    }

    pub fn handle_shortcut(&mut self, shortcut: Shortcut, page: &mut dyn Page) {
        log::debug!("Intercepted {:?} in {:?} mode", shortcut, self.mode);

        match self.mode {
            InterceptMode::Native => self.run_native(shortcut, page),
            InterceptMode::Manual => match shortcut {
                Shortcut::Copy => self.copy(page),
                Shortcut::Cut => self.cut(page),
                Shortcut::Paste => self.paste(),
                Shortcut::SelectAll => self.select_all(page),
            },
        }
    }

    /// Apply every clipboard completion that is ready. Never blocks.
    pub fn poll(&mut self, page: &mut dyn Page) -> usize {
        let mut applied = 0;
        while let Some(response) = self.clipboard.try_recv() {
            self.complete(response, page);
            applied += 1;
        }
        if self.clipboard.is_gone() && !self.in_flight.is_empty() {
            self.abandon_in_flight();
        }
        applied
    }

    /// Wait for in-flight clipboard operations, up to `timeout` in total
    pub fn flush(&mut self, page: &mut dyn Page, timeout: Duration) -> usize {
        let deadline = Instant::now() + timeout;
        let mut applied = 0;

        while !self.in_flight.is_empty() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                log::warn!(
                    "Gave up waiting for {} clipboard operations",
                    self.in_flight.len()
                );
                break;
            }

            match self.clipboard.recv_timeout(remaining) {
                Some(response) => {
                    self.complete(response, page);
                    applied += 1;
                }
                None if self.clipboard.is_gone() => {
                    self.abandon_in_flight();
                    break;
                }
                None => {}
            }
        }

        applied
    }

    fn complete(&mut self, response: ClipboardResponse, page: &mut dyn Page) {
        let Some(InFlight { shortcut, chars }) = self.in_flight.remove(&response.id()) else {
            log::debug!("Ignoring unknown clipboard response {}", response.id());
            return;
        };

        let outcome = match response {
            ClipboardResponse::Written { result, .. } => match result {
                Ok(()) => ClipboardOutcome::Written { shortcut, chars },
                Err(error) => ClipboardOutcome::Failed { shortcut, error },
            },
            ClipboardResponse::Read { result, .. } => match result {
                Ok(text) => self.apply_paste(&text, page),
                Err(error) => ClipboardOutcome::Failed { shortcut, error },
            },
        };

        self.report(outcome);
    }

    /// Worker died with requests outstanding
    fn abandon_in_flight(&mut self) {
        let lost: Vec<InFlight> = self.in_flight.drain().map(|(_, op)| op).collect();
        for op in lost {
            self.report(ClipboardOutcome::Failed {
                shortcut: op.shortcut,
                error: ClipboardError::WorkerGone,
            });
        }
    }

    fn report(&mut self, outcome: ClipboardOutcome) {
        if outcome.is_failure() {
            log::warn!("Clipboard: {}", outcome.message());
        } else {
            log::debug!("Clipboard: {}", outcome.message());
        }

        if let Some(sink) = self.on_outcome.as_mut() {
            sink(&outcome);
        }
    }
}

impl KeyListener for Interceptor {
    fn on_key_down(&mut self, key: &KeyEvent, page: &mut dyn Page) -> bool {
        self.handle_key(key, page)
    }

    fn on_idle(&mut self, page: &mut dyn Page) {
        self.poll(page);
    }

    fn flush(&mut self, page: &mut dyn Page, timeout: Duration) {
        Interceptor::flush(self, page, timeout);
    }
}

/// Build an interceptor from `config` and attach it to `dispatcher`.
///
/// The listener stays attached until the returned id is passed to
/// [`KeyDispatcher::detach`].
pub fn setup(
    dispatcher: &mut KeyDispatcher,
    config: &Config,
    on_outcome: impl FnMut(&ClipboardOutcome) + 'static,
) -> ListenerId {
    let interceptor = Interceptor::from_config(config).with_outcome_sink(on_outcome);
    dispatcher.attach(Box::new(interceptor))
}

#[cfg(test)]
#[path = "interceptor_tests.rs"]
mod interceptor_tests;
