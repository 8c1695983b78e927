use std::sync::mpsc::{self, Receiver};

use crate::config::{ClipboardBackend, Config, InterceptMode};
use crate::dispatcher::{KeyDispatcher, KeyListener, ListenerId};
use crate::interceptor::{self, ClipboardOutcome};
use crate::notification::NotificationState;
use crate::page::DemoPage;

pub struct App {
    pub page: DemoPage,
    pub dispatcher: KeyDispatcher,
    pub notification: NotificationState,
    pub mode: InterceptMode,
    pub backend: ClipboardBackend,
    pub should_quit: bool,
    outcome_rx: Receiver<ClipboardOutcome>,
    interceptor_id: Option<ListenerId>,
    /// The interceptor while detached, kept for re-attaching
    parked: Option<Box<dyn KeyListener>>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::with_page(DemoPage::demo(), config)
    }

    pub fn with_page(page: DemoPage, config: &Config) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel();
        let mut dispatcher = KeyDispatcher::new();
        let id = interceptor::setup(&mut dispatcher, config, move |outcome| {
            let _ = outcome_tx.send(outcome.clone());
        });

        Self {
            page,
            dispatcher,
            notification: NotificationState::new(),
            mode: config.interceptor.mode,
            backend: config.clipboard.backend,
            should_quit: false,
            outcome_rx,
            interceptor_id: Some(id),
            parked: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn interception_enabled(&self) -> bool {
        self.interceptor_id.is_some()
    }

    /// Detach the interceptor, or attach it again
    ///
    /// While detached, shortcuts reach the text fields' own key bindings.
    pub fn toggle_interception(&mut self) {
        if let Some(id) = self.interceptor_id.take() {
            self.parked = self.dispatcher.detach(id);
            self.notification.show("Interception off");
        } else if let Some(listener) = self.parked.take() {
            self.interceptor_id = Some(self.dispatcher.attach(listener));
            self.notification.show("Interception on");
        }
    }

    /// Turn finished clipboard work into notifications
    pub fn drain_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            let message = outcome.message();
            if outcome.is_failure() {
                self.notification.show_error(&message);
            } else {
                self.notification.show(&message);
            }
        }
    }
}
