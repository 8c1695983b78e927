//! Clipboard Worker Thread
//!
//! Runs clipboard reads and writes on a background thread so that starting
//! one never blocks the UI. Requests arrive over a channel and are executed
//! in submission order; responses go back over a second channel and are
//! picked up by the owner with `try_recv` or `recv_timeout`.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use super::backend::{ClipboardError, ClipboardProvider, ClipboardResult};

/// Work item for the clipboard thread
#[derive(Debug)]
pub enum ClipboardRequest {
    Write { id: u64, text: String },
    Read { id: u64 },
}

/// Completion of a [`ClipboardRequest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardResponse {
    Written { id: u64, result: ClipboardResult },
    Read {
        id: u64,
        result: Result<String, ClipboardError>,
    },
}

impl ClipboardResponse {
    pub fn id(&self) -> u64 {
        match self {
            ClipboardResponse::Written { id, .. } | ClipboardResponse::Read { id, .. } => *id,
        }
    }
}

/// Handle to the clipboard thread
///
/// Dropping the handle closes the request channel, which ends the thread.
pub struct ClipboardWorker {
    request_tx: Sender<ClipboardRequest>,
    response_rx: Receiver<ClipboardResponse>,
    next_id: u64,
    pending: usize,
    gone: bool,
}

impl ClipboardWorker {
    /// Spawn the worker thread around `provider`
    pub fn spawn(provider: Box<dyn ClipboardProvider>) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                worker_loop(provider, request_rx, response_tx);
            }));

            if let Err(e) = result {
                let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = e.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                log::error!("Clipboard worker thread panicked: {}", panic_msg);
            }
        });

        Self {
            request_tx,
            response_rx,
            next_id: 1,
            pending: 0,
            gone: false,
        }
    }

    /// Queue a write; returns the request id
    pub fn write(&mut self, text: String) -> Result<u64, ClipboardError> {
        let id = self.allocate_id();
        self.submit(ClipboardRequest::Write { id, text })?;
        Ok(id)
    }

    /// Queue a read; returns the request id
    pub fn read(&mut self) -> Result<u64, ClipboardError> {
        let id = self.allocate_id();
        self.submit(ClipboardRequest::Read { id })?;
        Ok(id)
    }

    /// Number of requests submitted but not yet received back
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// True once the thread has exited and every response has been received
    pub fn is_gone(&self) -> bool {
        self.gone
    }

    /// Next finished response, without blocking
    pub fn try_recv(&mut self) -> Option<ClipboardResponse> {
        match self.response_rx.try_recv() {
            Ok(response) => {
                self.pending = self.pending.saturating_sub(1);
                Some(response)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.mark_gone();
                None
            }
        }
    }

    /// Next finished response, waiting at most `timeout`
    pub fn recv_timeout(&mut self, timeout: Duration) -> Option<ClipboardResponse> {
        match self.response_rx.recv_timeout(timeout) {
            Ok(response) => {
                self.pending = self.pending.saturating_sub(1);
                Some(response)
            }
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                self.mark_gone();
                None
            }
        }
    }

    fn mark_gone(&mut self) {
        if !self.gone {
            log::warn!("Clipboard worker disconnected with {} pending", self.pending);
        }
        self.gone = true;
        self.pending = 0;
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn submit(&mut self, request: ClipboardRequest) -> Result<(), ClipboardError> {
        self.request_tx
            .send(request)
            .map_err(|_| ClipboardError::WorkerGone)?;
        self.pending += 1;
        Ok(())
    }
}

/// Main worker loop - processes requests until channel closes
fn worker_loop(
    mut provider: Box<dyn ClipboardProvider>,
    request_rx: Receiver<ClipboardRequest>,
    response_tx: Sender<ClipboardResponse>,
) {
    log::debug!("Clipboard worker thread started");

    while let Ok(request) = request_rx.recv() {
        let response = match request {
            ClipboardRequest::Write { id, text } => {
                log::debug!("Clipboard write {} ({} bytes)", id, text.len());
                ClipboardResponse::Written {
                    id,
                    result: provider.write_text(&text),
                }
            }
            ClipboardRequest::Read { id } => {
                log::debug!("Clipboard read {}", id);
                ClipboardResponse::Read {
                    id,
                    result: provider.read_text(),
                }
            }
        };

        if response_tx.send(response).is_err() {
            break;
        }
    }

    log::debug!("Clipboard worker thread shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
