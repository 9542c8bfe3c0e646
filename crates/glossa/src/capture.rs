//! Serialized processing of clipboard-capture events.
//!
//! The desktop shell's global shortcut delivers captured text
//! asynchronously. Requests must not run concurrently - interleaved
//! results would corrupt the displayed state - so events are drained by a
//! single worker, strictly one at a time. A trigger that arrives while a
//! request is in flight waits in the queue.

use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use serde::{Deserialize, Serialize};

/// Mode requested by a capture event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureMode {
    /// Correct the captured text.
    Correction,
    /// Explain the captured text sentence by sentence.
    Explanation,
}

impl CaptureMode {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CaptureMode::Correction => "correction",
            CaptureMode::Explanation => "explanation",
        }
    }
}

/// A captured text plus the mode it should be processed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureEvent {
    pub text: String,
    pub mode: CaptureMode,
}

impl CaptureEvent {
    /// Create a new capture event.
    pub fn new(text: impl Into<String>, mode: CaptureMode) -> Self {
        Self {
            text: text.into(),
            mode,
        }
    }
}

/// Queue that processes capture events strictly one at a time, in
/// submission order.
pub struct CaptureQueue {
    tx: Option<Sender<CaptureEvent>>,
    worker: Option<JoinHandle<()>>,
}

impl CaptureQueue {
    /// Start the worker with a handler invoked once per event.
    pub fn start<F>(mut handler: F) -> Self
    where
        F: FnMut(CaptureEvent) + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<CaptureEvent>();
        let worker = thread::spawn(move || {
            while let Ok(event) = rx.recv() {
                handler(event);
            }
        });

        Self {
            tx: Some(tx),
            worker: Some(worker),
        }
    }

    /// Enqueue an event. Returns false if the queue has shut down.
    pub fn submit(&self, event: CaptureEvent) -> bool {
        self.tx
            .as_ref()
            .is_some_and(|tx| tx.send(event).is_ok())
    }

    /// Stop accepting events and wait for queued ones to finish.
    pub fn shutdown(mut self) {
        self.close_and_join();
    }

    fn close_and_join(&mut self) {
        // Dropping the sender closes the channel; the worker drains what
        // is queued and exits.
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for CaptureQueue {
    fn drop(&mut self) {
        self.close_and_join();
    }
}
