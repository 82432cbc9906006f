//! Listener that records every delivered message.

use std::sync::{Arc, Mutex};

use uartframe::{MessageListener, ReassembledMessage};

/// Cloneable recorder; clones share the same message log.
#[derive(Clone, Debug, Default)]
pub struct RecordingListener {
    messages: Arc<Mutex<Vec<ReassembledMessage>>>,
}

impl RecordingListener {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Snapshot of every message received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn messages(&self) -> Vec<ReassembledMessage> {
        self.messages.lock().expect("recorder poisoned").clone()
    }

    /// Payloads of every message received so far.
    #[must_use]
    pub fn payloads(&self) -> Vec<Vec<u8>> {
        self.messages()
            .iter()
            .map(|message| message.payload().to_vec())
            .collect()
    }

    /// Number of messages received so far.
    #[must_use]
    pub fn count(&self) -> usize { self.messages().len() }
}

impl MessageListener for RecordingListener {
    fn on_message(&self, message: ReassembledMessage) {
        self.messages
            .lock()
            .expect("recorder poisoned")
            .push(message);
    }
}
