//! Reassembly of chunked UART messages.
//!
//! [`ReassemblySession`] accepts frames as the transport delivers them, in
//! whatever order they arrive, and hands each completed message to its
//! [`MessageListener`] exactly once. Completion is re-derived from the stored
//! chunks on every frame: chunk 0 declares the message length, which fixes
//! how many chunks must be present, and the stored indices must then form the
//! contiguous range starting at zero.
//!
//! The session holds at most one message in flight. The store is cleared
//! under the same lock that detected completion, so the next frame always
//! starts a fresh message.

#[cfg(not(loom))]
use std::sync::{Mutex, MutexGuard};
use std::{fmt, sync::PoisonError};

use bytes::Bytes;
use log::{debug, trace, warn};
#[cfg(loom)]
use loom::sync::{Mutex, MutexGuard};

use crate::{
    chunk::{Chunk, ChunkStore, ReassemblyConfig, to_hex},
    listener::MessageListener,
    message::ReassembledMessage,
    metrics,
};

/// Mutable state for the message currently being assembled.
///
/// # Examples
///
/// ```
/// use std::sync::mpsc;
///
/// use uartframe::{ReassembledMessage, ReassemblySession};
///
/// let (tx, rx) = mpsc::channel();
/// let tx = std::sync::Mutex::new(tx);
/// let session = ReassemblySession::new(move |message: ReassembledMessage| {
///     tx.lock().expect("lock").send(message).expect("send");
/// });
///
/// // Chunk 1 arrives before chunk 0; the message still completes in order.
/// let mut second = vec![1, 25];
/// second.extend_from_slice(&[b'b'; 6]);
/// let mut first = vec![0, 25];
/// first.extend_from_slice(&[b'a'; 19]);
///
/// session.chunk_received(second);
/// assert!(rx.try_recv().is_err());
/// session.chunk_received(first);
///
/// let message = rx.try_recv().expect("message delivered");
/// assert_eq!(message.len(), 25);
/// assert_eq!(&message.payload()[18..20], b"ab");
/// assert_eq!(session.pending_chunks(), 0);
/// ```
pub struct ReassemblySession<L> {
    config: ReassemblyConfig,
    store: Mutex<ChunkStore>,
    listener: L,
}

impl<L> fmt::Debug for ReassemblySession<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReassemblySession")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<L: MessageListener> ReassemblySession<L> {
    /// Create a session using the default 20-byte frame configuration.
    #[must_use]
    pub fn new(listener: L) -> Self { Self::with_config(ReassemblyConfig::default(), listener) }

    /// Create a session for a transport with a custom frame size.
    #[must_use]
    pub fn with_config(config: ReassemblyConfig, listener: L) -> Self {
        Self {
            config,
            store: Mutex::new(ChunkStore::new()),
            listener,
        }
    }

    /// Feed one frame received from the transport.
    ///
    /// Frames too short to hold the header are dropped without touching the
    /// store. If the frame completes the message, the listener is invoked on
    /// the calling thread once the lock has been released.
    pub fn chunk_received(&self, frame: impl Into<Bytes>) {
        metrics::inc_chunks_received();
        let chunk = match Chunk::parse(frame) {
            Ok(chunk) => chunk,
            Err(err) => {
                metrics::inc_chunks_dropped();
                warn!("dropping malformed chunk: {err}");
                return;
            }
        };
        trace!("chunk {} received: [{}]", chunk.index(), to_hex(chunk.as_bytes()));

        let completed = {
            let mut store = self.lock_store();
            if store.add(chunk).is_some() {
                debug!("chunk index repeated; keeping the latest frame");
            }
            self.take_if_complete(&mut store)
        };

        if let Some(message) = completed {
            metrics::inc_messages_reassembled();
            debug!(
                "message reassembled: chunks={}, len={}",
                message.chunk_count(),
                message.len()
            );
            self.listener.on_message(message);
        }
    }

    /// Discard any partially received message.
    ///
    /// Calling this on an empty session is a no-op.
    pub fn abandon(&self) {
        let discarded = {
            let mut store = self.lock_store();
            let discarded = store.len();
            store.clear();
            discarded
        };
        if discarded > 0 {
            metrics::inc_sessions_abandoned();
            debug!("abandoned partial message: chunks={discarded}");
        }
    }

    /// Number of chunks currently buffered for the message in flight.
    #[must_use]
    pub fn pending_chunks(&self) -> usize { self.lock_store().len() }

    /// Frame configuration used by the completion predicate.
    #[must_use]
    pub const fn config(&self) -> ReassemblyConfig { self.config }

    /// Borrow the registered listener.
    #[must_use]
    pub const fn listener(&self) -> &L { &self.listener }

    fn lock_store(&self) -> MutexGuard<'_, ChunkStore> {
        // The guarded store is only mutated by single calls that cannot leave
        // it half-updated, so a poisoned lock still holds a usable store.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn take_if_complete(&self, store: &mut ChunkStore) -> Option<ReassembledMessage> {
        if !is_complete(store, self.config) {
            return None;
        }
        let message = ReassembledMessage::new(store.concat_payloads(), store.len());
        store.clear();
        Some(message)
    }
}

/// Completion predicate, evaluated from scratch against the current store.
///
/// Every stored chunk is at least a header long, so the lowest-index chunk
/// always carries a readable declared length.
pub(crate) fn is_complete(store: &ChunkStore, config: ReassemblyConfig) -> bool {
    let Some(first) = store.first() else {
        return false;
    };
    let expected = config.expected_chunks(first.declared_total_length());
    store.is_contiguous_from_zero(expected)
}
