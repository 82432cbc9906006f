//! Delivery of reassembled messages to the protocol layer.
//!
//! [`MessageListener`] is the single outbound seam of a
//! [`ReassemblySession`](crate::ReassemblySession). Closures implement it
//! directly; [`ChannelListener`] bridges into async code that awaits
//! responses, and [`SharedListener`] lets a listener behind an [`Arc`] be
//! owned by the session and inspected elsewhere.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::message::ReassembledMessage;

/// Receiver of completed messages.
///
/// `on_message` runs synchronously on the thread that delivered the final
/// chunk, after the session lock has been released. A listener may therefore
/// feed new chunks into the same session without deadlocking.
pub trait MessageListener: Send + Sync {
    /// Called once for every completed message.
    fn on_message(&self, message: ReassembledMessage);
}

impl<F> MessageListener for F
where
    F: Fn(ReassembledMessage) + Send + Sync,
{
    fn on_message(&self, message: ReassembledMessage) { self(message); }
}

/// Forwards to a listener held in an [`Arc`].
///
/// A blanket `impl MessageListener for Arc<L>` would overlap with the closure
/// impl, so sharing goes through this wrapper instead.
///
/// # Examples
///
/// ```
/// use std::sync::{
///     Arc,
///     atomic::{AtomicUsize, Ordering},
/// };
///
/// use uartframe::{MessageListener, ReassembledMessage, ReassemblySession, SharedListener};
///
/// #[derive(Default)]
/// struct Counter(AtomicUsize);
///
/// impl MessageListener for Counter {
///     fn on_message(&self, _message: ReassembledMessage) { self.0.fetch_add(1, Ordering::Relaxed); }
/// }
///
/// let counter = Arc::new(Counter::default());
/// let session = ReassemblySession::new(SharedListener::new(Arc::clone(&counter)));
/// session.chunk_received(vec![0, 1, 0x2a]);
/// assert_eq!(counter.0.load(Ordering::Relaxed), 1);
/// ```
#[derive(Debug)]
pub struct SharedListener<L: ?Sized> {
    inner: Arc<L>,
}

impl<L: ?Sized> SharedListener<L> {
    /// Wrap a shared listener.
    #[must_use]
    pub fn new(inner: Arc<L>) -> Self { Self { inner } }

    /// Borrow the shared listener.
    #[must_use]
    pub fn get(&self) -> &Arc<L> { &self.inner }
}

impl<L: ?Sized> Clone for SharedListener<L> {
    fn clone(&self) -> Self { Self::new(Arc::clone(&self.inner)) }
}

impl<L: ?Sized> From<Arc<L>> for SharedListener<L> {
    fn from(inner: Arc<L>) -> Self { Self::new(inner) }
}

impl<L: MessageListener + ?Sized> MessageListener for SharedListener<L> {
    fn on_message(&self, message: ReassembledMessage) { self.inner.on_message(message); }
}

/// Listener that forwards messages into an unbounded Tokio channel.
///
/// Sending never blocks, so the transport callback thread is not held up by
/// a slow consumer.
///
/// # Examples
///
/// ```
/// use uartframe::{ChannelListener, ReassemblySession};
///
/// let (listener, mut rx) = ChannelListener::channel();
/// let session = ReassemblySession::new(listener);
/// session.chunk_received(vec![0, 2, b'o', b'k']);
/// let message = rx.try_recv().expect("message delivered");
/// assert_eq!(message.payload(), b"ok");
/// ```
#[derive(Clone, Debug)]
pub struct ChannelListener {
    tx: mpsc::UnboundedSender<ReassembledMessage>,
}

impl ChannelListener {
    /// Wrap an existing sender.
    #[must_use]
    pub fn new(tx: mpsc::UnboundedSender<ReassembledMessage>) -> Self { Self { tx } }

    /// Create a listener together with the receiving half of its channel.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ReassembledMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl MessageListener for ChannelListener {
    fn on_message(&self, message: ReassembledMessage) {
        if let Err(mpsc::error::SendError(message)) = self.tx.send(message) {
            tracing::warn!(
                len = message.len(),
                "reassembled message dropped: receiver closed"
            );
        }
    }
}
