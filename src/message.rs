//! Owned output of a completed reassembly.

use bytes::Bytes;

/// Container for a fully reassembled message payload.
///
/// Ownership passes to the [`MessageListener`](crate::MessageListener); the
/// session keeps no reference to it after delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReassembledMessage {
    payload: Bytes,
    chunk_count: usize,
}

impl ReassembledMessage {
    /// Construct a new [`ReassembledMessage`].
    #[must_use]
    pub fn new(payload: impl Into<Bytes>, chunk_count: usize) -> Self {
        Self {
            payload: payload.into(),
            chunk_count,
        }
    }

    /// Borrow the reassembled payload.
    #[must_use]
    pub fn payload(&self) -> &[u8] { &self.payload }

    /// Consume the message, returning the payload bytes.
    #[must_use]
    pub fn into_payload(self) -> Bytes { self.payload }

    /// Number of chunks the message was stitched from.
    #[must_use]
    pub const fn chunk_count(&self) -> usize { self.chunk_count }

    /// Payload length in bytes.
    #[must_use]
    pub fn len(&self) -> usize { self.payload.len() }

    /// Whether the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.payload.is_empty() }
}

impl AsRef<[u8]> for ReassembledMessage {
    fn as_ref(&self) -> &[u8] { self.payload() }
}
