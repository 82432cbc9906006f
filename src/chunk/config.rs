//! Configuration shared by the chunker and the reassembly session.

use std::num::NonZeroUsize;

use super::{HEADER_LEN, MAX_CHUNK_SIZE};

/// Settings describing the transport's frame size.
///
/// The completion predicate divides chunk 0's declared length by
/// [`payload_cap`](Self::payload_cap), which is one less than the frame size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReassemblyConfig {
    max_chunk_size: usize,
    payload_cap: NonZeroUsize,
}

impl ReassemblyConfig {
    /// Derive a configuration from the transport's maximum frame size.
    ///
    /// Returns `None` when `max_chunk_size` cannot hold the chunk header.
    ///
    /// # Examples
    ///
    /// ```
    /// use uartframe::chunk::ReassemblyConfig;
    ///
    /// let config = ReassemblyConfig::new(20).expect("valid frame size");
    /// assert_eq!(config.payload_cap().get(), 19);
    /// assert_eq!(config.frame_payload_len(), 18);
    /// assert_eq!(config.expected_chunks(25), 2);
    /// assert!(ReassemblyConfig::new(1).is_none());
    /// ```
    #[must_use]
    pub const fn new(max_chunk_size: usize) -> Option<Self> {
        if max_chunk_size < HEADER_LEN {
            return None;
        }
        match NonZeroUsize::new(max_chunk_size - 1) {
            Some(payload_cap) => Some(Self {
                max_chunk_size,
                payload_cap,
            }),
            None => None,
        }
    }

    /// Maximum frame size this configuration was derived from.
    #[must_use]
    pub const fn max_chunk_size(&self) -> usize { self.max_chunk_size }

    /// Payload bytes each full chunk contributes to the message.
    #[must_use]
    pub const fn payload_cap(&self) -> NonZeroUsize { self.payload_cap }

    /// Payload bytes that fit in one frame once the header is written.
    ///
    /// This is one less than [`payload_cap`](Self::payload_cap), so outbound
    /// frames sized by it never exceed [`max_chunk_size`](Self::max_chunk_size).
    #[must_use]
    pub const fn frame_payload_len(&self) -> usize { self.max_chunk_size - HEADER_LEN }

    /// Number of chunks a message of `declared_total_length` bytes spans.
    ///
    /// A declared length of zero yields zero, which no non-empty store can
    /// match, so such a message never completes.
    #[must_use]
    pub fn expected_chunks(&self, declared_total_length: u8) -> usize {
        usize::from(declared_total_length).div_ceil(self.payload_cap.get())
    }
}

const DEFAULT_CONFIG: ReassemblyConfig = match ReassemblyConfig::new(MAX_CHUNK_SIZE) {
    Some(config) => config,
    None => panic!("MAX_CHUNK_SIZE must hold the chunk header"),
};

impl Default for ReassemblyConfig {
    fn default() -> Self { DEFAULT_CONFIG }
}
