//! Outbound helper that splits messages into indexed chunks.
//!
//! [`Chunker`] is the mirror image of the reassembly session. It cuts a
//! payload into slices that fit the transport frame after the two header
//! bytes, and refuses lengths for which the receiving side, dividing the
//! declared length by [`ReassemblyConfig::payload_cap`], would expect a
//! different number of chunks than were sent.

use super::{Chunk, ChunkIndex, ChunkingError, MAX_MESSAGE_LEN, ReassemblyConfig};

/// Splits outbound messages into chunk frames.
#[derive(Clone, Copy, Debug, Default)]
pub struct Chunker {
    config: ReassemblyConfig,
}

impl Chunker {
    /// Create a chunker for the given transport configuration.
    #[must_use]
    pub const fn new(config: ReassemblyConfig) -> Self { Self { config } }

    /// Configuration used to size chunks.
    #[must_use]
    pub const fn config(&self) -> ReassemblyConfig { self.config }

    /// Split `payload` into chunks ready to be written to the transport.
    ///
    /// Every chunk carries its index and the total payload length, and no
    /// frame is longer than the configured maximum chunk size: all but the
    /// last hold exactly [`ReassemblyConfig::frame_payload_len`] bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkingError::Empty`] for an empty payload,
    /// [`ChunkingError::MessageTooLarge`] when the payload length does not fit
    /// in the declared-length byte, and [`ChunkingError::FrameTooSmall`] when
    /// the frame holds only a header. Lengths whose frame count differs from
    /// [`ReassemblyConfig::expected_chunks`] fail with
    /// [`ChunkingError::UnrepresentableLength`]; at the default 20-byte frame
    /// size these are 19, 37, 38, 55 to 57, and so on.
    ///
    /// # Examples
    ///
    /// ```
    /// use uartframe::chunk::{Chunker, ChunkingError};
    ///
    /// let chunks = Chunker::default().chunk(&[7_u8; 25]).expect("chunk message");
    /// assert_eq!(chunks.len(), 2);
    /// assert_eq!(chunks[0].payload().len(), 18);
    /// assert_eq!(chunks[0].len(), 20);
    /// assert_eq!(&chunks[1].as_bytes()[..2], &[1, 25]);
    ///
    /// assert!(matches!(
    ///     Chunker::default().chunk(&[7_u8; 19]),
    ///     Err(ChunkingError::UnrepresentableLength { frames: 2, expected: 1, .. })
    /// ));
    /// ```
    pub fn chunk(&self, payload: impl AsRef<[u8]>) -> Result<Vec<Chunk>, ChunkingError> {
        let payload = payload.as_ref();
        if payload.is_empty() {
            return Err(ChunkingError::Empty);
        }
        let len = payload.len();
        let declared = u8::try_from(len).map_err(|_| ChunkingError::MessageTooLarge {
            len,
            limit: MAX_MESSAGE_LEN,
        })?;

        let slice_len = self.config.frame_payload_len();
        if slice_len == 0 {
            return Err(ChunkingError::FrameTooSmall {
                max_chunk_size: self.config.max_chunk_size(),
            });
        }
        let frames = len.div_ceil(slice_len);
        let expected = self.config.expected_chunks(declared);
        let unrepresentable = ChunkingError::UnrepresentableLength {
            len,
            frames,
            expected,
        };
        if frames != expected {
            return Err(unrepresentable);
        }

        let mut chunks = Vec::with_capacity(frames);
        for (position, slice) in payload.chunks(slice_len).enumerate() {
            let index = ChunkIndex::try_from(position).map_err(|_| unrepresentable)?;
            chunks.push(Chunk::new(index, declared, slice));
        }
        Ok(chunks)
    }
}
