//! A single link-layer frame carrying one slice of a message.
//!
//! Frames use a fixed two-byte header:
//!
//! ```text
//! [index: 1 byte][declared total length: 1 byte][payload: N bytes]
//! ```
//!
//! Every chunk repeats the declared length byte but only chunk 0's value is
//! consulted by the reassembler.

use bytes::{BufMut, Bytes, BytesMut};

use super::{ChunkError, ChunkIndex};

/// Maximum bytes the transport carries per frame, header included.
pub const MAX_CHUNK_SIZE: usize = 20;

/// Bytes occupied by the index and declared-length fields.
pub const HEADER_LEN: usize = 2;

/// Largest payload a single declared-length byte can describe.
pub const MAX_MESSAGE_LEN: usize = u8::MAX as usize;

const INDEX_OFFSET: usize = 0;
const DECLARED_LEN_OFFSET: usize = 1;

/// Validated chunk frame.
///
/// A `Chunk` always holds at least [`HEADER_LEN`] bytes, so header accessors
/// cannot fail. Cloning is cheap because the frame is reference counted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    frame: Bytes,
}

impl Chunk {
    /// Validate a raw frame received from the transport.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::Truncated`] when the frame is shorter than
    /// [`HEADER_LEN`].
    ///
    /// # Examples
    ///
    /// ```
    /// use uartframe::chunk::{Chunk, ChunkIndex};
    ///
    /// let chunk = Chunk::parse(vec![0, 3, b'a', b'b', b'c']).expect("valid frame");
    /// assert_eq!(chunk.index(), ChunkIndex::zero());
    /// assert_eq!(chunk.declared_total_length(), 3);
    /// assert_eq!(chunk.payload(), b"abc");
    /// assert!(Chunk::parse(vec![0]).is_err());
    /// ```
    pub fn parse(frame: impl Into<Bytes>) -> Result<Self, ChunkError> {
        let frame = frame.into();
        if frame.len() < HEADER_LEN {
            return Err(ChunkError::Truncated {
                len: frame.len(),
                needed: HEADER_LEN,
            });
        }
        Ok(Self { frame })
    }

    /// Build a frame from its header fields and payload.
    #[must_use]
    pub fn new(index: ChunkIndex, declared_total_length: u8, payload: &[u8]) -> Self {
        let mut frame = BytesMut::with_capacity(HEADER_LEN + payload.len());
        frame.put_u8(index.get());
        frame.put_u8(declared_total_length);
        frame.put_slice(payload);
        Self {
            frame: frame.freeze(),
        }
    }

    /// Position of this chunk within its message.
    #[must_use]
    pub fn index(&self) -> ChunkIndex { ChunkIndex::new(self.frame[INDEX_OFFSET]) }

    /// Payload length of the whole message, meaningful on chunk 0 only.
    #[must_use]
    pub fn declared_total_length(&self) -> u8 { self.frame[DECLARED_LEN_OFFSET] }

    /// Bytes following the header.
    #[must_use]
    pub fn payload(&self) -> &[u8] { &self.frame[HEADER_LEN..] }

    /// The complete frame, header included.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.frame }

    /// Frame length in bytes, header included.
    #[expect(
        clippy::len_without_is_empty,
        reason = "a chunk always holds its header"
    )]
    #[must_use]
    pub fn len(&self) -> usize { self.frame.len() }

    /// Consume the chunk, returning the raw frame.
    #[must_use]
    pub fn into_bytes(self) -> Bytes { self.frame }
}

impl AsRef<[u8]> for Chunk {
    fn as_ref(&self) -> &[u8] { self.as_bytes() }
}

/// Render bytes as space-separated lowercase hex.
///
/// ```
/// assert_eq!(uartframe::chunk::to_hex(&[0, 0x0a, 0xff]), "00 0a ff");
/// ```
#[must_use]
pub fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
