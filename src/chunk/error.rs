//! Error types emitted while parsing or producing chunks.
//!
//! The inbound path never surfaces these to transport callers: a
//! [`ChunkError`] only tells the session that a frame must be dropped.

use thiserror::Error;

/// Errors produced by [`Chunk::parse`](crate::chunk::Chunk::parse).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ChunkError {
    /// The frame cannot hold the two-byte chunk header.
    #[error("chunk frame truncated: {len} byte(s), header needs {needed}")]
    Truncated { len: usize, needed: usize },
}

/// Errors produced while splitting an outbound message into chunks.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ChunkingError {
    /// A zero-length message declares zero chunks and can never complete.
    #[error("cannot chunk an empty message")]
    Empty,
    /// The declared length byte cannot describe a message this large.
    #[error("message of {len} bytes exceeds the {limit} byte limit")]
    MessageTooLarge { len: usize, limit: usize },
    /// Frames of this size leave no room for payload after the header.
    #[error("{max_chunk_size}-byte frames leave no room for payload")]
    FrameTooSmall { max_chunk_size: usize },
    /// Splitting into full frames yields a different chunk count than the
    /// receiver derives from the declared length, so the message would
    /// never complete.
    #[error("message of {len} bytes needs {frames} frame(s) but the receiver expects {expected}")]
    UnrepresentableLength {
        len: usize,
        frames: usize,
        expected: usize,
    },
}
