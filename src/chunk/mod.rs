//! Wire-level primitives for the chunked UART transport.
//!
//! A GATT characteristic can only carry a handful of bytes per write or
//! notification, so a UART-style byte stream is emulated by splitting each
//! application message into small indexed chunks. This module collects the
//! chunk types, the ordered store used while a message is in flight, and the
//! outbound [`Chunker`] that produces frames the reassembler accepts.

pub mod chunker;
pub mod config;
pub mod error;
pub mod frame;
pub mod index;
pub mod store;

pub use chunker::Chunker;
pub use config::ReassemblyConfig;
pub use error::{ChunkError, ChunkingError};
pub use frame::{Chunk, HEADER_LEN, MAX_CHUNK_SIZE, MAX_MESSAGE_LEN, to_hex};
pub use index::ChunkIndex;
pub use store::ChunkStore;

#[cfg(test)]
mod tests;
