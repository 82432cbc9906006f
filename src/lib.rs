#![doc(html_root_url = "https://docs.rs/uartframe/latest")]
//! Public API for the `uartframe` library.
//!
//! This crate reassembles messages sent over a UART-style byte channel that
//! is emulated on top of a small-frame link such as a Bluetooth Low Energy
//! GATT characteristic. Frames may arrive in any order; a
//! [`ReassemblySession`] stitches them back together and delivers each
//! complete message to a [`MessageListener`]. The [`Chunker`] performs the
//! reverse split for outbound requests.

pub mod chunk;
pub mod listener;
pub mod message;
pub mod metrics;
pub mod session;

pub use chunk::{
    Chunk,
    ChunkError,
    ChunkIndex,
    ChunkStore,
    Chunker,
    ChunkingError,
    HEADER_LEN,
    MAX_CHUNK_SIZE,
    MAX_MESSAGE_LEN,
    ReassemblyConfig,
};
pub use listener::{ChannelListener, MessageListener, SharedListener};
pub use message::ReassembledMessage;
pub use session::ReassemblySession;
