//! Utilities for exercising a
//! [`ReassemblySession`](uartframe::ReassemblySession) in tests.
//!
//! The helpers build wire frames, record delivered messages, and serialise
//! access to the global log capture.
//!
//! ```rust
//! use uartframe::ReassemblySession;
//! use uartframe_testing::{RecordingListener, frames_for};
//!
//! let listener = RecordingListener::new();
//! let session = ReassemblySession::new(listener.clone());
//! for frame in frames_for(b"hello").into_iter().rev() {
//!     session.chunk_received(frame);
//! }
//! assert_eq!(listener.payloads(), vec![b"hello".to_vec()]);
//! ```

pub mod frames;
pub mod listener;
pub mod logging;

pub use frames::{frame, frames_for, is_chunkable};
pub use listener::RecordingListener;
pub use logging::{LoggerHandle, logger};
