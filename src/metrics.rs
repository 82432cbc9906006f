//! Metric helpers for `uartframe`.
//!
//! This module defines metric names and simple helper functions wrapping
//! the [`metrics`](https://docs.rs/metrics) crate. Without the `metrics`
//! feature the helpers are no-ops.

/// Name of the counter tracking frames handed to a session.
pub const CHUNKS_RECEIVED: &str = "uartframe_chunks_received_total";
/// Name of the counter tracking frames dropped for being too short.
pub const CHUNKS_DROPPED: &str = "uartframe_chunks_dropped_total";
/// Name of the counter tracking messages delivered to listeners.
pub const MESSAGES_REASSEMBLED: &str = "uartframe_messages_reassembled_total";
/// Name of the counter tracking abandon calls that discarded chunks.
pub const SESSIONS_ABANDONED: &str = "uartframe_sessions_abandoned_total";

#[cfg(feature = "metrics")]
mod imp {
    use metrics::counter;

    pub fn inc_chunks_received() { counter!(super::CHUNKS_RECEIVED).increment(1); }

    pub fn inc_chunks_dropped() { counter!(super::CHUNKS_DROPPED).increment(1); }

    pub fn inc_messages_reassembled() { counter!(super::MESSAGES_REASSEMBLED).increment(1); }

    pub fn inc_sessions_abandoned() { counter!(super::SESSIONS_ABANDONED).increment(1); }
}

#[cfg(not(feature = "metrics"))]
mod imp {
    pub fn inc_chunks_received() {}

    pub fn inc_chunks_dropped() {}

    pub fn inc_messages_reassembled() {}

    pub fn inc_sessions_abandoned() {}
}

/// Record a frame handed to a session.
pub fn inc_chunks_received() { imp::inc_chunks_received(); }

/// Record a frame dropped because it could not hold the header.
pub fn inc_chunks_dropped() { imp::inc_chunks_dropped(); }

/// Record a message delivered to a listener.
pub fn inc_messages_reassembled() { imp::inc_messages_reassembled(); }

/// Record an abandon call that discarded buffered chunks.
pub fn inc_sessions_abandoned() { imp::inc_sessions_abandoned(); }
