//! Builders for raw chunk frames.

use uartframe::Chunker;

/// Assemble a raw frame from its header fields and payload.
#[must_use]
pub fn frame(index: u8, declared_total_length: u8, payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(payload.len() + 2);
    frame.push(index);
    frame.push(declared_total_length);
    frame.extend_from_slice(payload);
    frame
}

/// Whether the default chunker accepts `payload`.
///
/// Some lengths cannot be split into 20-byte frames in a way the receiver
/// counts correctly; property strategies filter those out.
#[must_use]
pub fn is_chunkable(payload: &[u8]) -> bool { Chunker::default().chunk(payload).is_ok() }

/// Split `payload` into raw frames using the default configuration.
///
/// # Panics
///
/// Panics if the default chunker rejects `payload`; see [`is_chunkable`].
#[must_use]
pub fn frames_for(payload: &[u8]) -> Vec<Vec<u8>> {
    Chunker::default()
        .chunk(payload)
        .expect("payload must be chunkable")
        .into_iter()
        .map(|chunk| chunk.as_bytes().to_vec())
        .collect()
}
