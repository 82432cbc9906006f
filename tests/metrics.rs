#![cfg(all(feature = "metrics", not(loom)))]
//! Tests for `uartframe` metrics.
//!
//! These tests verify that counters update as expected using
//! `metrics_util::debugging::DebuggingRecorder`.

use metrics_util::debugging::{DebugValue, DebuggingRecorder, Snapshotter};
use rstest::rstest;
use uartframe::{
    ReassemblySession,
    metrics::{CHUNKS_DROPPED, CHUNKS_RECEIVED, MESSAGES_REASSEMBLED, SESSIONS_ABANDONED},
};
use uartframe_testing::{RecordingListener, frame, frames_for};

/// Creates a debugging recorder and snapshotter for metrics testing.
fn debugging_recorder_setup() -> (Snapshotter, DebuggingRecorder) {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    (snapshotter, recorder)
}

fn counter_value(snapshotter: &Snapshotter, name: &str) -> u64 {
    snapshotter
        .snapshot()
        .into_vec()
        .into_iter()
        .find_map(|(key, _, _, value)| match value {
            DebugValue::Counter(count) if key.key().name() == name => Some(count),
            _ => None,
        })
        .unwrap_or(0)
}

#[test]
fn completed_message_records_chunks_and_delivery() {
    let (snapshotter, recorder) = debugging_recorder_setup();
    metrics::with_local_recorder(&recorder, || {
        let session = ReassemblySession::new(RecordingListener::new());
        for frame in frames_for(&[1; 30]) {
            session.chunk_received(frame);
        }
    });

    let snapshot: Vec<_> = snapshotter.snapshot().into_vec();
    let found = |name: &str, expected: u64| {
        snapshot.iter().any(|(k, _, _, v)| {
            k.key().name() == name && matches!(v, DebugValue::Counter(c) if *c == expected)
        })
    };
    assert!(found(CHUNKS_RECEIVED, 2), "chunk counter not recorded");
    assert!(found(MESSAGES_REASSEMBLED, 1), "delivery counter not recorded");
}

#[rstest]
#[case::empty(vec![])]
#[case::one_byte(vec![7])]
fn truncated_frame_increments_drop_counter(#[case] bad: Vec<u8>) {
    let (snapshotter, recorder) = debugging_recorder_setup();
    metrics::with_local_recorder(&recorder, || {
        let session = ReassemblySession::new(RecordingListener::new());
        session.chunk_received(bad);
    });
    assert_eq!(counter_value(&snapshotter, CHUNKS_DROPPED), 1);
}

#[test]
fn abandon_counts_only_when_chunks_are_discarded() {
    let (snapshotter, recorder) = debugging_recorder_setup();
    metrics::with_local_recorder(&recorder, || {
        let session = ReassemblySession::new(RecordingListener::new());
        session.abandon();
        session.chunk_received(frame(1, 40, &[0; 19]));
        session.abandon();
        session.abandon();
    });
    assert_eq!(counter_value(&snapshotter, SESSIONS_ABANDONED), 1);
}
