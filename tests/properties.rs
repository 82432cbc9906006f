//! Property tests for order-independent reassembly.

use proptest::{
    collection::vec,
    prelude::{Strategy, any, prop_assert, prop_assert_eq},
    sample::subsequence,
    test_runner::{Config as ProptestConfig, RngAlgorithm, TestRng, TestRunner},
};
use uartframe::{MAX_MESSAGE_LEN, ReassemblySession};
use uartframe_testing::{RecordingListener, frames_for, is_chunkable};

fn deterministic_runner(cases: u32) -> TestRunner {
    let config = ProptestConfig {
        cases,
        ..ProptestConfig::default()
    };
    let rng = TestRng::deterministic_rng(RngAlgorithm::ChaCha);
    TestRunner::new_with_rng(config, rng)
}

/// A message whose length the default chunker can split.
fn chunkable_payload(min_len: usize) -> impl Strategy<Value = Vec<u8>> {
    vec(any::<u8>(), min_len..=MAX_MESSAGE_LEN)
        .prop_filter("length must be chunkable", |payload| is_chunkable(payload))
}

/// A non-empty message together with a shuffled delivery order of its frames.
fn shuffled_message() -> impl Strategy<Value = (Vec<u8>, Vec<Vec<u8>>)> {
    chunkable_payload(1).prop_flat_map(|payload| {
        let frames = frames_for(&payload);
        (
            proptest::strategy::Just(payload),
            proptest::strategy::Just(frames).prop_shuffle(),
        )
    })
}

#[test]
fn any_permutation_round_trips() {
    let mut runner = deterministic_runner(256);
    runner
        .run(&shuffled_message(), |(payload, frames)| {
            let listener = RecordingListener::new();
            let session = ReassemblySession::new(listener.clone());
            for frame in frames {
                session.chunk_received(frame);
            }
            prop_assert_eq!(listener.payloads(), vec![payload]);
            prop_assert_eq!(session.pending_chunks(), 0);
            Ok(())
        })
        .expect("round trip property failed");
}

#[test]
fn strict_subsets_never_deliver() {
    let strategy = chunkable_payload(20).prop_flat_map(|payload| {
        let frames = frames_for(&payload);
        let total = frames.len();
        subsequence(frames, 0..total).prop_shuffle()
    });

    let mut runner = deterministic_runner(256);
    runner
        .run(&strategy, |frames| {
            let listener = RecordingListener::new();
            let session = ReassemblySession::new(listener.clone());
            let delivered = frames.len();
            for frame in frames {
                session.chunk_received(frame);
            }
            prop_assert_eq!(listener.count(), 0);
            prop_assert_eq!(session.pending_chunks(), delivered);
            Ok(())
        })
        .expect("partial delivery property failed");
}

#[test]
fn abandon_always_empties_the_store() {
    let strategy = (chunkable_payload(20), 0_usize..4);

    let mut runner = deterministic_runner(128);
    runner
        .run(&strategy, |(payload, repeats)| {
            let listener = RecordingListener::new();
            let session = ReassemblySession::new(listener.clone());
            let frames = frames_for(&payload);
            for frame in frames.iter().skip(1) {
                session.chunk_received(frame.clone());
            }
            for _ in 0..=repeats {
                session.abandon();
                prop_assert_eq!(session.pending_chunks(), 0);
            }
            prop_assert!(listener.payloads().is_empty());
            Ok(())
        })
        .expect("abandon property failed");
}
