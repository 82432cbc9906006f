#![cfg(all(feature = "advanced-tests", loom))]
//! Concurrency tests for the reassembly session using loom.
//!
//! `loom` explores interleavings of producers and abandon calls to check that
//! a message is delivered at most once and never partially.

use loom::{
    model,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};
use uartframe::{ReassembledMessage, ReassemblySession};

fn frames() -> (Vec<u8>, Vec<u8>) {
    let mut first = vec![0, 25];
    first.extend_from_slice(&[1; 19]);
    let mut second = vec![1, 25];
    second.extend_from_slice(&[2; 6]);
    (first, second)
}

#[test]
fn racing_final_chunks_deliver_exactly_once() {
    model(|| {
        let delivered = Arc::new(AtomicUsize::new(0));
        let session = {
            let delivered = Arc::clone(&delivered);
            Arc::new(ReassemblySession::new(move |message: ReassembledMessage| {
                assert_eq!(message.len(), 25);
                delivered.fetch_add(1, Ordering::SeqCst);
            }))
        };
        let (first, second) = frames();

        let s1 = Arc::clone(&session);
        let s2 = Arc::clone(&session);
        let t1 = thread::spawn(move || s1.chunk_received(first));
        let t2 = thread::spawn(move || s2.chunk_received(second));
        t1.join().expect("first producer panicked");
        t2.join().expect("second producer panicked");

        assert_eq!(delivered.load(Ordering::SeqCst), 1);
        assert_eq!(session.pending_chunks(), 0);
    });
}

#[test]
fn abandon_racing_final_chunk_never_delivers_partial() {
    model(|| {
        let delivered = Arc::new(AtomicUsize::new(0));
        let session = {
            let delivered = Arc::clone(&delivered);
            Arc::new(ReassemblySession::new(move |message: ReassembledMessage| {
                assert_eq!(message.len(), 25, "partial message delivered");
                delivered.fetch_add(1, Ordering::SeqCst);
            }))
        };
        let (first, second) = frames();
        session.chunk_received(first);

        let producer = {
            let session = Arc::clone(&session);
            thread::spawn(move || session.chunk_received(second))
        };
        let canceller = {
            let session = Arc::clone(&session);
            thread::spawn(move || session.abandon())
        };
        producer.join().expect("producer panicked");
        canceller.join().expect("canceller panicked");

        // Either the message completed before abandon ran, or abandon cleared
        // chunk 0 first and chunk 1 was left waiting on its own.
        let outcome = (delivered.load(Ordering::SeqCst), session.pending_chunks());
        assert!(
            outcome == (1, 0) || outcome == (0, 1),
            "unexpected outcome {outcome:?}"
        );
    });
}
