//! Shared helpers for the workspace integration tests.

use fibseq_core::{Generator, SequenceError};

/// Results one worker collected, in call order.
pub type WorkerResults = Vec<Result<u64, SequenceError>>;

/// Start `workers` threads that each call [`Generator::next`] `calls` times.
///
/// # Panics
/// If a worker thread panics.
pub fn race(generator: &Generator, workers: usize, calls: usize) -> Vec<WorkerResults> {
    crossbeam::thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|_| s.spawn(move |_| (0..calls).map(|_| generator.next()).collect()))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("worker panicked"))
            .collect()
    })
    .expect("scope panicked")
}
