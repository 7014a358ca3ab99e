//! Application entry point and dispatch.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use anyhow::{anyhow, Result};
use crossbeam_channel::Sender;
use tracing::{debug, info, warn};

use fibseq_core::{Generator, SequenceError};

use crate::config::AppConfig;
use crate::errors;
use crate::report::{self, RunReport, WorkerReport};

/// Bound on in-flight messages between workers and the collector.
const CHANNEL_CAPACITY: usize = 64;

/// One message sent from a worker to the collector.
#[derive(Debug, Clone, Copy)]
enum Draw {
    Value { worker: usize, value: u64 },
    /// Sent once when the worker stops, with its overflow count.
    Finished { worker: usize, overflows: usize },
}

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "fibseq", &mut std::io::stdout());
        return Ok(fibseq_core::exit_codes::SUCCESS);
    }

    config.validate()?;
    info!(
        workers = config.workers,
        count = config.count,
        drain = config.drain,
        "starting run"
    );

    let generator = Generator::new();
    let report = draw_concurrently(&generator, config.workers, config.budget())?;

    if !report.is_valid() {
        warn!(
            fibonacci_prefix = report.fibonacci_prefix,
            ordered = report.ordered,
            "drawn values failed validation"
        );
    }
    if report.overflowed_unexpectedly() {
        warn!(
            overflows = report.overflows,
            "generator overflowed before the call budget was spent"
        );
    }

    let stdout = std::io::stdout();
    report::render(&report, config.json, config.quiet, &mut stdout.lock())?;

    Ok(errors::exit_code(&report))
}

/// Share `generator` between `workers` threads and collect what each draws.
///
/// With a budget, exactly that many calls are made in total and every call
/// past the end of the sequence is counted as an overflow. Without one,
/// each worker stops at its first overflow.
pub fn draw_concurrently(
    generator: &Generator,
    workers: usize,
    budget: Option<usize>,
) -> Result<RunReport> {
    let remaining = AtomicUsize::new(budget.unwrap_or(usize::MAX));
    let (tx, rx) = crossbeam_channel::bounded(CHANNEL_CAPACITY);
    let mut values = vec![Vec::new(); workers];
    let mut overflows = vec![0usize; workers];
    let start = Instant::now();

    crossbeam::thread::scope(|s| {
        for worker in 0..workers {
            let tx = tx.clone();
            let remaining = &remaining;
            s.spawn(move |_| run_worker(worker, generator, remaining, budget.is_none(), &tx));
        }
        drop(tx);

        for draw in &rx {
            match draw {
                Draw::Value { worker, value } => values[worker].push(value),
                Draw::Finished { worker, overflows: n } => overflows[worker] = n,
            }
        }
    })
    .map_err(|_| anyhow!("worker thread panicked"))?;

    let elapsed_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);

    let per_worker = values
        .into_iter()
        .zip(overflows)
        .enumerate()
        .map(|(worker, (values, overflows))| WorkerReport::new(worker, values, overflows))
        .collect();
    Ok(RunReport::new(budget, per_worker, elapsed_us))
}

fn run_worker(
    worker: usize,
    generator: &Generator,
    remaining: &AtomicUsize,
    stop_on_overflow: bool,
    tx: &Sender<Draw>,
) {
    debug!(worker, "worker started");
    let mut drawn = 0usize;
    let mut overflows = 0usize;
    while claim_call(remaining) {
        match generator.next() {
            Ok(value) => {
                drawn += 1;
                if tx.send(Draw::Value { worker, value }).is_err() {
                    break;
                }
            }
            Err(err @ SequenceError::Overflow { .. }) => {
                if overflows == 0 {
                    debug!(worker, %err, "generator exhausted");
                }
                overflows += 1;
                if stop_on_overflow {
                    break;
                }
            }
        }
    }
    debug!(worker, drawn, overflows, "worker finished");
    let _ = tx.send(Draw::Finished { worker, overflows });
}

/// Take one call from the shared budget.
fn claim_call(remaining: &AtomicUsize) -> bool {
    remaining
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1))
        .is_ok()
}
