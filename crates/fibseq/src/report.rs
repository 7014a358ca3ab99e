//! Run report and its text/JSON presentation.

use std::fmt::Write as _;
use std::io::{self, Write};

use serde::Serialize;

use fibseq_core::sequence::{is_fibonacci_prefix, is_non_decreasing};
use fibseq_core::SEQUENCE_LEN;

/// What one worker drew, in the order it received the values.
#[derive(Debug, Clone, Serialize)]
pub struct WorkerReport {
    /// Worker number, starting at 0.
    pub worker: usize,
    /// Values in receive order.
    pub values: Vec<u64>,
    /// Overflow signals this worker received.
    pub overflows: usize,
    /// Whether `values` never decreases.
    pub ordered: bool,
}

impl WorkerReport {
    /// Build a report, checking the per-worker ordering.
    #[must_use]
    pub fn new(worker: usize, values: Vec<u64>, overflows: usize) -> Self {
        let ordered = is_non_decreasing(&values);
        Self {
            worker,
            values,
            overflows,
            ordered,
        }
    }
}

/// Outcome of one run against a shared generator.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Number of worker threads.
    pub workers: usize,
    /// Call budget, or `None` when draining.
    pub requested: Option<usize>,
    /// Every value drawn, sorted ascending.
    pub values: Vec<u64>,
    /// Total overflow signals across workers.
    pub overflows: usize,
    /// Whether `values` is exactly F(0)..F(len - 1).
    pub fibonacci_prefix: bool,
    /// Whether every worker saw its values in non-decreasing order.
    pub ordered: bool,
    /// Wall-clock time of the draw, in microseconds.
    pub elapsed_us: u64,
    /// Per-worker breakdown.
    pub per_worker: Vec<WorkerReport>,
}

impl RunReport {
    /// Merge per-worker results and run the partition checks.
    #[must_use]
    pub fn new(requested: Option<usize>, per_worker: Vec<WorkerReport>, elapsed_us: u64) -> Self {
        let mut values: Vec<u64> = per_worker
            .iter()
            .flat_map(|w| w.values.iter().copied())
            .collect();
        values.sort_unstable();
        let fibonacci_prefix = is_fibonacci_prefix(&values);
        let ordered = per_worker.iter().all(|w| w.ordered);
        let overflows = per_worker.iter().map(|w| w.overflows).sum();
        Self {
            workers: per_worker.len(),
            requested,
            values,
            overflows,
            fibonacci_prefix,
            ordered,
            elapsed_us,
            per_worker,
        }
    }

    /// Both the partition and the per-worker ordering hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fibonacci_prefix && self.ordered
    }

    /// Overflow occurred while the run still had calls budgeted.
    #[must_use]
    pub fn overflowed_unexpectedly(&self) -> bool {
        self.requested.is_some() && self.overflows > 0
    }
}

/// Print the report in the selected format.
pub fn render(
    report: &RunReport,
    json: bool,
    quiet: bool,
    out: &mut dyn Write,
) -> io::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)
    } else if quiet {
        for value in &report.values {
            writeln!(out, "{value}")?;
        }
        Ok(())
    } else {
        out.write_all(format_summary(report).as_bytes())
    }
}

/// Human-readable summary.
#[must_use]
pub fn format_summary(report: &RunReport) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "Workers:        {}", report.workers);
    match report.requested {
        Some(n) => {
            let _ = writeln!(s, "Calls:          {n}");
        }
        None => {
            let _ = writeln!(s, "Calls:          until exhausted");
        }
    }
    let _ = writeln!(s, "Values drawn:   {}", report.values.len());
    let _ = writeln!(s, "Overflow calls: {}", report.overflows);
    if let Some(last) = report.values.last() {
        let index = report.values.len() - 1;
        let _ = writeln!(s, "Last value:     F({index}) = {last}");
        if report.values.len() == SEQUENCE_LEN {
            let _ = writeln!(s, "                (largest Fibonacci number that fits in u64)");
        }
    }
    let per_worker: Vec<String> = report
        .per_worker
        .iter()
        .map(|w| format!("#{}: {}", w.worker, w.values.len()))
        .collect();
    let _ = writeln!(s, "Per worker:     {}", per_worker.join(", "));
    let verdict = if report.is_valid() {
        "OK (gap-free, duplicate-free, ordered per worker)"
    } else if !report.fibonacci_prefix {
        "FAILED (values are not a Fibonacci prefix)"
    } else {
        "FAILED (a worker saw values out of order)"
    };
    let _ = writeln!(s, "Validation:     {verdict}");
    let _ = writeln!(s, "Elapsed:        {} µs", report.elapsed_us);
    s
}
