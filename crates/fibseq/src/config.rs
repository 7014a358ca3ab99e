//! Application configuration from CLI flags and environment.

use clap::Parser;

/// fibseq — draw the Fibonacci sequence from one generator shared by many threads.
#[derive(Parser, Debug)]
#[command(name = "fibseq", version, about)]
pub struct AppConfig {
    /// Number of worker threads sharing the generator.
    #[arg(short, long, default_value = "4", env = "FIBSEQ_WORKERS")]
    pub workers: usize,

    /// Total number of calls across all workers. Above 94 the generator overflows.
    #[arg(short = 'n', long, default_value = "94", env = "FIBSEQ_COUNT")]
    pub count: usize,

    /// Keep calling until the generator is exhausted (ignores --count).
    #[arg(long)]
    pub drain: bool,

    /// Print the run report as JSON.
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Quiet mode (only the drawn values, one per line).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Reject settings no run can satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        if !self.drain && self.count == 0 {
            return Err(ConfigError::NoCalls);
        }
        Ok(())
    }

    /// Call budget for the run; `None` means draw until exhausted.
    #[must_use]
    pub fn budget(&self) -> Option<usize> {
        (!self.drain).then_some(self.count)
    }
}

/// Invalid command-line settings.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `--workers 0`.
    #[error("at least one worker is required")]
    NoWorkers,

    /// `--count 0` without `--drain`.
    #[error("count must be at least 1 unless --drain is given")]
    NoCalls,
}
