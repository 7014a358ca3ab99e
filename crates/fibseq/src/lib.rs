//! fibseq library — drives a shared Fibonacci generator from worker threads.

pub mod app;
pub mod config;
pub mod errors;
pub mod report;
