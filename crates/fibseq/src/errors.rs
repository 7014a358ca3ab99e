//! Error handling and exit codes.

use fibseq_core::exit_codes;

use crate::config::ConfigError;
use crate::report::RunReport;

/// Exit code for a failed run.
pub fn handle_error(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ConfigError>().is_some() {
        exit_codes::ERROR_CONFIG
    } else {
        exit_codes::ERROR_GENERIC
    }
}

/// Exit code for a completed run.
pub fn exit_code(report: &RunReport) -> i32 {
    if !report.is_valid() {
        exit_codes::ERROR_MISMATCH
    } else if report.overflowed_unexpectedly() {
        exit_codes::ERROR_OVERFLOW
    } else {
        exit_codes::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::WorkerReport;
    use fibseq_core::FIB_TABLE;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&ConfigError::NoWorkers.into()), 4);
        assert_eq!(handle_error(&anyhow::anyhow!("boom")), 1);
    }

    #[test]
    fn report_codes() {
        let ok = RunReport::new(Some(94), vec![WorkerReport::new(0, FIB_TABLE.to_vec(), 0)], 1);
        assert_eq!(exit_code(&ok), 0);

        let overflow = RunReport::new(
            Some(96),
            vec![WorkerReport::new(0, FIB_TABLE.to_vec(), 2)],
            1,
        );
        assert_eq!(exit_code(&overflow), 5);

        let gap = RunReport::new(Some(2), vec![WorkerReport::new(0, vec![0, 2], 0)], 1);
        assert_eq!(exit_code(&gap), 3);
    }
}
