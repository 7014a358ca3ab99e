//! Sequence bounds and process exit codes.

/// Largest Fibonacci index whose value fits in a `u64`.
pub const MAX_FIB_INDEX: u64 = 93;

/// First index that no longer fits in a `u64`.
pub const OVERFLOW_INDEX: u64 = MAX_FIB_INDEX + 1;

/// Number of values a single generator hands out before it is exhausted.
#[allow(clippy::cast_possible_truncation)]
pub const SEQUENCE_LEN: usize = OVERFLOW_INDEX as usize;

/// F(93), the last value a generator returns.
pub const MAX_FIB_U64: u64 = 12_200_160_415_121_876_738;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// Reference data for validation; the generator itself never reads it.
/// F(94) = 19,740,274,219,868,223,167 is larger than `u64::MAX`
/// (18,446,744,073,709,551,615).
pub const FIB_TABLE: [u64; SEQUENCE_LEN] = {
    let mut table = [0u64; SEQUENCE_LEN];
    table[1] = 1;
    let mut i = 2;
    while i < SEQUENCE_LEN {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Exit codes for the `fibseq` binary.
pub mod exit_codes {
    /// Successful run.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Drawn values did not form a Fibonacci prefix, or a worker saw values out of order.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// The generator overflowed while the run still expected values.
    pub const ERROR_OVERFLOW: i32 = 5;
}
