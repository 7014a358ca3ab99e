//! Error type for sequence generation.

use crate::constants::OVERFLOW_INDEX;

/// Error returned by [`Generator::next`](crate::Generator::next).
///
/// Carries no heap data, so producing one never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// The next value does not fit in a `u64`. The generator is exhausted
    /// and reports this on every later call.
    #[error("fibonacci sequence overflow: F({index}) does not fit in u64")]
    Overflow {
        /// First index that could not be produced.
        index: u64,
    },
}

impl SequenceError {
    /// The overflow raised at the u64 boundary.
    #[must_use]
    pub const fn overflow() -> Self {
        Self::Overflow {
            index: OVERFLOW_INDEX,
        }
    }
}
