//! Checks over values drawn from a generator.

/// Whether `values` is exactly F(0), F(1), ..., F(len - 1).
///
/// The slice must already be sorted. An empty slice is not a prefix.
///
/// # Example
/// ```
/// use fibseq_core::sequence::is_fibonacci_prefix;
///
/// assert!(is_fibonacci_prefix(&[0, 1, 1, 2, 3]));
/// assert!(!is_fibonacci_prefix(&[0, 1, 2, 3]));
/// assert!(!is_fibonacci_prefix(&[]));
/// ```
#[must_use]
pub fn is_fibonacci_prefix(values: &[u64]) -> bool {
    match values {
        [] => false,
        [first] => *first == 0,
        [first, second, ..] => {
            *first == 0
                && *second == 1
                && values
                    .windows(3)
                    .all(|w| w[0].checked_add(w[1]) == Some(w[2]))
        }
    }
}

/// Whether `values` never decreases. Ties are allowed since F(1) = F(2).
#[must_use]
pub fn is_non_decreasing(values: &[u64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
