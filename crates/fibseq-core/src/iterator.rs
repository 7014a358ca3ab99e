//! Borrowing iterator over a shared [`Generator`].

use std::iter::FusedIterator;

use crate::constants::OVERFLOW_INDEX;
use crate::generator::{Generator, GeneratorState};

/// Lazy iterator that draws from a [`Generator`] until it overflows.
///
/// Several iterators over the same generator split the sequence between
/// them; each one sees its share in ascending order.
///
/// # Example
/// ```
/// use fibseq_core::Generator;
///
/// let generator = Generator::new();
/// let fibs: Vec<u64> = generator.iter().take(7).collect();
/// assert_eq!(fibs, [0, 1, 1, 2, 3, 5, 8]);
/// assert_eq!(generator.iter().count(), 94 - 7);
/// ```
///
/// Not `Clone`: a copy would share the cursor rather than the position.
///
/// ```compile_fail
/// let generator = fibseq_core::Generator::new();
/// let iter = generator.iter();
/// let _copy = iter.clone();
/// ```
#[derive(Debug)]
pub struct Iter<'a> {
    generator: &'a Generator,
    done: bool,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(generator: &'a Generator) -> Self {
        Self {
            generator,
            done: false,
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let value = self.generator.next().ok();
        self.done = value.is_none();
        value
    }

    /// Other borrowers may draw concurrently, so only the upper bound is known.
    #[allow(clippy::cast_possible_truncation)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.generator.state() {
            GeneratorState::Active { index } => (0, Some((OVERFLOW_INDEX - index) as usize)),
            GeneratorState::Exhausted => (0, Some(0)),
        }
    }
}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use crate::constants::FIB_TABLE;
    use crate::Generator;

    #[test]
    fn yields_whole_sequence_then_stops() {
        let generator = Generator::new();
        let vals: Vec<u64> = generator.iter().collect();
        assert_eq!(vals, FIB_TABLE);
        assert!(generator.is_exhausted());
    }

    #[test]
    fn fused_after_overflow() {
        let generator = Generator::new();
        let mut iter = generator.iter();
        for _ in 0..94 {
            assert!(iter.next().is_some());
        }
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }

    #[test]
    fn iterators_share_the_generator() {
        let generator = Generator::new();
        let a: Vec<u64> = generator.iter().take(3).collect();
        let b: Vec<u64> = (&generator).into_iter().take(3).collect();
        assert_eq!(a, [0, 1, 1]);
        assert_eq!(b, [2, 3, 5]);
    }

    #[test]
    fn size_hint_upper_bound_shrinks() {
        let generator = Generator::new();
        assert_eq!(generator.iter().size_hint(), (0, Some(94)));
        generator.next().unwrap();
        assert_eq!(generator.iter().size_hint(), (0, Some(93)));
    }
}
