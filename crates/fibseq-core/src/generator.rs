//! Shared Fibonacci generator.
//!
//! A [`Generator`] hands out F(0), F(1), ..., F(93) exactly once each, no
//! matter how many threads call [`Generator::next`] at the same time. State
//! is advanced with an optimistic compare-and-swap on a single coordination
//! word; callers that lose the race spin and retry, nobody ever parks.

use std::hint;
use std::sync::atomic::{fence, AtomicU64, Ordering};

use crate::error::SequenceError;
use crate::iterator::Iter;

/// Low bit of the generation: a commit is publishing the next pair.
const WRITING: u64 = 1;

/// Terminal generation. Even step counts never reach it.
const EXHAUSTED: u64 = u64::MAX;

/// Observable position of a [`Generator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorState {
    /// The next successful call returns F(`index`).
    Active {
        /// Index of the next value handed out, in `0..=93`.
        index: u64,
    },
    /// Every further call fails with [`SequenceError::Overflow`].
    Exhausted,
}

/// Concurrency-safe cursor over the Fibonacci sequence.
///
/// Holds the pending pair `(F(i-1), F(i))` and a generation word that
/// encodes the committed step count (`i << 1`), an in-flight commit flag and the
/// exhausted sentinel. The initial pair is `(F(-1), F(0)) = (1, 0)`.
///
/// # Example
/// ```
/// use fibseq_core::Generator;
///
/// let generator = Generator::new();
/// let first: Vec<u64> = (0..7).map(|_| generator.next().unwrap()).collect();
/// assert_eq!(first, [0, 1, 1, 2, 3, 5, 8]);
/// ```
#[derive(Debug)]
pub struct Generator {
    previous: AtomicU64,
    current: AtomicU64,
    generation: AtomicU64,
}

const _: () = assert!(std::mem::size_of::<Generator>() <= 3 * std::mem::size_of::<u64>());

impl Generator {
    /// Create a generator whose first call returns F(0).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            previous: AtomicU64::new(1),
            current: AtomicU64::new(0),
            generation: AtomicU64::new(0),
        }
    }

    /// Hand out the next Fibonacci number.
    ///
    /// Each successful call, across all threads, returns a distinct index;
    /// together they form a gap-free prefix of the sequence. The call that
    /// returns F(93) exhausts the generator, after which every call returns
    /// [`SequenceError::Overflow`]. Never allocates.
    pub fn next(&self) -> Result<u64, SequenceError> {
        loop {
            let generation = self.generation.load(Ordering::Acquire);
            if generation == EXHAUSTED {
                return Err(SequenceError::overflow());
            }
            if generation & WRITING != 0 {
                hint::spin_loop();
                continue;
            }

            let previous = self.previous.load(Ordering::Relaxed);
            let current = self.current.load(Ordering::Relaxed);
            // A pair written by a later commit makes the claim below fail.
            fence(Ordering::Acquire);

            match previous.checked_add(current) {
                Some(successor) => {
                    if self
                        .generation
                        .compare_exchange_weak(
                            generation,
                            generation | WRITING,
                            Ordering::Acquire,
                            Ordering::Relaxed,
                        )
                        .is_ok()
                    {
                        fence(Ordering::Release);
                        self.previous.store(current, Ordering::Relaxed);
                        self.current.store(successor, Ordering::Relaxed);
                        self.generation.store(generation + 2, Ordering::Release);
                        return Ok(current);
                    }
                }
                // F(94) does not fit: this call hands out F(93) and closes the sequence.
                None => {
                    if self
                        .generation
                        .compare_exchange_weak(
                            generation,
                            EXHAUSTED,
                            Ordering::Acquire,
                            Ordering::Relaxed,
                        )
                        .is_ok()
                    {
                        return Ok(current);
                    }
                }
            }

            hint::spin_loop();
        }
    }

    /// Current position. A commit in flight reports the index it is handing out.
    #[must_use]
    pub fn state(&self) -> GeneratorState {
        match self.generation.load(Ordering::Acquire) {
            EXHAUSTED => GeneratorState::Exhausted,
            generation => GeneratorState::Active {
                index: generation >> 1,
            },
        }
    }

    /// Whether every further call fails with overflow.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.state() == GeneratorState::Exhausted
    }

    /// Iterate over the values this generator still has to hand out.
    ///
    /// Iterators borrowed from the same generator share its sequence.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Generator {
    type Item = u64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
