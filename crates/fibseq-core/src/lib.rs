//! # fibseq-core
//!
//! Lock-free Fibonacci generator that many threads can share. Every index
//! from F(0) to F(93) is handed out exactly once; past F(93) the generator
//! is exhausted and each call reports [`SequenceError::Overflow`].
//!
//! ```
//! use fibseq_core::{Generator, SequenceError};
//!
//! let generator = Generator::new();
//! let values: Vec<u64> = generator.iter().collect();
//! assert_eq!(values.len(), 94);
//! assert_eq!(values[93], fibseq_core::MAX_FIB_U64);
//! assert!(matches!(generator.next(), Err(SequenceError::Overflow { index: 94 })));
//! ```

pub mod constants;
pub mod error;
pub mod generator;
pub mod iterator;
pub mod sequence;

// Re-exports
pub use constants::{exit_codes, FIB_TABLE, MAX_FIB_INDEX, MAX_FIB_U64, SEQUENCE_LEN};
pub use error::SequenceError;
pub use generator::{Generator, GeneratorState};
pub use iterator::Iter;
