//! Prime factor counting and prime transformations over a bounded range of integers.
//!
//! A [PrimeFactorSequence] sieves every prime under a fixed bound once, then answers
//! - Ω(n), the number of prime factors of n counted with multiplicity,
//! - the integers with exactly m prime factors and the close neighbours among them,
//! - the shortest sequence of steps `n -> 2n + 1` and `n -> n + 1` turning n into a prime.
//!
//! ```
//! use prime_directive::{PrimeFactorSequence, SearchOutcome};
//!
//! let seq = PrimeFactorSequence::new(20).unwrap();
//! assert_eq!(seq.factor_count(12).unwrap(), 3);
//! match seq.change_to_prime(8) {
//!     SearchOutcome::Found(path) => assert_eq!(path.to_string(), "0"), // 8 -> 17
//!     SearchOutcome::Unreachable => unreachable!(),
//! }
//! ```

mod buffer;
mod cache;
mod error;
mod search;
mod sequence;
mod traits;

pub mod nt_funcs;

pub use buffer::{PrimeBufferExt, SieveBuffer};
pub use cache::PathCache;
pub use error::{Error, Result};
pub use search::{shortest_path, Path, SearchConfig, SearchOutcome, SearchStrategy, Step};
pub use sequence::{IntPair, PrimeFactorSequence};
pub use traits::PrimeBuffer;
