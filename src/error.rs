//! Error types shared by the sieve, the factor counter and the transformation search

use thiserror::Error;

/// Result type for fallible operations in this crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The upper bound is negative or too large to index a sieve
    #[error("invalid upper bound: {0}")]
    InvalidBound(String),

    /// A factor count or primality query above the configured bound
    #[error("value {value} is outside the domain [0, {bound}]")]
    OutOfDomain { value: u64, bound: u64 },

    /// The search expanded more states than allowed by its configuration
    #[error("search budget of {limit} states exhausted")]
    SearchBudgetExhausted { limit: usize },

    /// A path string contained something other than '0' or '1'
    #[error("invalid step symbol {0:?}, expected '0' or '1'")]
    InvalidSymbol(char),
}
