//! Reuse of search outcomes across queries on the same [PrimeFactorSequence]

use crate::search::SearchOutcome;
use crate::sequence::PrimeFactorSequence;
use lru::LruCache;
use std::num::NonZeroUsize;
use tracing::trace;

/// A least-recently-used cache of [PrimeFactorSequence::change_to_prime] results.
///
/// Each cache is tied to one sequence and owned by one caller, so that outcomes computed
/// under different bounds are never mixed.
pub struct PathCache<'a> {
    sequence: &'a PrimeFactorSequence,
    cache: LruCache<u64, SearchOutcome>,
}

impl<'a> PathCache<'a> {
    /// Create a cache holding at most `capacity` outcomes. Zero capacity means unbounded.
    pub fn new(sequence: &'a PrimeFactorSequence, capacity: usize) -> Self {
        let cache = match NonZeroUsize::new(capacity) {
            Some(cap) => LruCache::new(cap),
            None => LruCache::unbounded(),
        };
        PathCache { sequence, cache }
    }

    #[inline]
    pub fn sequence(&self) -> &'a PrimeFactorSequence {
        self.sequence
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Return the cached outcome for n, or search it and remember it
    pub fn get(&mut self, n: u64) -> SearchOutcome {
        if let Some(outcome) = self.cache.get(&n) {
            trace!(n, "path cache hit");
            return outcome.clone();
        }

        let outcome = self.sequence.change_to_prime(n);
        self.cache.put(n, outcome.clone());
        outcome
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
