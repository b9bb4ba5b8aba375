//! Implementations of the prime sieve, and the factor counting and primality
//! queries answered from it.

use crate::error::{Error, Result};
use crate::traits::PrimeBuffer;
use bitvec::bitvec;
use num_integer::Integer;
use tracing::debug;

/// Count the prime factors (with multiplicity) of target by trial division with the given primes.
///
/// The primes must be sorted and include every prime up to `target`, otherwise the count is
/// only a lower bound. 0 and 1 have no factors.
pub(crate) fn count_factors<I: Iterator<Item = u64>>(primes: I, target: u64) -> usize {
    let mut residual = target;
    let mut count = 0;
    for p in primes {
        if residual <= 1 {
            break;
        }
        if p > residual / p {
            // no factor under sqrt(residual) is left, so the residual is a prime
            count += 1;
            break;
        }
        while residual > 1 && Integer::is_multiple_of(&residual, &p) {
            residual /= p;
            count += 1;
        }
    }
    count
}

/// Extensions on a [PrimeBuffer] that only accept queries inside its domain
pub trait PrimeBufferExt: for<'a> PrimeBuffer<'a> {
    /// Fail with [Error::OutOfDomain] if the target is above the bound of the buffer
    fn check_domain(&self, target: u64) -> Result<()> {
        let bound = self.bound();
        if target > bound {
            Err(Error::OutOfDomain {
                value: target,
                bound,
            })
        } else {
            Ok(())
        }
    }

    /// Return whether target is a prime, by looking it up in the buffer
    fn is_prime(&self, target: u64) -> Result<bool> {
        self.check_domain(target)?;
        Ok(self.contains(target))
    }

    /// Return Ω(target), the number of prime factors counted with multiplicity.
    /// Both 0 and 1 are considered to have no factors.
    fn factor_count(&self, target: u64) -> Result<usize> {
        self.check_domain(target)?;
        Ok(count_factors(self.iter().cloned(), target))
    }
}

impl<T> PrimeBufferExt for T where for<'a> T: PrimeBuffer<'a> {}

/// SieveBuffer holds every prime up to a fixed bound
#[derive(Debug, Clone)]
pub struct SieveBuffer {
    list: Vec<u64>, // sorted list of all primes not larger than bound
    bound: u64,
}

impl SieveBuffer {
    /// Sieve all primes in [2, bound]. The bound has to fit in memory as a bit array of
    /// `bound / 2` bits.
    pub fn new(bound: u64) -> Self {
        let list = sieve(bound);
        debug!(bound, primes = list.len(), "built prime sieve");
        SieveBuffer { list, bound }
    }

    /// Returns all primes in the buffer. The primes are sorted.
    #[inline]
    pub fn primes(&self) -> &[u64] {
        &self.list
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<'a> PrimeBuffer<'a> for SieveBuffer {
    type PrimeIter = std::slice::Iter<'a, u64>;

    fn iter(&'a self) -> Self::PrimeIter {
        self.list.iter()
    }

    fn bound(&self) -> u64 {
        self.bound
    }

    fn contains(&self, num: u64) -> bool {
        self.list.binary_search(&num).is_ok()
    }
}

/// Sieve of Eratosthenes over the odd numbers in [3, bound], returning all primes up to bound
fn sieve(bound: u64) -> Vec<u64> {
    if bound < 2 {
        return Vec::new();
    }

    // bit i marks 2i+3 as composite
    let mut composite = bitvec![0; ((bound - 1) / 2) as usize];
    for p in (3..=num_integer::sqrt(bound)).step_by(2) {
        if composite[((p - 3) / 2) as usize] {
            continue;
        }
        for multi in (p * p..=bound).step_by(2 * (p as usize)) {
            composite.set(((multi - 3) / 2) as usize, true);
        }
    }

    let mut list = Vec::with_capacity(composite.count_zeros() + 1);
    list.push(2);
    list.extend(composite.iter_zeros().map(|x| (x as u64) * 2 + 3));
    list
}
