use crate::buffer::{count_factors, PrimeBufferExt, SieveBuffer};
use crate::error::{Error, Result};
use crate::search::{shortest_path, SearchConfig, SearchOutcome};
use crate::traits::PrimeBuffer;
use num_traits::PrimInt;
use std::convert::TryFrom;
use std::fmt;

/// Two neighbours in a sequence of integers, the larger one first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntPair {
    pub larger: u64,
    pub smaller: u64,
}

impl IntPair {
    #[inline]
    pub fn gap(&self) -> u64 {
        self.larger - self.smaller
    }
}

impl fmt::Display for IntPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.larger, self.smaller)
    }
}

/// Prime factor statistics and prime transformations for all integers in `[0, bound]`.
///
/// The primes under the bound are sieved once on construction and shared by every query.
#[derive(Debug, Clone)]
pub struct PrimeFactorSequence {
    buffer: SieveBuffer,
}

impl PrimeFactorSequence {
    /// Create an instance covering `[0, bound]`. Negative bounds, and bounds that cannot
    /// be indexed in memory, are rejected before anything is sieved.
    pub fn new<T: PrimInt + fmt::Display>(bound: T) -> Result<Self> {
        if bound < T::zero() {
            return Err(Error::InvalidBound(format!("{} is negative", bound)));
        }
        let value = match bound.to_u64() {
            Some(v) if usize::try_from(v).map_or(false, |v| v < usize::MAX) => v,
            _ => {
                return Err(Error::InvalidBound(format!(
                    "{} exceeds the addressable range",
                    bound
                )))
            }
        };

        Ok(PrimeFactorSequence {
            buffer: SieveBuffer::new(value),
        })
    }

    #[inline]
    pub fn bound(&self) -> u64 {
        self.buffer.bound()
    }

    /// All primes not larger than the bound, sorted
    #[inline]
    pub fn primes(&self) -> &[u64] {
        self.buffer.primes()
    }

    #[inline]
    pub fn buffer(&self) -> &SieveBuffer {
        &self.buffer
    }

    /// Ω(n) for n in the domain, see [PrimeBufferExt::factor_count]
    pub fn factor_count(&self, n: u64) -> Result<usize> {
        self.buffer.factor_count(n)
    }

    /// Primality of n in the domain, see [PrimeBufferExt::is_prime]
    pub fn is_prime(&self, n: u64) -> Result<bool> {
        self.buffer.is_prime(n)
    }

    /// Return the sequence L[0..=bound] where L[i] = Ω(i)
    pub fn prime_factor_sequence(&self) -> Vec<usize> {
        (0..=self.bound())
            .map(|i| count_factors(self.primes().iter().cloned(), i))
            .collect()
    }

    /// Return all integers i in `[0, bound]` with Ω(i) = m, in ascending order.
    /// With m = 0 these are 0 and 1.
    pub fn numbers_with_m_prime_factors(&self, m: usize) -> Vec<u64> {
        (0..=self.bound())
            .filter(|&i| count_factors(self.primes().iter().cloned(), i) == m)
            .collect()
    }

    /// Return the adjacent entries of [numbers_with_m_prime_factors(m)](Self::numbers_with_m_prime_factors)
    /// whose difference is at most gap, in ascending order.
    pub fn numbers_with_m_prime_factors_and_small_gap(&self, m: usize, gap: u64) -> Vec<IntPair> {
        self.numbers_with_m_prime_factors(m)
            .windows(2)
            .filter(|w| w[1] - w[0] <= gap)
            .map(|w| IntPair {
                larger: w[1],
                smaller: w[0],
            })
            .collect()
    }

    /// Find the shortest sequence of 0-steps (n -> 2n + 1) and 1-steps (n -> n + 1) that
    /// transforms n into a prime with every value staying in the domain. Equal length
    /// candidates are decided in favor of the 0-step.
    pub fn change_to_prime(&self, n: u64) -> SearchOutcome {
        match shortest_path(&self.buffer, n, &SearchConfig::default()) {
            Ok(outcome) => outcome,
            Err(e) => unreachable!("search without state limit failed: {}", e),
        }
    }

    /// Same as [change_to_prime()](Self::change_to_prime) with a custom search configuration
    pub fn change_to_prime_with(&self, n: u64, config: &SearchConfig) -> Result<SearchOutcome> {
        shortest_path(&self.buffer, n, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nt_funcs::prime_omega;
    use crate::search::Path;

    #[test]
    fn construction_test() {
        assert!(matches!(
            PrimeFactorSequence::new(-1),
            Err(Error::InvalidBound(_))
        ));
        assert!(matches!(
            PrimeFactorSequence::new(i64::MIN),
            Err(Error::InvalidBound(_))
        ));
        assert!(matches!(
            PrimeFactorSequence::new(u64::MAX),
            Err(Error::InvalidBound(_))
        ));
        match PrimeFactorSequence::new(u128::MAX) {
            Err(Error::InvalidBound(msg)) => assert!(msg.contains("exceeds"), "{}", msg),
            _ => panic!("u128::MAX should be rejected"),
        }
        match PrimeFactorSequence::new(-7i16) {
            Err(Error::InvalidBound(msg)) => assert!(msg.contains("negative"), "{}", msg),
            _ => panic!("negative bounds should be rejected"),
        }

        let seq = PrimeFactorSequence::new(0).unwrap();
        assert!(seq.primes().is_empty());
        assert_eq!(seq.prime_factor_sequence(), [0]);
        let seq = PrimeFactorSequence::new(1u8).unwrap();
        assert!(seq.primes().is_empty());
        assert_eq!(seq.bound(), 1);

        let seq = PrimeFactorSequence::new(30i32).unwrap();
        assert_eq!(seq.primes(), [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn prime_factor_sequence_test() {
        let seq = PrimeFactorSequence::new(12).unwrap();
        assert_eq!(
            seq.prime_factor_sequence(),
            [0, 0, 1, 1, 2, 1, 2, 1, 3, 2, 2, 1, 3]
        );

        let seq = PrimeFactorSequence::new(1000).unwrap();
        let omegas = seq.prime_factor_sequence();
        assert_eq!(omegas.len(), 1001);
        for (i, &omega) in omegas.iter().enumerate() {
            assert_eq!(omega, prime_omega(i as u64), "factor count of {}", i);
            assert_eq!(seq.factor_count(i as u64), Ok(omega));
        }
        assert_eq!(
            seq.factor_count(1001),
            Err(Error::OutOfDomain {
                value: 1001,
                bound: 1000
            })
        );
        assert!(seq.is_prime(1001).is_err());
        assert_eq!(seq.is_prime(997), Ok(true));
    }

    #[test]
    fn m_prime_factors_test() {
        let seq = PrimeFactorSequence::new(30).unwrap();
        assert_eq!(seq.numbers_with_m_prime_factors(0), [0, 1]);
        assert_eq!(seq.numbers_with_m_prime_factors(1), seq.primes());
        assert_eq!(
            seq.numbers_with_m_prime_factors(2),
            [4, 6, 9, 10, 14, 15, 21, 22, 25, 26]
        );
        assert_eq!(seq.numbers_with_m_prime_factors(4), [16, 24]);
        assert!(seq.numbers_with_m_prime_factors(5).is_empty());

        let seq = PrimeFactorSequence::new(0).unwrap();
        assert_eq!(seq.numbers_with_m_prime_factors(0), [0]);
    }

    #[test]
    fn small_gap_test() {
        let seq = PrimeFactorSequence::new(30).unwrap();
        let pairs = seq.numbers_with_m_prime_factors_and_small_gap(2, 1);
        let expected: Vec<IntPair> = [(10, 9), (15, 14), (22, 21), (26, 25)]
            .iter()
            .map(|&(larger, smaller)| IntPair { larger, smaller })
            .collect();
        assert_eq!(pairs, expected);
        assert!(pairs.iter().all(|p| p.gap() == 1));
        assert_eq!(pairs[0].to_string(), "(10, 9)");

        // twin primes
        let twins = seq.numbers_with_m_prime_factors_and_small_gap(1, 2);
        assert_eq!(twins.len(), 5); // (3, 2) (5, 3) (7, 5) (13, 11) (19, 17)
        assert_eq!(twins[0], IntPair { larger: 3, smaller: 2 });
        assert_eq!(twins[4], IntPair { larger: 19, smaller: 17 });

        assert_eq!(
            seq.numbers_with_m_prime_factors_and_small_gap(4, 100),
            [IntPair { larger: 24, smaller: 16 }]
        );
        assert!(seq.numbers_with_m_prime_factors_and_small_gap(3, 0).is_empty());
    }

    #[test]
    fn change_to_prime_test() {
        let seq = PrimeFactorSequence::new(20).unwrap();
        assert_eq!(seq.change_to_prime(7), SearchOutcome::Found(Path::new()));
        assert_eq!(
            seq.change_to_prime(8).path().map(|p| p.to_string()),
            Some("0".to_string())
        );
        assert_eq!(seq.change_to_prime(21), SearchOutcome::Unreachable);

        let seq = PrimeFactorSequence::new(10).unwrap();
        assert_eq!(seq.change_to_prime(8), SearchOutcome::Unreachable);
        assert_eq!(
            seq.change_to_prime_with(8, &SearchConfig::memoized()),
            Ok(SearchOutcome::Unreachable)
        );

        let seq = PrimeFactorSequence::new(3).unwrap();
        assert_eq!(seq.change_to_prime(4), SearchOutcome::Unreachable);
    }
}
