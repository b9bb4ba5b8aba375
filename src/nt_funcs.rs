//! Standalone number theoretic functions that can be used without a prime sieve

use crate::buffer::SieveBuffer;
use num_integer::Integer;

/// Return all primes not larger than limit, in ascending order.
pub fn primes(limit: u64) -> Vec<u64> {
    SieveBuffer::new(limit).primes().to_vec()
}

/// Primality test by trial division with odd divisors. Only suitable for small inputs,
/// prefer a [SieveBuffer] when many queries are made under the same bound.
pub fn is_prime_trial(target: u64) -> bool {
    if target < 2 {
        return false;
    }
    if Integer::is_even(&target) {
        return target == 2;
    }
    let mut d = 3;
    while d <= target / d {
        if Integer::is_multiple_of(&target, &d) {
            return false;
        }
        d += 2;
    }
    true
}

/// Calculate the (big) prime omega function Ω(n) on the target by trial division,
/// with Ω(0) = Ω(1) = 0.
/// Reference: <https://en.wikipedia.org/wiki/Prime_omega_function>
pub fn prime_omega(target: u64) -> usize {
    if target < 2 {
        return 0;
    }

    let mut residual = target;
    let mut count = 0;
    let mut d = 2;
    while d <= residual / d {
        while Integer::is_multiple_of(&residual, &d) {
            residual /= d;
            count += 1;
        }
        d += if d == 2 { 1 } else { 2 };
    }
    if residual > 1 {
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_prime_trial_test() {
        let small: Vec<u64> = (0..30).filter(|&x| is_prime_trial(x)).collect();
        assert_eq!(small, [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(is_prime_trial(1_000_000_007));
        assert!(!is_prime_trial(1_000_000_007 * 3));
        assert!(!is_prime_trial(49));
    }

    #[test]
    fn prime_omega_test() {
        // OEIS A001222
        let omega30: [usize; 30] = [
            0, 1, 1, 2, 1, 2, 1, 3, 2, 2, 1, 3, 1, 2, 2, 4, 1, 3, 1, 3, 2, 2, 1, 4, 2, 2, 3, 3, 1, 3,
        ];
        for i in 0..30 {
            assert_eq!(prime_omega(i as u64 + 1), omega30[i], "omega of {}", i + 1);
        }
        assert_eq!(prime_omega(0), 0);
        assert_eq!(prime_omega(1 << 40), 40);
        assert_eq!(prime_omega(123456789), 4); // 3^2 * 3607 * 3803
    }

    #[test]
    fn primes_test() {
        assert!(primes(1).is_empty());
        assert_eq!(primes(20), [2, 3, 5, 7, 11, 13, 17, 19]);
        assert_eq!(primes(10000).len(), 1229);
    }
}
