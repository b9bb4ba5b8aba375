use prime_directive::{nt_funcs, PrimeFactorSequence};

/// Calculate the (big) prime omega function Ω(n) on every integer under 100 from one sieve,
/// and compare with plain trial division.
/// Reference: <https://en.wikipedia.org/wiki/Prime_omega_function>
fn main() -> prime_directive::Result<()> {
    tracing_subscriber::fmt::init();

    let seq = PrimeFactorSequence::new(99)?;
    println!("Prime omega of numbers from 10 to 99:");
    for (i, omega) in seq.prime_factor_sequence().into_iter().enumerate().skip(10) {
        assert_eq!(omega, nt_funcs::prime_omega(i as u64));
        println!("{}: Ω={}", i, omega);
    }

    for m in 0..=6 {
        println!("Ω(n) = {}: {:?}", m, seq.numbers_with_m_prime_factors(m));
    }
    Ok(())
}
