use prime_directive::PrimeFactorSequence;

/// Find neighbouring integers under 10000 that share the same number of prime factors and
/// are at most 2 apart, e.g. twin primes for Ω(n) = 1.
fn main() -> prime_directive::Result<()> {
    tracing_subscriber::fmt::init();

    let seq = PrimeFactorSequence::new(10_000)?;
    for m in 1..=4 {
        let pairs = seq.numbers_with_m_prime_factors_and_small_gap(m, 2);
        let head: Vec<String> = pairs.iter().take(8).map(|p| p.to_string()).collect();
        println!("Ω(n) = {}: {} pairs, first {}", m, pairs.len(), head.join(" "));
    }
    Ok(())
}
