use prime_directive::{PrimeFactorSequence, SearchConfig, SearchOutcome};
use std::env;

/// Print the shortest transformation of every integer under a bound into a prime, where
/// "0" stands for n -> 2n + 1 and "1" stands for n -> n + 1.
///
/// Usage: change_to_prime [bound] [max_states]
fn main() -> prime_directive::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args = env::args().skip(1);
    let bound: i64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(64);
    let mut config = SearchConfig::default();
    if let Some(limit) = args.next().and_then(|s| s.parse().ok()) {
        config = config.with_max_states(limit);
    }

    let seq = PrimeFactorSequence::new(bound)?;
    for n in 0..=seq.bound() {
        match seq.change_to_prime_with(n, &config)? {
            SearchOutcome::Found(path) => {
                let target = path.apply(n).unwrap_or(n);
                println!("{} -> {} via {:?}", n, target, path.to_string());
            }
            SearchOutcome::Unreachable => println!("{} -> unreachable", n),
        }
    }
    Ok(())
}
