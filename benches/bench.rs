#[macro_use]
extern crate criterion;
use criterion::Criterion;
use prime_directive::{PrimeFactorSequence, SearchConfig, SieveBuffer};

pub fn bench_sieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve");

    group.bench_function("1e6", |b| b.iter(|| SieveBuffer::new(1_000_000).len()));
    group.bench_function("factor sequence 1e5", |b| {
        let seq = PrimeFactorSequence::new(100_000).unwrap();
        b.iter(|| seq.prime_factor_sequence().len())
    });

    group.finish();
}

pub fn bench_change_to_prime(c: &mut Criterion) {
    const N: u64 = 100_000;
    const STEP: usize = 997;
    let seq = PrimeFactorSequence::new(N).unwrap();
    let mut group = c.benchmark_group("change_to_prime");

    group.bench_function("breadth first", |b| {
        let config = SearchConfig::default();
        b.iter(|| {
            (0..N)
                .step_by(STEP)
                .filter(|&n| seq.change_to_prime_with(n, &config).unwrap().is_found())
                .count()
        })
    });
    group.bench_function("memoized", |b| {
        let config = SearchConfig::memoized();
        b.iter(|| {
            (0..N)
                .step_by(STEP)
                .filter(|&n| seq.change_to_prime_with(n, &config).unwrap().is_found())
                .count()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_sieve, bench_change_to_prime);
criterion_main!(benches);
