//! Criterion benchmarks for the factorization strategies.
//! Fixtures cover small-factor, mixed, and large-prime-residue inputs.

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use primekit::api::{FactorEngine, PrimeOracle};

fn bench_strategies(c: &mut Criterion) {
    let engine = FactorEngine::new(Arc::new(PrimeOracle::new()));
    // Warm the prime table so growth cost stays out of the measurements.
    engine.oracle().prime_at(99);

    let fixtures: [(&str, i64); 3] = [
        ("smooth", 720_720),
        ("mixed", 600_851_475_143),
        ("semiprime", 2_147_483_671),
    ];

    let mut group = c.benchmark_group("factorize");
    for (name, value) in fixtures {
        group.bench_with_input(BenchmarkId::new("exhaustive", name), &value, |b, &v| {
            b.iter(|| engine.factorize(v).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("blended", name), &value, |b, &v| {
            b.iter(|| engine.factorize_blended(v).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("rho", name), &value, |b, &v| {
            b.iter(|| engine.factorize_rho(v).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
