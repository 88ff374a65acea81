//! Criterion benchmarks for prng_distributions samplers.
//!
//! Compares the per-sample cost of each distribution and of Binomial as the
//! trial count grows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use prng_core::{MizuchiRandom, SharedGenerator};
use prng_distributions::{Beta, Binomial, Distribution, Kumaraswamy};

const BATCH: u64 = 1024;

/// Benchmark single samples of each distribution.
fn bench_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    group.throughput(Throughput::Elements(BATCH));

    let mut distributions: Vec<(&str, Box<dyn Distribution>)> = vec![
        (
            "binomial_0.5_1",
            Box::new(Binomial::new(MizuchiRandom::with_seed(1), 0.5, 1).unwrap()),
        ),
        (
            "beta_2_2.5",
            Box::new(Beta::new(MizuchiRandom::with_seed(1), 2.0, 2.5).unwrap()),
        ),
        (
            "beta_0.3_0.3",
            Box::new(Beta::new(MizuchiRandom::with_seed(1), 0.3, 0.3).unwrap()),
        ),
        (
            "kumaraswamy_2_2.5",
            Box::new(Kumaraswamy::new(MizuchiRandom::with_seed(1), 2.0, 2.5).unwrap()),
        ),
    ];

    for (name, distribution) in distributions.iter_mut() {
        group.bench_function(*name, |b| {
            b.iter(|| {
                for _ in 0..BATCH {
                    black_box(distribution.sample());
                }
            });
        });
    }

    group.finish();
}

/// Benchmark Binomial sampling cost against the number of trials.
fn bench_binomial_trials(c: &mut Criterion) {
    let mut group = c.benchmark_group("binomial_trials");

    for trials in [1u32, 10, 100, 1000] {
        let mut d = Binomial::new(MizuchiRandom::with_seed(2), 0.3, trials).unwrap();
        group.throughput(Throughput::Elements(u64::from(trials)));
        group.bench_with_input(BenchmarkId::from_parameter(trials), &trials, |b, _| {
            b.iter(|| black_box(d.next_u32()));
        });
    }

    group.finish();
}

/// Benchmark owned versus shared generators under the same distribution.
fn bench_generator_ownership(c: &mut Criterion) {
    let mut group = c.benchmark_group("ownership");
    group.throughput(Throughput::Elements(BATCH));

    let mut owned = Kumaraswamy::new(MizuchiRandom::with_seed(3), 2.0, 2.5).unwrap();
    group.bench_function("owned", |b| {
        b.iter(|| {
            for _ in 0..BATCH {
                black_box(owned.sample());
            }
        });
    });

    let shared = SharedGenerator::new(MizuchiRandom::with_seed(3));
    let mut via_handle = Kumaraswamy::new(shared, 2.0, 2.5).unwrap();
    group.bench_function("shared", |b| {
        b.iter(|| {
            for _ in 0..BATCH {
                black_box(via_handle.sample());
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_samples,
    bench_binomial_trials,
    bench_generator_ownership
);
criterion_main!(benches);
