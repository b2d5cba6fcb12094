//! Benchmarks for the residuals crate using Criterion.
//!
//! Benchmarks cover:
//! - Squared residuals: explicit loop vs vectorized form (1K to 1M points)
//! - Arithmetic mean throughput

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rand_distr::Normal;
use residuals::prelude::*;
use std::hint::black_box;

const SIZES: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a noisy linear signal and its noise-free prediction.
fn generate_observed_predicted(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.5).unwrap();

    let predicted: Vec<f64> = (0..size).map(|i| 2.0 * i as f64 / size as f64 + 1.0).collect();
    let observed: Vec<f64> = predicted
        .iter()
        .map(|&p| p + noise_dist.sample(&mut rng))
        .collect();
    (observed, predicted)
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_squared_residuals(c: &mut Criterion) {
    let mut group = c.benchmark_group("squared_residuals");

    for &size in &SIZES {
        let (x, y) = generate_observed_predicted(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("loop", size), &size, |b, _| {
            b.iter(|| squared_residuals(black_box(&x), black_box(&y)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("vectorized", size), &size, |b, _| {
            b.iter(|| squared_residuals_vectorized(black_box(&x), black_box(&y)).unwrap())
        });
    }

    group.finish();
}

fn bench_mean(c: &mut Criterion) {
    let mut group = c.benchmark_group("mean");

    for &size in &SIZES {
        let (x, _) = generate_observed_predicted(size, 7);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| mean(black_box(&x)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_squared_residuals, bench_mean);
criterion_main!(benches);
