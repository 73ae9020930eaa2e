//! Benchmarks for the compute kernels and sort paths.
//!
//! ## Groups
//!
//! | Group | What it measures |
//! |-------|------------------|
//! | `kernels` | each kernel at its front-end default size |
//! | `sort` | comparator-driven sort vs. numeric fast path |
//! | `arena` | handle sort over opaque elements |
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific group
//! cargo bench -- sort
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main,
    BatchSize, BenchmarkId, Criterion, Throughput,
};
use std::time::Duration;

use kernel_bench::kernels::{
    fibonacci_sequence, hash_computation, mandelbrot_set, matrix_multiply, monte_carlo_pi,
    prime_sieve,
};
use kernel_bench::sort::{sort_by, sort_numbers, sort_strings, BySign, Natural};
use kernel_bench::{ElementArena, Matrix, SortDirection};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// HELPER FUNCTIONS - Deterministic input generation
// ============================================================================

fn random_numbers(count: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(-1e6..1e6)).collect()
}

fn random_words(count: usize, seed: u64) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(3..12);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

// ============================================================================
// BENCHMARK: Kernels
// ============================================================================

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernels");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    group.bench_function("monte_carlo_pi_1m", |b| {
        b.iter(|| monte_carlo_pi(black_box(1_000_000)))
    });

    group.bench_function("mandelbrot_800x600", |b| {
        b.iter(|| mandelbrot_set(black_box(800), black_box(600), 100, 1.0, -0.5, 0.0))
    });

    group.bench_function("prime_sieve_1m", |b| {
        b.iter(|| prime_sieve(black_box(1_000_000)))
    });

    let a = Matrix::seeded_random(200, 200, 1).unwrap();
    let m = Matrix::seeded_random(200, 200, 2).unwrap();
    group.bench_function("matrix_multiply_200", |b| {
        b.iter(|| matrix_multiply(black_box(a.as_slice()), black_box(m.as_slice()), 200, 200, 200))
    });

    group.bench_function("fibonacci_90", |b| {
        b.iter(|| fibonacci_sequence(black_box(90)))
    });

    group.bench_function("hash_100k", |b| {
        b.iter(|| hash_computation(black_box("Hello, WebAssembly!"), black_box(100_000)))
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Sort paths
// ============================================================================
// The comparator path pays one call per comparison; the fast path none.

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(50);

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        let numbers = random_numbers(size, 42);

        group.bench_with_input(BenchmarkId::new("comparator", size), &numbers, |b, input| {
            b.iter_batched(
                || input.clone(),
                |values| sort_by(values, &mut BySign(|x: &f64, y: &f64| x - y)),
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("fast_numbers", size), &numbers, |b, input| {
            b.iter_batched(
                || input.clone(),
                |values| sort_numbers(values, SortDirection::Ascending),
                BatchSize::LargeInput,
            );
        });

        let words = random_words(size, 42);
        group.bench_with_input(BenchmarkId::new("fast_strings", size), &words, |b, input| {
            b.iter_batched(
                || input.clone(),
                |values| sort_strings(values, SortDirection::Ascending),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Arena
// ============================================================================

fn bench_arena(c: &mut Criterion) {
    let mut group = c.benchmark_group("arena");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("sort_10k_words_by_handle", |b| {
        let words = random_words(10_000, 7);
        b.iter_batched(
            || words.iter().cloned().collect::<ElementArena<String>>(),
            |mut arena| {
                let _ = arena.sort_with(&mut Natural::new());
                black_box(arena.into_sorted())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(benches, bench_kernels, bench_sort, bench_arena);

criterion_main!(benches);
