//! Kernel Bench - Binary Entry Point
//!
//! Runs every kernel once with the parameters from an optional JSON suite
//! configuration, then compares the comparator-driven sort against the
//! numeric fast path. One receipt line is printed per run.
//!
//! ```bash
//! cargo run --release -- suite.json
//! RUST_LOG=kernel_bench=debug cargo run --release
//! ```

use std::process::ExitCode;
use std::time::Instant;

use kernel_bench::sort::{sort_by, sort_numbers, BySign, Counting};
use kernel_bench::{Kernel, KernelKind, Result, RunReceipt, Runtime, SortDirection, Strategy, SuiteConfig};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "suite failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let runtime = Runtime::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!(%path, "loading suite configuration");
            SuiteConfig::load(path)?
        }
        None => SuiteConfig::default(),
    };

    println!("===========================================");
    println!("  Kernel Bench {}", runtime.version());
    println!("===========================================");
    println!();
    println!("{:<18} {:>10} {:>12}  {}", "Kernel", "Values", "Time (μs)", "Fingerprint");
    println!("{:-<18} {:-<10} {:-<12}  {:-<16}", "", "", "", "");

    report(&timed(&config.monte_carlo)?);
    report(&timed(&config.mandelbrot)?);
    report(&timed(&config.sieve)?);
    report(&timed(&config.matrix)?);
    report(&timed(&config.fibonacci)?);
    report(&timed(&config.hash)?);

    println!();
    sort_comparison(config.sort_length);

    Ok(())
}

/// Run one kernel and time it.
fn timed<K: Kernel>(params: &K) -> Result<RunReceipt> {
    let start = Instant::now();
    let output = params.run()?;
    let elapsed = start.elapsed();

    Ok(RunReceipt::with_computed_fingerprint(
        K::KIND,
        Strategy::Native,
        &output,
        elapsed,
    ))
}

fn report(receipt: &RunReceipt) {
    tracing::info!(
        kernel = %receipt.kernel,
        micros = receipt.elapsed_micros,
        "kernel finished"
    );
    println!(
        "{:<18} {:>10} {:>12}  {}",
        receipt.kernel.name(),
        receipt.output_len,
        receipt.elapsed_micros,
        &receipt.fingerprint_hex()[..16]
    );
}

/// Sort the same random numbers through a comparator and through the fast
/// path, and report the cost of crossing into the comparator.
fn sort_comparison(len: usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let values: Vec<f64> = (0..len).map(|_| rng.gen_range(-1e6..1e6)).collect();

    let mut comparator = Counting::new(BySign(|a: &f64, b: &f64| a - b));
    let start = Instant::now();
    let by_comparator = match sort_by(values.clone(), &mut comparator) {
        Ok(sorted) => sorted,
        Err(never) => match never {},
    };
    let comparator_receipt = sort_receipt(&by_comparator, start);

    let start = Instant::now();
    let by_fast_path = sort_numbers(values, SortDirection::Ascending);
    let fast_receipt = sort_receipt(&by_fast_path, start);

    println!("Sort of {len} numbers");
    println!("  comparator:  {:>10} μs, {} comparisons", comparator_receipt.elapsed_micros, comparator.count());
    println!("  fast path:   {:>10} μs", fast_receipt.elapsed_micros);
    match fast_receipt.speedup_over(&comparator_receipt) {
        Some(speedup) => println!("  speedup:     {speedup:>10.2}x"),
        None => println!("  speedup:     too fast to measure"),
    }
    println!(
        "  outputs agree: {}",
        if fast_receipt.matches(&comparator_receipt) { "YES ✓" } else { "NO ✗" }
    );
}

fn sort_receipt(sorted: &[f64], start: Instant) -> RunReceipt {
    let elapsed = start.elapsed();
    let bytes: Vec<u8> = sorted.iter().flat_map(|v| v.to_le_bytes()).collect();
    RunReceipt::new(
        KernelKind::Sort,
        Strategy::Native,
        sorted.len() as u64,
        u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        RunReceipt::compute_hash(&bytes),
    )
}
