//! Per-kernel parameter records and the suite configuration.
//!
//! ## Overview
//!
//! Each kernel takes a small plain-value record. The records have no
//! lifecycle beyond one invocation: they are validated, consumed, dropped.
//! Defaults mirror the values the comparison front end starts with.
//!
//! ## Validation
//!
//! `validate()` rejects values that would make the kernel's arithmetic
//! meaningless (zero trial counts, zero zoom, shapes that overflow `usize`).
//! Kernels call it before touching any data, so a bad record never
//! produces a partial result.
//!
//! ## Example
//!
//! ```
//! use kernel_bench::types::SuiteConfig;
//!
//! let config = SuiteConfig::from_json(r#"{ "sieve": { "limit": 100 } }"#).unwrap();
//! assert_eq!(config.sieve.limit, 100);
//! // Unspecified kernels keep their defaults
//! assert_eq!(config.monte_carlo.iterations, 1_000_000);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, Result};

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 12345;

/// Largest Fibonacci sequence length whose every term fits in `u64`.
///
/// F(93) = 12_200_160_415_121_876_738 is the last representable term, so a
/// sequence F(0)..=F(93) has 94 entries.
pub const MAX_FIBONACCI_LENGTH: u32 = 94;

// ============================================================================
// Monte Carlo
// ============================================================================

/// Monte Carlo π estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloParams {
    /// Number of random trials
    pub iterations: u32,
    /// Seed for the uniform generator
    pub seed: u64,
}

impl Default for MonteCarloParams {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            seed: DEFAULT_SEED,
        }
    }
}

impl MonteCarloParams {
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(BenchError::invalid(
                "iterations",
                "must be greater than zero (estimate divides by the trial count)",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Mandelbrot
// ============================================================================

/// Mandelbrot escape-iteration field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MandelbrotParams {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub zoom: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl Default for MandelbrotParams {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            max_iterations: 100,
            zoom: 1.0,
            center_x: -0.5,
            center_y: 0.0,
        }
    }
}

impl MandelbrotParams {
    pub fn validate(&self) -> Result<()> {
        if !self.zoom.is_finite() || self.zoom == 0.0 {
            return Err(BenchError::invalid(
                "zoom",
                format!("must be finite and non-zero, got {}", self.zoom),
            ));
        }
        if !self.center_x.is_finite() {
            return Err(BenchError::invalid("center_x", "must be finite"));
        }
        if !self.center_y.is_finite() {
            return Err(BenchError::invalid("center_y", "must be finite"));
        }
        self.pixel_count()?;
        Ok(())
    }

    /// `width * height`, checked against the platform's `usize`
    pub fn pixel_count(&self) -> Result<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or_else(|| {
                BenchError::invalid(
                    "width",
                    format!("{} x {} pixels overflows usize", self.width, self.height),
                )
            })
    }
}

// ============================================================================
// Prime sieve
// ============================================================================

/// Sieve of Eratosthenes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SieveParams {
    /// Inclusive upper bound
    pub limit: u32,
}

impl Default for SieveParams {
    fn default() -> Self {
        Self { limit: 1_000_000 }
    }
}

impl SieveParams {
    pub fn validate(&self) -> Result<()> {
        // The flag table has limit + 1 slots; on 32-bit targets u32::MAX + 1
        // does not fit in usize.
        (self.limit as usize).checked_add(1).ok_or_else(|| {
            BenchError::invalid("limit", format!("{} + 1 overflows usize", self.limit))
        })?;
        Ok(())
    }
}

// ============================================================================
// Matrix multiply
// ============================================================================

/// Square matrix multiply with seeded random operands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixParams {
    /// Rows and columns of both operands
    pub size: usize,
    pub seed: u64,
}

impl Default for MatrixParams {
    fn default() -> Self {
        Self {
            size: 200,
            seed: DEFAULT_SEED,
        }
    }
}

impl MatrixParams {
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(BenchError::invalid("size", "must be greater than zero"));
        }
        self.size.checked_mul(self.size).ok_or_else(|| {
            BenchError::invalid("size", format!("{0} x {0} overflows usize", self.size))
        })?;
        Ok(())
    }
}

// ============================================================================
// Fibonacci
// ============================================================================

/// Linear Fibonacci sequence generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FibonacciParams {
    /// Number of terms to produce
    pub length: u32,
}

impl Default for FibonacciParams {
    fn default() -> Self {
        Self { length: 90 }
    }
}

impl FibonacciParams {
    /// Sequence lengths past [`MAX_FIBONACCI_LENGTH`] are an overflow, not
    /// an invalid parameter; the generator reports them itself.
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

// ============================================================================
// Hash
// ============================================================================

/// Iterated mixing hash
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashParams {
    pub data: String,
    pub iterations: u32,
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            data: "Hello, WebAssembly!".to_string(),
            iterations: 100_000,
        }
    }
}

impl HashParams {
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

// ============================================================================
// Suite configuration
// ============================================================================

/// Parameters for a full run of the kernel catalogue.
///
/// Every section is optional in the JSON form; missing sections and fields
/// fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    pub monte_carlo: MonteCarloParams,
    pub mandelbrot: MandelbrotParams,
    pub sieve: SieveParams,
    pub matrix: MatrixParams,
    pub fibonacci: FibonacciParams,
    pub hash: HashParams,
    /// Element count for the sort workloads
    pub sort_length: usize,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            monte_carlo: MonteCarloParams::default(),
            mandelbrot: MandelbrotParams::default(),
            sieve: SieveParams::default(),
            matrix: MatrixParams::default(),
            fibonacci: FibonacciParams::default(),
            hash: HashParams::default(),
            sort_length: 10_000,
        }
    }
}

impl SuiteConfig {
    /// Parse and validate a JSON document
    pub fn from_json(text: &str) -> Result<Self> {
        let config: SuiteConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| BenchError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.monte_carlo.validate()?;
        self.mandelbrot.validate()?;
        self.sieve.validate()?;
        self.matrix.validate()?;
        self.fibonacci.validate()?;
        self.hash.validate()?;
        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
