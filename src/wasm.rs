//! WebAssembly export surface for a JavaScript host.
//!
//! The host creates one [`KernelBench`] (which initializes the runtime) and
//! calls its methods. Fixed-width kernels exchange typed arrays directly;
//! the sort paths take plain arrays and go through [`crate::marshal`].
//!
//! Errors surface as thrown JS exceptions. A comparator that throws is
//! rethrown unchanged, so the host sees its own exception object.

use std::cmp::Ordering;

use js_sys::{Array, Function};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::BenchError;
use crate::kernels;
use crate::marshal::{self, ElementArena, HostValue};
use crate::runtime::Runtime;
use crate::sort::{self, Comparator, Counting};
use crate::types::SortDirection;

fn to_js_error(err: BenchError) -> JsValue {
    JsError::new(&err.to_string()).into()
}

// ============================================================================
// Host value conversion
// ============================================================================

/// Read a JS value into the crate's value model.
fn host_value(value: &JsValue) -> HostValue {
    if value.is_undefined() {
        return HostValue::Undefined;
    }
    if value.is_null() {
        return HostValue::Null;
    }
    if let Some(b) = value.as_bool() {
        return HostValue::Bool(b);
    }
    if let Some(n) = value.as_f64() {
        return HostValue::Number(n);
    }
    if let Some(s) = value.as_string() {
        return HostValue::String(s);
    }
    if let Some(big) = value.dyn_ref::<js_sys::BigInt>() {
        let digits = big.to_string(10).map(String::from).unwrap_or_default();
        return match digits.parse::<i128>() {
            Ok(n) => HostValue::BigInt(n),
            Err(_) => HostValue::Object,
        };
    }
    if Array::is_array(value) {
        let array: &Array = value.unchecked_ref();
        return HostValue::Array(array.iter().map(|v| host_value(&v)).collect());
    }
    HostValue::Object
}

/// Write a crate value back out as a JS value.
fn js_value(value: &HostValue) -> JsValue {
    match value {
        HostValue::Undefined | HostValue::Object => JsValue::UNDEFINED,
        HostValue::Null => JsValue::NULL,
        HostValue::Bool(b) => JsValue::from_bool(*b),
        HostValue::Number(n) => JsValue::from_f64(*n),
        HostValue::BigInt(n) => JsValue::bigint_from_str(&n.to_string()),
        HostValue::String(s) => JsValue::from_str(s),
        HostValue::Array(items) => items.iter().map(js_value).collect::<Array>().into(),
    }
}

fn host_values(array: &Array) -> Vec<HostValue> {
    array.iter().map(|v| host_value(&v)).collect()
}

fn js_array(values: &[HostValue]) -> Array {
    values.iter().map(js_value).collect()
}

// ============================================================================
// Comparator bridge
// ============================================================================

/// Calls a host predicate once per comparison.
///
/// The result is read by [`HostValue::comparison_order`]. A thrown
/// exception aborts the sort.
struct JsComparator<'a> {
    predicate: &'a Function,
}

impl Comparator<JsValue> for JsComparator<'_> {
    type Error = JsValue;

    fn compare(&mut self, a: &JsValue, b: &JsValue) -> Result<Ordering, JsValue> {
        let result = self.predicate.call2(&JsValue::NULL, a, b)?;
        Ok(host_value(&result).comparison_order())
    }
}

// ============================================================================
// Exports
// ============================================================================

/// Entry point object held by the host.
#[wasm_bindgen]
pub struct KernelBench {
    runtime: Runtime,
    last_comparisons: u64,
}

#[wasm_bindgen]
impl KernelBench {
    #[wasm_bindgen(constructor)]
    pub fn new() -> KernelBench {
        KernelBench {
            runtime: Runtime::init(),
            last_comparisons: 0,
        }
    }

    /// Crate version
    pub fn version(&self) -> String {
        self.runtime.version().to_string()
    }

    /// Comparator calls made by the most recent `sortArray`
    #[wasm_bindgen(getter, js_name = lastComparisons)]
    pub fn last_comparisons(&self) -> f64 {
        self.last_comparisons as f64
    }

    /// Stable sort of arbitrary elements with a host comparator.
    #[wasm_bindgen(js_name = sortArray)]
    pub fn sort_array(&mut self, array: &Array, predicate: &Function) -> Result<Array, JsValue> {
        let mut arena: ElementArena<JsValue> = array.iter().collect();
        let mut comparator = Counting::new(JsComparator { predicate });

        let outcome = arena.sort_with(&mut comparator);
        self.last_comparisons = comparator.count();
        tracing::debug!(
            len = arena.len(),
            comparisons = self.last_comparisons,
            "host comparator sort"
        );
        outcome?;

        Ok(arena.into_sorted().into_iter().collect())
    }

    #[wasm_bindgen(js_name = sortNumbers)]
    pub fn sort_numbers(&self, numbers: &Array, ascending: bool) -> Result<Array, JsValue> {
        let values = marshal::to_f64_buffer(&host_values(numbers)).map_err(to_js_error)?;
        let sorted = sort::sort_numbers(values, SortDirection::from_ascending(ascending));
        Ok(js_array(&marshal::from_f64_buffer(&sorted)))
    }

    #[wasm_bindgen(js_name = sortStrings)]
    pub fn sort_strings(&self, strings: &Array, ascending: bool) -> Result<Array, JsValue> {
        let values = marshal::to_string_vec(&host_values(strings)).map_err(to_js_error)?;
        let sorted = sort::sort_strings(values, SortDirection::from_ascending(ascending));
        Ok(js_array(&marshal::from_strings(sorted)))
    }

    #[wasm_bindgen(js_name = monteCarloPi)]
    pub fn monte_carlo_pi(&self, iterations: u32) -> Result<f64, JsValue> {
        kernels::monte_carlo_pi(iterations).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = monteCarloPiSeeded)]
    pub fn monte_carlo_pi_seeded(&self, iterations: u32, seed: u64) -> Result<f64, JsValue> {
        kernels::monte_carlo_pi_seeded(iterations, seed).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = mandelbrotIterations)]
    pub fn mandelbrot_iterations(&self, c_real: f64, c_imag: f64, max_iterations: u32) -> u32 {
        kernels::mandelbrot_iterations(c_real, c_imag, max_iterations)
    }

    #[wasm_bindgen(js_name = mandelbrotSet)]
    pub fn mandelbrot_set(
        &self,
        width: u32,
        height: u32,
        max_iterations: u32,
        zoom: f64,
        center_x: f64,
        center_y: f64,
    ) -> Result<Vec<u32>, JsValue> {
        kernels::mandelbrot_set(width, height, max_iterations, zoom, center_x, center_y)
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = primeSieve)]
    pub fn prime_sieve(&self, limit: u32) -> Result<Vec<u32>, JsValue> {
        kernels::prime_sieve(limit).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = matrixMultiply)]
    pub fn matrix_multiply(
        &self,
        a: &[f64],
        b: &[f64],
        rows_a: usize,
        cols_a: usize,
        cols_b: usize,
    ) -> Result<Vec<f64>, JsValue> {
        kernels::matrix_multiply(a, b, rows_a, cols_a, cols_b).map_err(to_js_error)
    }

    /// Fibonacci terms as a `BigUint64Array`
    #[wasm_bindgen(js_name = fibonacciSequence)]
    pub fn fibonacci_sequence(&self, n: u32) -> Result<Vec<u64>, JsValue> {
        kernels::fibonacci_sequence(n).map_err(to_js_error)
    }

    /// Fibonacci terms as a plain array of bigints
    #[wasm_bindgen(js_name = fibonacciArray)]
    pub fn fibonacci_array(&self, n: u32) -> Result<Array, JsValue> {
        let terms = kernels::fibonacci_sequence(n).map_err(to_js_error)?;
        Ok(js_array(&marshal::from_u64_buffer(&terms)))
    }

    /// Sieve over a limit passed as any host number or bigint
    #[wasm_bindgen(js_name = primeSieveChecked)]
    pub fn prime_sieve_checked(&self, limit: JsValue) -> Result<Vec<u32>, JsValue> {
        let limit = marshal::to_u32(&host_value(&limit), 0).map_err(to_js_error)?;
        kernels::prime_sieve(limit).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = hashComputation)]
    pub fn hash_computation(&self, data: &str, iterations: u32) -> u32 {
        kernels::hash_computation(data, iterations)
    }
}

impl Default for KernelBench {
    fn default() -> Self {
        Self::new()
    }
}
