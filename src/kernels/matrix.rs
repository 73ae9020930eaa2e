//! Dense matrix multiplication.
//!
//! C\[i,j\] = sum_k A\[i,k\] * B\[k,j\], all operands row-major.
//!
//! The loop order is i, j, k with a scalar accumulator per output cell.
//! That fixes the order of the floating-point additions, so the result
//! matches a straightforward scripted implementation bit for bit.

use crate::error::{BenchError, Result};
use crate::kernels::{reject, Kernel};
use crate::types::{KernelKind, KernelOutput, Matrix, MatrixParams};

/// Multiply `a` (`rows_a x cols_a`) by `b` (`cols_a x cols_b`).
///
/// Returns the `rows_a x cols_b` product, flattened row-major.
///
/// # Errors
///
/// - `ShapeMismatch` if `a.len() != rows_a * cols_a` or
///   `b.len() != cols_a * cols_b`
/// - `InvalidParameter` if a shape product overflows `usize`
///
/// # Example
///
/// ```
/// use kernel_bench::kernels::matrix_multiply;
///
/// let c = matrix_multiply(&[1.0, 2.0, 3.0, 4.0], &[5.0, 6.0, 7.0, 8.0], 2, 2, 2).unwrap();
/// assert_eq!(c, vec![19.0, 22.0, 43.0, 50.0]);
/// ```
pub fn matrix_multiply(
    a: &[f64],
    b: &[f64],
    rows_a: usize,
    cols_a: usize,
    cols_b: usize,
) -> Result<Vec<f64>> {
    check_shapes(a, b, rows_a, cols_a, cols_b)
        .map_err(|e| reject(KernelKind::MatrixMultiply, e))?;
    tracing::debug!(rows_a, cols_a, cols_b, "matrix multiply");

    let mut result = vec![0.0; rows_a * cols_b];

    for i in 0..rows_a {
        let row = &a[i * cols_a..(i + 1) * cols_a];
        for j in 0..cols_b {
            let mut sum = 0.0;
            for (k, &a_ik) in row.iter().enumerate() {
                sum += a_ik * b[k * cols_b + j];
            }
            result[i * cols_b + j] = sum;
        }
    }

    Ok(result)
}

fn check_shapes(a: &[f64], b: &[f64], rows_a: usize, cols_a: usize, cols_b: usize) -> Result<()> {
    let expected_a = rows_a.checked_mul(cols_a).ok_or_else(|| {
        BenchError::invalid("rows_a", format!("{rows_a} x {cols_a} overflows usize"))
    })?;
    let expected_b = cols_a.checked_mul(cols_b).ok_or_else(|| {
        BenchError::invalid("cols_b", format!("{cols_a} x {cols_b} overflows usize"))
    })?;
    rows_a.checked_mul(cols_b).ok_or_else(|| {
        BenchError::invalid("cols_b", format!("{rows_a} x {cols_b} overflows usize"))
    })?;

    if a.len() != expected_a {
        return Err(BenchError::ShapeMismatch {
            operand: "a",
            expected: expected_a,
            actual: a.len(),
        });
    }
    if b.len() != expected_b {
        return Err(BenchError::ShapeMismatch {
            operand: "b",
            expected: expected_b,
            actual: b.len(),
        });
    }
    Ok(())
}

impl Kernel for MatrixParams {
    const KIND: KernelKind = KernelKind::MatrixMultiply;

    /// Multiply two seeded random `size x size` matrices.
    fn run(&self) -> Result<KernelOutput> {
        self.validate()
            .map_err(|e| reject(KernelKind::MatrixMultiply, e))?;
        let a = Matrix::seeded_random(self.size, self.size, self.seed)?;
        let b = Matrix::seeded_random(self.size, self.size, self.seed.wrapping_add(1))?;
        Ok(KernelOutput::Matrix(a.multiply(&b)?.into_vec()))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_by_two() {
        let c = matrix_multiply(&[1.0, 2.0, 3.0, 4.0], &[5.0, 6.0, 7.0, 8.0], 2, 2, 2).unwrap();
        assert_eq!(c, vec![19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_rectangular() {
        // (1x3) * (3x2)
        let c = matrix_multiply(&[1.0, 2.0, 3.0], &[1.0, 0.0, 0.0, 1.0, 1.0, 1.0], 1, 3, 2).unwrap();
        assert_eq!(c, vec![4.0, 5.0]);
    }

    #[test]
    fn test_result_length() {
        let a = vec![1.0; 3 * 4];
        let b = vec![1.0; 4 * 5];
        let c = matrix_multiply(&a, &b, 3, 4, 5).unwrap();
        assert_eq!(c.len(), 15);
        assert!(c.iter().all(|&v| v == 4.0));
    }

    #[test]
    fn test_zero_inner_dimension() {
        let c = matrix_multiply(&[], &[], 2, 0, 3).unwrap();
        assert_eq!(c, vec![0.0; 6]);
    }

    #[test]
    fn test_shape_mismatch_a() {
        let err = matrix_multiply(&[1.0, 2.0, 3.0], &[1.0; 4], 2, 2, 2).unwrap_err();
        assert_eq!(
            err,
            BenchError::ShapeMismatch {
                operand: "a",
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_shape_mismatch_b() {
        let err = matrix_multiply(&[1.0; 4], &[1.0; 5], 2, 2, 2).unwrap_err();
        assert!(matches!(err, BenchError::ShapeMismatch { operand: "b", .. }));
    }

    #[test]
    fn test_overflowing_shape() {
        let err = matrix_multiply(&[], &[], usize::MAX, 2, 1).unwrap_err();
        assert!(matches!(err, BenchError::InvalidParameter { .. }));
    }

    #[test]
    fn test_kernel_trait() {
        let params = MatrixParams { size: 8, seed: 11 };
        let output = params.run().unwrap();
        assert_eq!(output.len(), 64);
        assert_eq!(output, params.run().unwrap());
    }
}
