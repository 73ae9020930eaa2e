//! Row-major dense matrix with its shape carried alongside the buffer.
//!
//! The multiply kernel itself works on flat slices plus explicit
//! dimensions (the host hands over bare `Float64Array`s). `Matrix` is the
//! typed wrapper native callers use so the shape cannot drift from the data.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{BenchError, Result};
use crate::kernels::matrix::matrix_multiply;

/// A dense `rows x cols` matrix of `f64`, stored row-major.
///
/// ## Example
///
/// ```
/// use kernel_bench::types::Matrix;
///
/// let a = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let b = Matrix::new(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
/// let c = a.multiply(&b).unwrap();
///
/// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Wrap a row-major buffer, checking it holds exactly `rows * cols` values.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        let expected = element_count(rows, cols)?;
        if data.len() != expected {
            return Err(BenchError::ShapeMismatch {
                operand: "data",
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// All-zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = element_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; len],
        })
    }

    /// Square identity matrix
    pub fn identity(size: usize) -> Result<Self> {
        let mut m = Self::zeros(size, size)?;
        for i in 0..size {
            m.data[i * size + i] = 1.0;
        }
        Ok(m)
    }

    /// Matrix filled with uniform values in `[0, 1)` from a seeded generator.
    ///
    /// Same seed = same matrix, so both execution strategies can be fed
    /// identical operands.
    pub fn seeded_random(rows: usize, cols: usize, seed: u64) -> Result<Self> {
        let len = element_count(rows, cols)?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let data = (0..len).map(|_| rng.gen::<f64>()).collect();
        Ok(Self { rows, cols, data })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at `(row, col)`, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// `self * other`. Fails with `InvalidParameter` if the inner
    /// dimensions disagree.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(BenchError::invalid(
                "rows_b",
                format!(
                    "left operand has {} columns but right operand has {} rows",
                    self.cols, other.rows
                ),
            ));
        }
        let data = matrix_multiply(&self.data, &other.data, self.rows, self.cols, other.cols)?;
        Ok(Matrix {
            rows: self.rows,
            cols: other.cols,
            data,
        })
    }
}

fn element_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .ok_or_else(|| BenchError::invalid("rows", format!("{rows} x {cols} overflows usize")))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_length() {
        assert!(Matrix::new(2, 3, vec![0.0; 6]).is_ok());
        let err = Matrix::new(2, 3, vec![0.0; 5]).unwrap_err();
        assert_eq!(
            err,
            BenchError::ShapeMismatch {
                operand: "data",
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn test_shape_overflow_rejected() {
        assert!(matches!(
            Matrix::zeros(usize::MAX, 2),
            Err(BenchError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_identity_multiply() {
        let a = Matrix::seeded_random(3, 3, 7).unwrap();
        let id = Matrix::identity(3).unwrap();
        assert_eq!(a.multiply(&id).unwrap(), a);
        assert_eq!(id.multiply(&a).unwrap(), a);
    }

    #[test]
    fn test_rectangular_multiply_shape() {
        let a = Matrix::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let b = Matrix::new(3, 1, vec![1.0, 1.0, 1.0]).unwrap();
        let c = a.multiply(&b).unwrap();
        assert_eq!(c.rows(), 2);
        assert_eq!(c.cols(), 1);
        assert_eq!(c.as_slice(), &[6.0, 15.0]);
    }

    #[test]
    fn test_inner_dimension_mismatch() {
        let a = Matrix::zeros(2, 3).unwrap();
        let b = Matrix::zeros(2, 3).unwrap();
        assert!(matches!(
            a.multiply(&b),
            Err(BenchError::InvalidParameter { name: "rows_b", .. })
        ));
    }

    #[test]
    fn test_get() {
        let m = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m.get(1, 0), Some(3.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    fn test_seeded_random_deterministic() {
        let a = Matrix::seeded_random(4, 4, 42).unwrap();
        let b = Matrix::seeded_random(4, 4, 42).unwrap();
        let c = Matrix::seeded_random(4, 4, 43).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.as_slice().iter().all(|v| (0.0..1.0).contains(v)));
    }
}
