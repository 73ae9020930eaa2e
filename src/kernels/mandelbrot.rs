//! Mandelbrot escape-iteration field.
//!
//! Pixel `(x, y)` maps to the complex point
//!
//! ```text
//! c = ((x - W/2) / (W/4) / zoom + center_x) + i((y - H/2) / (H/4) / zoom + center_y)
//! ```
//!
//! and records how many steps of `z <- z^2 + c` (from `z = 0`) stay within
//! `|z|^2 <= 4`, capped at `max_iterations`.

use crate::error::Result;
use crate::kernels::{reject, Kernel};
use crate::types::{KernelKind, KernelOutput, MandelbrotParams};

/// Escape iteration count for a single point `c = c_real + i*c_imag`.
///
/// Returns a value in `0..=max_iterations`; points in the set reach the cap.
///
/// ```
/// use kernel_bench::kernels::mandelbrot_iterations;
///
/// assert_eq!(mandelbrot_iterations(0.0, 0.0, 50), 50);
/// assert_eq!(mandelbrot_iterations(2.0, 2.0, 50), 1);
/// ```
#[inline]
pub fn mandelbrot_iterations(c_real: f64, c_imag: f64, max_iterations: u32) -> u32 {
    let mut z_real = 0.0;
    let mut z_imag = 0.0;
    let mut iteration = 0;

    while z_real * z_real + z_imag * z_imag <= 4.0 && iteration < max_iterations {
        let temp = z_real * z_real - z_imag * z_imag + c_real;
        z_imag = 2.0 * z_real * z_imag + c_imag;
        z_real = temp;
        iteration += 1;
    }

    iteration
}

/// Compute the `width * height` field of escape counts, row-major.
///
/// # Errors
///
/// `InvalidParameter` if `zoom` is zero or not finite, a center coordinate
/// is not finite, or the pixel count overflows `usize`.
///
/// # Example
///
/// ```
/// use kernel_bench::kernels::mandelbrot_set;
///
/// let field = mandelbrot_set(16, 8, 30, 1.0, -0.5, 0.0).unwrap();
/// assert_eq!(field.len(), 16 * 8);
/// assert!(field.iter().all(|&n| n <= 30));
/// ```
pub fn mandelbrot_set(
    width: u32,
    height: u32,
    max_iterations: u32,
    zoom: f64,
    center_x: f64,
    center_y: f64,
) -> Result<Vec<u32>> {
    MandelbrotParams {
        width,
        height,
        max_iterations,
        zoom,
        center_x,
        center_y,
    }
    .field()
}

impl MandelbrotParams {
    /// Compute the escape-count field this record describes.
    pub fn field(&self) -> Result<Vec<u32>> {
        self.validate()
            .map_err(|e| reject(KernelKind::Mandelbrot, e))?;
        let pixels = self.pixel_count()?;
        tracing::debug!(
            width = self.width,
            height = self.height,
            max_iterations = self.max_iterations,
            zoom = self.zoom,
            "mandelbrot field"
        );

        let w = self.width as f64;
        let h = self.height as f64;
        let mut result = Vec::with_capacity(pixels);

        for y in 0..self.height {
            let c_imag = (y as f64 - h / 2.0) / (h / 4.0) / self.zoom + self.center_y;
            for x in 0..self.width {
                let c_real = (x as f64 - w / 2.0) / (w / 4.0) / self.zoom + self.center_x;
                result.push(mandelbrot_iterations(c_real, c_imag, self.max_iterations));
            }
        }

        Ok(result)
    }
}

impl Kernel for MandelbrotParams {
    const KIND: KernelKind = KernelKind::Mandelbrot;

    fn run(&self) -> Result<KernelOutput> {
        self.field().map(KernelOutput::Counts)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
