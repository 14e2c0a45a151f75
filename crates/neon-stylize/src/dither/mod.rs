//! Error diffusion binarization.
//!
//! Turns a continuous [`ProcessedField`] into a foreground/background mask
//! while pushing each pixel's quantization error onto neighbours that have
//! not been visited yet.
//!
//! # Algorithms
//!
//! - **Floyd-Steinberg**: 4 neighbours, 100% propagation
//! - **Atkinson**: 6 neighbours, 75% propagation
//!
//! # Quantization
//!
//! A foreground pixel quantizes to 255, a background pixel to 0, and the
//! error is `(old - new) * error_factor`. Pixels are scanned strictly in
//! row-major order; there is no serpentine pass because the diffusion
//! direction is part of the look.
//!
//! # Example
//!
//! ```
//! use neon_stylize::dither::{Atkinson, Dither, DitherOptions};
//! use neon_stylize::{preprocess::ProcessedField, Bitmap};
//!
//! let field = ProcessedField::from_bitmap(&Bitmap::filled(2, 2, [255, 255, 255, 255]));
//! let mask = Atkinson.dither(&field, &DitherOptions::new());
//! assert!(mask.iter().all(|fg| !fg));
//! ```

mod atkinson;
mod floyd_steinberg;
mod kernel;
mod options;

pub use atkinson::Atkinson;
pub use floyd_steinberg::FloydSteinberg;
pub use kernel::{Kernel, ATKINSON, FLOYD_STEINBERG};
pub use options::{DitherOptions, ThresholdPolicy, NEAR_WHITE_CUTOFF};

use crate::preprocess::ProcessedField;

/// Quantized value of a foreground pixel.
pub const FOREGROUND_VALUE: f32 = 255.0;
/// Quantized value of a background pixel.
pub const BACKGROUND_VALUE: f32 = 0.0;

/// Trait for error diffusion algorithms.
pub trait Dither {
    /// Binarize `field`, returning one flag per pixel in row-major order
    /// (`true` = foreground).
    fn dither(&self, field: &ProcessedField, options: &DitherOptions) -> Vec<bool>;
}

/// Sliding window of error rows.
///
/// Holds only the rows the kernel can reach (`max_dy + 1`), not a full
/// image-sized buffer.
///
/// 1. Read accumulated error with `get_accumulated(x)`
/// 2. Spread error with `add_error(x, dy, error)`
/// 3. After each row call `advance_row()`
#[derive(Debug)]
pub struct ErrorBuffer {
    /// rows[0] is the current row, rows[1] the next, and so on.
    rows: Vec<Vec<f32>>,
    width: usize,
}

impl ErrorBuffer {
    pub fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth).map(|_| vec![0.0; width]).collect(),
            width,
        }
    }

    #[inline]
    pub fn get_accumulated(&self, x: usize) -> f32 {
        self.rows[0][x]
    }

    /// Add error to a future pixel. Out-of-bounds targets are ignored.
    #[inline]
    pub fn add_error(&mut self, x: usize, row_offset: usize, error: f32) {
        if x < self.width && row_offset < self.rows.len() {
            self.rows[row_offset][x] += error;
        }
    }

    /// Drop the current row and append a zeroed one.
    pub fn advance_row(&mut self) {
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill(0.0);
        }
    }
}

/// The diffusion loop shared by every kernel.
pub(crate) fn dither_with_kernel(
    field: &ProcessedField,
    kernel: &Kernel,
    options: &DitherOptions,
) -> Vec<bool> {
    let (width, height) = (field.width(), field.height());
    let mut output = vec![false; width * height];
    let mut error_buf = ErrorBuffer::new(width, kernel.max_dy + 1);
    let divisor = kernel.divisor as f32;

    for y in 0..height {
        // Rows beyond the image are never read, so clipping dy is enough
        let rows_left = height - y - 1;
        for x in 0..width {
            let value = field.get(x, y) + error_buf.get_accumulated(x);
            let foreground = options.threshold.is_foreground(value);
            output[y * width + x] = foreground;

            let quantized = if foreground {
                FOREGROUND_VALUE
            } else {
                BACKGROUND_VALUE
            };
            let error = (value - quantized) * options.error_factor;
            if error == 0.0 {
                continue;
            }

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i32 + dx;
                if nx < 0 || dy as usize > rows_left {
                    continue;
                }
                error_buf.add_error(nx as usize, dy as usize, error * weight as f32 / divisor);
            }
        }
        error_buf.advance_row();
    }

    output
}
