//! The single-channel luminance buffer renderers work on.

use crate::color::{apply_contrast, apply_tone_adjustments, luminance_u8};
use crate::output::Bitmap;

use super::posterize::posterize;

/// Float luminance per pixel, row-major.
///
/// Values start in `[0, 255]` but are not clamped afterwards: error
/// diffusion adds signed error in place and only quantization decides.
///
/// Adjustment steps consume and return `self` so that a preprocessing chain
/// reads top to bottom:
///
/// ```
/// use neon_stylize::{Bitmap, preprocess::ProcessedField};
///
/// let bitmap = Bitmap::filled(2, 2, [128, 128, 128, 255]);
/// let field = ProcessedField::from_bitmap(&bitmap)
///     .contrast(0.0)
///     .tone(50.0, 100.0)
///     .invert();
/// assert!((field.get(0, 0) - 127.0).abs() < 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedField {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl ProcessedField {
    /// BT.601 luminance of every pixel. Alpha is ignored.
    pub fn from_bitmap(bitmap: &Bitmap) -> Self {
        let values = bitmap
            .iter_pixels()
            .map(|[r, g, b, _]| luminance_u8([r, g, b]))
            .collect();
        Self {
            width: bitmap.width(),
            height: bitmap.height(),
            values,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_values(width: usize, height: usize, values: Vec<f32>) -> Self {
        assert_eq!(values.len(), width * height);
        Self {
            width,
            height,
            values,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.values[y * self.width + x]
    }

    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// One row as a slice.
    #[inline]
    pub fn row(&self, y: usize) -> &[f32] {
        &self.values[y * self.width..(y + 1) * self.width]
    }

    pub(crate) fn into_values(self) -> Vec<f32> {
        self.values
    }

    /// Apply `f` to every value.
    pub fn map(mut self, f: impl Fn(f32) -> f32) -> Self {
        for v in &mut self.values {
            *v = f(*v);
        }
        self
    }

    pub fn contrast(self, contrast: f32) -> Self {
        self.map(|v| apply_contrast(v, contrast))
    }

    pub fn tone(self, midtones: f32, highlights: f32) -> Self {
        self.map(|v| apply_tone_adjustments(v, midtones, highlights))
    }

    /// Posterize when `levels` is set; a no-op otherwise.
    pub fn posterize(self, levels: Option<u32>) -> Self {
        match levels {
            Some(levels) => self.map(|v| posterize(v, levels)),
            None => self,
        }
    }

    /// `255 - v`.
    pub fn invert(self) -> Self {
        self.map(|v| 255.0 - v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bitmap_uses_luminance() {
        let mut bitmap = Bitmap::filled(2, 1, [0, 0, 0, 255]);
        bitmap.set_pixel(1, 0, [255, 0, 0, 0]);
        let field = ProcessedField::from_bitmap(&bitmap);
        assert_eq!(field.get(0, 0), 0.0);
        assert!((field.get(1, 0) - 76.245).abs() < 1e-3);
    }

    #[test]
    fn test_invert_after_tone() {
        let field = ProcessedField::from_values(1, 1, vec![100.0]);
        let out = field.contrast(0.0).tone(50.0, 100.0).invert();
        assert!((out.get(0, 0) - 155.0).abs() < 1e-2);
    }

    #[test]
    fn test_posterize_none_is_noop() {
        let field = ProcessedField::from_values(2, 1, vec![10.0, 200.0]);
        assert_eq!(field.clone().posterize(None), field);
        let two = field.posterize(Some(2));
        assert_eq!(two.values(), &[0.0, 255.0]);
    }

    #[test]
    fn test_row_slice() {
        let field = ProcessedField::from_values(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(field.row(1), &[3.0, 4.0]);
    }
}
