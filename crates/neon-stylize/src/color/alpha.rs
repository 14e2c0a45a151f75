//! Opacity pre-step.

use crate::output::Bitmap;

/// Scale every pixel's alpha channel by `alpha`, leaving RGB untouched.
///
/// Returns an unchanged copy when `alpha >= 1`. The input is never modified.
///
/// ```
/// use neon_stylize::{color::apply_opacity, Bitmap};
///
/// let src = Bitmap::filled(1, 1, [10, 20, 30, 200]);
/// assert_eq!(apply_opacity(&src, 0.5).pixel(0, 0), [10, 20, 30, 100]);
/// ```
pub fn apply_opacity(bitmap: &Bitmap, alpha: f32) -> Bitmap {
    let mut out = bitmap.clone();
    if alpha >= 1.0 {
        return out;
    }
    let alpha = alpha.max(0.0);
    for px in out.pixels_mut().chunks_exact_mut(4) {
        px[3] = (px[3] as f32 * alpha).round() as u8;
    }
    out
}
