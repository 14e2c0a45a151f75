//! Spatial operations and luminance-field construction.
//!
//! Every renderer starts by turning the source [`Bitmap`] into a
//! [`ProcessedField`]. The building blocks live here:
//!
//! - **Blur**: full-window or separable box blur on RGB ([`box_blur`],
//!   [`box_blur_separable`])
//! - **Invert shape**: partial photometric negative on RGB
//!   ([`invert_shape_bitmap`])
//! - **Resampling**: area-average, nearest-neighbour, row reduction and
//!   centered zoom ([`resize_area`], [`resize_nearest`], [`reduce_rows`],
//!   [`crop_zoom`])
//! - **Posterization**: level quantization of luminance ([`posterize`])
//! - **Edges**: forward-difference gradient magnitude ([`edge_mask`])
//!
//! # Processing Order
//!
//! Blur and invert-shape operate on the color image, before luminance is
//! taken. Contrast, tone, posterization and inversion operate on the field.
//! Each renderer documents its own chain; the diffusion and edge styles share
//! [`diffusion_field`].

mod blur;
mod edge;
mod field;
mod posterize;
mod resize;

pub use blur::{blur_radius, box_blur, box_blur_separable};
pub use edge::{edge_mask, edge_threshold, gradient_magnitude};
pub use field::ProcessedField;
pub use posterize::{posterize, posterize_levels};
pub use resize::{crop_zoom, reduce_rows, resize_area, resize_nearest, scaled_dimensions};

use crate::api::StyleSettings;
use crate::color::invert_shape;
use crate::output::Bitmap;

/// Apply [`invert_shape`] to the RGB channels of every pixel.
///
/// `amount` is a percentage; 0 returns a copy.
pub fn invert_shape_bitmap(bitmap: &Bitmap, amount: f32) -> Bitmap {
    let mut out = bitmap.clone();
    if amount <= 0.0 {
        return out;
    }
    for px in out.pixels_mut().chunks_exact_mut(4) {
        for c in &mut px[..3] {
            *c = invert_shape(*c, amount);
        }
    }
    out
}

/// Preprocessing shared by the error-diffusion and edge styles:
///
/// 1. full-window box blur, radius `ceil(blur)`
/// 2. invert shape
/// 3. luminance
/// 4. contrast
/// 5. tone adjustments, skipped when the luminance threshold is 0
/// 6. `255 - v` when `invert` is set
pub fn diffusion_field(bitmap: &Bitmap, settings: &StyleSettings) -> ProcessedField {
    let blurred = box_blur(bitmap, blur_radius(settings.blur));
    let shaped = invert_shape_bitmap(&blurred, settings.invert_shape);

    let mut field = ProcessedField::from_bitmap(&shaped).contrast(settings.contrast);
    if settings.luminance_threshold != 0.0 {
        field = field.tone(settings.midtones, settings.highlights);
    }
    if settings.invert {
        field = field.invert();
    }
    field
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{defaults_for, Style};

    #[test]
    fn test_invert_shape_bitmap_keeps_alpha() {
        let src = Bitmap::filled(1, 1, [0, 100, 255, 42]);
        let out = invert_shape_bitmap(&src, 100.0);
        assert_eq!(out.pixel(0, 0), [255, 155, 0, 42]);
        assert_eq!(invert_shape_bitmap(&src, 0.0), src);
    }

    #[test]
    fn test_diffusion_field_white_stays_white() {
        let settings = defaults_for(Style::FloydSteinberg);
        let field = diffusion_field(&Bitmap::filled(2, 2, [255, 255, 255, 255]), &settings);
        for v in field.values() {
            assert!((v - 255.0).abs() < 1e-2, "got {v}");
        }
    }

    #[test]
    fn test_diffusion_field_invert() {
        let mut settings = defaults_for(Style::FloydSteinberg);
        settings.invert = true;
        let field = diffusion_field(&Bitmap::filled(1, 1, [255, 255, 255, 255]), &settings);
        assert!(field.get(0, 0).abs() < 1e-2);
    }

    #[test]
    fn test_diffusion_field_skips_tone_at_threshold_zero() {
        let mut settings = defaults_for(Style::Atkinson);
        settings.luminance_threshold = 0.0;
        let field = diffusion_field(&Bitmap::filled(1, 1, [64, 64, 64, 255]), &settings);
        // contrast 0 and no tone: raw luminance
        assert!((field.get(0, 0) - 64.0).abs() < 1e-2);

        settings.luminance_threshold = 50.0;
        let toned = diffusion_field(&Bitmap::filled(1, 1, [64, 64, 64, 255]), &settings);
        assert!(toned.get(0, 0) > 64.5);
    }
}
