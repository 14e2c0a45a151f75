//! Color math: HSV conversion, luminance, tone curves and opacity.
//!
//! All functions here are pure. Luminance values are `f32` on the
//! `[0, 255]` scale; colors are 8-bit RGB(A) arrays.

mod alpha;
mod hsv;
mod tone;

pub use alpha::apply_opacity;
pub use hsv::{hsv_to_rgb, rgb_to_hsv};
pub use tone::{
    apply_contrast, apply_tone_adjustments, invert_shape, luminance, luminance_u8, LUMA_B, LUMA_G,
    LUMA_R,
};

/// Pure white.
pub const WHITE: [u8; 3] = [255, 255, 255];
/// Pure black.
pub const BLACK: [u8; 3] = [0, 0, 0];

/// Channel-wise `255 - c`.
#[inline]
pub fn invert_rgb(rgb: [u8; 3]) -> [u8; 3] {
    [255 - rgb[0], 255 - rgb[1], 255 - rgb[2]]
}
