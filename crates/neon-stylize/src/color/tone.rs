//! Scalar tone curves applied to luminance values in `[0, 255]`.
//!
//! These are the building blocks of every preprocessing chain: BT.601
//! luminance, the classic photo-editor contrast curve, the midtone/highlight
//! power curve, and the partial photometric negative used by `invertShape`.

/// ITU-R BT.601 luma weights.
pub const LUMA_R: f32 = 0.299;
pub const LUMA_G: f32 = 0.587;
pub const LUMA_B: f32 = 0.114;

/// Perceptual brightness of an RGB triple, `0.299r + 0.587g + 0.114b`.
#[inline]
pub fn luminance(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

/// [`luminance`] for an 8-bit pixel.
#[inline]
pub fn luminance_u8(rgb: [u8; 3]) -> f32 {
    luminance(rgb[0] as f32, rgb[1] as f32, rgb[2] as f32)
}

/// Contrast stretch around mid-gray.
///
/// `factor = 259(c + 255) / (255(259 - c))`, result clamped to `[0, 255]`.
/// For `contrast` in `[-100, 100]` the denominator stays at or above
/// `255 * 159`, so the factor is always finite.
///
/// ```
/// use neon_stylize::color::apply_contrast;
///
/// assert_eq!(apply_contrast(200.0, 0.0), 200.0);
/// assert_eq!(apply_contrast(250.0, 100.0), 255.0);
/// ```
#[inline]
pub fn apply_contrast(value: f32, contrast: f32) -> f32 {
    let factor = (259.0 * (contrast + 255.0)) / (255.0 * (259.0 - contrast));
    (factor * (value - 128.0) + 128.0).clamp(0.0, 255.0)
}

/// Midtone power curve followed by the highlight blend.
///
/// The curve is symmetric around 0.5 with exponent `2 - midtones/50`:
/// midtones 50 is the identity, higher values lift the midtones toward 0.5.
/// The highlight blend is `adjusted * hf + (1 - hf)` with `hf = highlights/100`,
/// so lowering highlights pushes everything toward white.
pub fn apply_tone_adjustments(value: f32, midtones: f32, highlights: f32) -> f32 {
    let normalized = value / 255.0;
    let exponent = 2.0 - midtones / 50.0;

    let adjusted = if normalized < 0.5 {
        (2.0 * normalized).powf(exponent) / 2.0
    } else {
        1.0 - (2.0 * (1.0 - normalized)).powf(exponent) / 2.0
    };

    let hf = highlights / 100.0;
    let blended = adjusted * hf + (1.0 - hf);
    (blended.clamp(0.0, 1.0)) * 255.0
}

/// Partial photometric negative of one channel.
///
/// `amount` is a percentage: 0 leaves the channel alone, 100 yields `255 - c`.
#[inline]
pub fn invert_shape(channel: u8, amount: f32) -> u8 {
    let c = channel as f32;
    let t = amount / 100.0;
    (c + (255.0 - 2.0 * c) * t).round().clamp(0.0, 255.0) as u8
}
