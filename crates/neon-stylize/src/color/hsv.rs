//! HSV ↔ RGB conversion.
//!
//! Hue is in degrees `[0, 360)`, saturation and value in percent `[0, 100]`.
//! RGB channels are 8-bit. `hsv_to_rgb` rounds to the nearest integer, so a
//! round trip through RGB is stable to within one unit per channel.

/// Convert an HSV triple to 8-bit RGB.
///
/// Uses the classic six-sector formulation. A hue of exactly 360 wraps
/// to sector 0, identical to a hue of 0.
///
/// # Example
///
/// ```
/// use neon_stylize::color::hsv_to_rgb;
///
/// assert_eq!(hsv_to_rgb(0.0, 100.0, 100.0), [255, 0, 0]);
/// assert_eq!(hsv_to_rgb(300.0, 100.0, 100.0), [255, 0, 255]);
/// ```
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [u8; 3] {
    let s = s / 100.0;
    let v = v / 100.0;
    let sector = (h / 60.0).floor();
    let f = h / 60.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    [to_byte(r), to_byte(g), to_byte(b)]
}

/// Convert 8-bit RGB to HSV.
///
/// Achromatic inputs report a hue of 0. The result is not rounded.
///
/// # Example
///
/// ```
/// use neon_stylize::color::rgb_to_hsv;
///
/// let (h, s, v) = rgb_to_hsv(0, 255, 0);
/// assert_eq!((h, s, v), (120.0, 100.0, 100.0));
/// ```
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };

    (h, s * 100.0, max * 100.0)
}

#[inline]
fn to_byte(unit: f32) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}
