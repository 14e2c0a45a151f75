//! Box blur on the RGB channels of a bitmap.
//!
//! Two variants are provided because the styles use different ones: the
//! dithering and edge styles average a full `(2r+1)²` window, while
//! stippling and ASCII use the cheaper separable horizontal-then-vertical
//! pass. Both average only in-bounds neighbours, so edges are not darkened.
//! Alpha is carried through unchanged.

use crate::output::Bitmap;

/// Blur radius for a slider value: `ceil(blur)`, 0 disables.
#[inline]
pub fn blur_radius(blur: f32) -> usize {
    if blur > 0.0 {
        blur.ceil() as usize
    } else {
        0
    }
}

/// Full-window box blur.
pub fn box_blur(bitmap: &Bitmap, radius: usize) -> Bitmap {
    if radius == 0 {
        return bitmap.clone();
    }
    let (w, h) = (bitmap.width(), bitmap.height());
    let src = bitmap.pixels();
    let mut out = bitmap.clone();
    let dst = out.pixels_mut();

    for y in 0..h {
        let y0 = y.saturating_sub(radius);
        let y1 = (y + radius).min(h - 1);
        for x in 0..w {
            let x0 = x.saturating_sub(radius);
            let x1 = (x + radius).min(w - 1);
            let mut sum = [0u32; 3];
            let mut count = 0u32;
            for sy in y0..=y1 {
                for sx in x0..=x1 {
                    let i = (sy * w + sx) * 4;
                    sum[0] += src[i] as u32;
                    sum[1] += src[i + 1] as u32;
                    sum[2] += src[i + 2] as u32;
                    count += 1;
                }
            }
            let i = (y * w + x) * 4;
            for c in 0..3 {
                dst[i + c] = mean(sum[c], count);
            }
        }
    }
    out
}

/// Separable box blur: horizontal pass, then vertical pass on its result.
pub fn box_blur_separable(bitmap: &Bitmap, radius: usize) -> Bitmap {
    if radius == 0 {
        return bitmap.clone();
    }
    let horizontal = blur_pass(bitmap, radius, true);
    blur_pass(&horizontal, radius, false)
}

fn blur_pass(bitmap: &Bitmap, radius: usize, horizontal: bool) -> Bitmap {
    let (w, h) = (bitmap.width(), bitmap.height());
    let src = bitmap.pixels();
    let mut out = bitmap.clone();
    let dst = out.pixels_mut();

    for y in 0..h {
        for x in 0..w {
            let (lo, hi) = if horizontal {
                (x.saturating_sub(radius), (x + radius).min(w - 1))
            } else {
                (y.saturating_sub(radius), (y + radius).min(h - 1))
            };
            let mut sum = [0u32; 3];
            for k in lo..=hi {
                let i = if horizontal {
                    (y * w + k) * 4
                } else {
                    (k * w + x) * 4
                };
                sum[0] += src[i] as u32;
                sum[1] += src[i + 1] as u32;
                sum[2] += src[i + 2] as u32;
            }
            let count = (hi - lo + 1) as u32;
            let i = (y * w + x) * 4;
            for c in 0..3 {
                dst[i + c] = mean(sum[c], count);
            }
        }
    }
    out
}

#[inline]
fn mean(sum: u32, count: u32) -> u8 {
    (sum as f32 / count as f32).round() as u8
}
