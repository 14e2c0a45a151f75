//! ASCII art: one character per `N × N` block of the source.
//!
//! # Preprocessing
//!
//! Operates on RGB, in this order:
//!
//! 1. invert shape
//! 2. separable box blur, radius `ceil(blur)`
//! 3. posterization to gray when smoothness > 0
//! 4. highlight boost: pixels with luminance above 128 scaled by
//!    `1 + highlights/100`
//! 5. threshold split at `t = luminanceThreshold/100`: brighter pixels scaled
//!    by `1 + (lum - t) * 2`, darker ones by `lum / t`
//!
//! Cell luminance is the block mean, remapped with
//! `contrast = 1 + contrast/100` and `brightness = midtones/50 - 1` before
//! picking a character from [`ASCII_CHARSET`].

use crate::api::StyleSettings;
use crate::color::luminance_u8;
use crate::output::{AsciiCell, AsciiGrid, Bitmap};
use crate::preprocess::{
    blur_radius, box_blur_separable, invert_shape_bitmap, posterize, posterize_levels,
};

use super::ink::plain_ink;

/// Characters from darkest to lightest.
pub const ASCII_CHARSET: &[char] = &['@', '%', '#', '*', '+', '=', '-', ':', '.', ' '];

const MIN_CELL: f32 = 20.0;
const MAX_CELL: f32 = 200.0;
const HIGHLIGHT_CUTOFF: f32 = 128.0;

/// Cell edge in source pixels: `round(20 + (1 - scale) * 180)`.
pub fn ascii_cell_size(scale: f32) -> usize {
    (MIN_CELL + (1.0 - scale) * (MAX_CELL - MIN_CELL)).round() as usize
}

/// Multiply RGB by `factor`, saturating at 255.
#[inline]
fn scale_rgb(px: &mut [u8], factor: f32) {
    for c in &mut px[..3] {
        *c = (*c as f32 * factor).round().clamp(0.0, 255.0) as u8;
    }
}

fn preprocess(bitmap: &Bitmap, settings: &StyleSettings) -> Bitmap {
    let shaped = invert_shape_bitmap(bitmap, settings.invert_shape);
    let mut out = box_blur_separable(&shaped, blur_radius(settings.blur));
    let levels = posterize_levels(settings.smoothness);
    let threshold = settings.luminance_threshold / 100.0;

    for px in out.pixels_mut().chunks_exact_mut(4) {
        if let Some(levels) = levels {
            let gray = posterize(luminance_u8([px[0], px[1], px[2]]), levels).round() as u8;
            px[..3].fill(gray);
        }

        if settings.highlights != 0.0 && luminance_u8([px[0], px[1], px[2]]) > HIGHLIGHT_CUTOFF {
            scale_rgb(px, 1.0 + settings.highlights / 100.0);
        }

        if threshold > 0.0 {
            let norm = luminance_u8([px[0], px[1], px[2]]) / 255.0;
            let factor = if norm > threshold {
                1.0 + (norm - threshold) * 2.0
            } else {
                norm / threshold
            };
            scale_rgb(px, factor);
        }
    }
    out
}

/// Contrast/brightness remap on a `[0, 255]` luminance.
#[inline]
fn remap(value: f32, contrast: f32, brightness: f32) -> f32 {
    (((value / 255.0 - 0.5) * contrast + 0.5 + brightness) * 255.0).clamp(0.0, 255.0)
}

#[inline]
fn char_for(value: f32) -> char {
    let last = ASCII_CHARSET.len() - 1;
    let idx = (value as usize * last / 255).min(last);
    ASCII_CHARSET[idx]
}

/// Build the character grid.
///
/// `columns = floor(width / N)` and `rows = floor(height / N)`; an image
/// smaller than one cell yields an empty grid. All characters share one
/// color; the background is black, or white under `invert`.
pub fn render_ascii(bitmap: &Bitmap, settings: &StyleSettings) -> AsciiGrid {
    let n = ascii_cell_size(settings.scale).max(1);
    let columns = bitmap.width() / n;
    let rows = bitmap.height() / n;
    let background = if settings.invert {
        [255, 255, 255, 255]
    } else {
        [0, 0, 0, 255]
    };
    let color = plain_ink(settings).rgba();

    tracing::trace!(cell = n, columns, rows, "ascii grid");
    if columns == 0 || rows == 0 {
        return AsciiGrid::new(Vec::new(), 0, n, background);
    }

    let source = preprocess(bitmap, settings);
    let contrast = 1.0 + settings.contrast / 100.0;
    let brightness = settings.midtones / 50.0 - 1.0;
    let cell_pixels = (n * n) as f32;

    let grid = (0..rows)
        .map(|cy| {
            (0..columns)
                .map(|cx| {
                    let mut sum = 0.0;
                    for y in cy * n..(cy + 1) * n {
                        for x in cx * n..(cx + 1) * n {
                            let [r, g, b, _] = source.pixel(x, y);
                            sum += luminance_u8([r, g, b]);
                        }
                    }
                    let value = remap(sum / cell_pixels, contrast, brightness);
                    AsciiCell {
                        ch: char_for(value),
                        color,
                    }
                })
                .collect()
        })
        .collect();

    AsciiGrid::new(grid, columns, n, background)
}
