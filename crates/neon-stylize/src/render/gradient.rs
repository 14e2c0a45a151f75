//! Gradient bands: threshold runs filled with mirrored linear gradients.
//!
//! The chain is:
//!
//! 1. centered zoom (`scale` 1 → 0.1 maps to zoom 1 → 8)
//! 2. vertical quality reduction to `quality` rows (power curve, exponent 2.5)
//! 3. invert shape, luminance, contrast, tone, posterization
//! 4. mask `processed < luminanceThreshold/100 * 255`
//! 5. per-row gating: rows without curvature detail or with at most one
//!    threshold crossing stay transparent
//! 6. inside runs go white → B, outside runs B → white
//!
//! A uniform mask forces the middle row into a single full-width band so the
//! result is never blank.

use crate::api::StyleSettings;
use crate::color::{invert_rgb, BLACK, WHITE};
use crate::output::Bitmap;
use crate::preprocess::{crop_zoom, invert_shape_bitmap, posterize_levels, reduce_rows, ProcessedField};

const MIN_ZOOM: f32 = 8.0;
const MAX_ZOOM: f32 = 1.0;
const MIN_QUALITY: f32 = 20.0;
const QUALITY_EXPONENT: f32 = 2.5;
/// Second-difference magnitude that counts as row detail.
const CURVATURE_DETAIL: f32 = 12.0;

/// Position of `scale` within `[0.1, 1]`, clamped to `[0, 1]`.
#[inline]
fn scale_position(scale: f32) -> f32 {
    ((scale - 0.1) / 0.9).clamp(0.0, 1.0)
}

/// Zoom factor for a scale: 8 at 0.1 down to 1 at 1.0.
pub fn gradient_zoom(scale: f32) -> f32 {
    MIN_ZOOM + (MAX_ZOOM - MIN_ZOOM) * scale_position(scale)
}

/// Rows kept by the quality reduction for an image of `height` rows.
///
/// Full height at `scale >= 0.999`, otherwise
/// `round(20 + (height - 20) * pos^2.5)`, within `[1, height]`.
pub fn gradient_quality(scale: f32, height: usize) -> usize {
    if scale >= 0.999 {
        return height;
    }
    let t = scale_position(scale).powf(QUALITY_EXPONENT);
    let q = (MIN_QUALITY + (height as f32 - MIN_QUALITY) * t).round();
    (q.max(1.0) as usize).min(height)
}

fn gradient_field(bitmap: &Bitmap, settings: &StyleSettings) -> ProcessedField {
    let zoomed = crop_zoom(bitmap, gradient_zoom(settings.scale));
    let reduced = reduce_rows(&zoomed, gradient_quality(settings.scale, bitmap.height()));
    let shaped = invert_shape_bitmap(&reduced, settings.invert_shape);
    ProcessedField::from_bitmap(&shaped)
        .contrast(settings.contrast)
        .tone(settings.midtones, settings.highlights)
        .posterize(posterize_levels(settings.smoothness))
}

/// True when some adjacent triple has `|c - 2b + a| > 12`.
fn row_has_detail(row: &[f32]) -> bool {
    row.windows(3)
        .any(|w| (w[2] - 2.0 * w[1] + w[0]).abs() > CURVATURE_DETAIL)
}

fn row_transitions(mask: &[bool]) -> usize {
    mask.windows(2).filter(|w| w[0] != w[1]).count()
}

/// Interpolate `from` → `to` across `[start, end)` of row `y`.
fn paint_run(
    out: &mut Bitmap,
    y: usize,
    start: usize,
    end: usize,
    from: [u8; 3],
    to: [u8; 3],
    alpha: u8,
) {
    let len = end - start;
    for x in start..end {
        let t = if len > 1 {
            (x - start) as f32 / (len - 1) as f32
        } else {
            0.0
        };
        let mix = |c: usize| (from[c] as f32 * (1.0 - t) + to[c] as f32 * t).round() as u8;
        out.set_pixel(x, y, [mix(0), mix(1), mix(2), alpha]);
    }
}

/// Render gradient bands.
pub fn render_gradient(bitmap: &Bitmap, settings: &StyleSettings) -> Bitmap {
    let (w, h) = (bitmap.width(), bitmap.height());
    let field = gradient_field(bitmap, settings);
    let threshold = settings.luminance_threshold / 100.0 * 255.0;

    let mut mask: Vec<bool> = field.values().iter().map(|&v| v < threshold).collect();
    let inside = mask.iter().filter(|&&m| m).count();
    let forced_row = if inside == 0 || inside == mask.len() {
        let y = h / 2;
        mask[y * w..(y + 1) * w].fill(true);
        Some(y)
    } else {
        None
    };

    let (mut a, mut b) = (
        WHITE,
        if settings.use_custom_colors {
            settings.neon_color.rgb()
        } else {
            BLACK
        },
    );
    if settings.invert {
        a = invert_rgb(a);
        b = invert_rgb(b);
    }
    let alpha = settings.ink_alpha();

    tracing::trace!(
        zoom = gradient_zoom(settings.scale),
        quality = gradient_quality(settings.scale, h),
        threshold,
        forced_row = ?forced_row,
        "gradient bands"
    );

    let mut out = Bitmap::transparent(w, h);
    for y in 0..h {
        let row_mask = &mask[y * w..(y + 1) * w];
        if forced_row == Some(y) {
            paint_run(&mut out, y, 0, w, a, b, alpha);
            continue;
        }
        if !row_has_detail(field.row(y)) || row_transitions(row_mask) <= 1 {
            continue;
        }

        let mut start = 0;
        while start < w {
            let state = row_mask[start];
            let end = row_mask[start..]
                .iter()
                .position(|&m| m != state)
                .map_or(w, |n| start + n);
            if state {
                paint_run(&mut out, y, start, end, a, b, alpha);
            } else {
                paint_run(&mut out, y, start, end, b, a, alpha);
            }
            start = end;
        }
    }
    out
}
