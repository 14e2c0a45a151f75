//! Stippling: vertical guide lines with darkness-sized dots.
//!
//! Unlike the diffusion styles, scale never resamples the image here. It
//! only sets the grid density (10 to 120 lines and dots per line) and the
//! dot radius range, which grows as `1/scale`.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::api::StyleSettings;
use crate::output::Bitmap;
use crate::preprocess::{
    blur_radius, box_blur_separable, invert_shape_bitmap, posterize_levels, ProcessedField,
};

use super::ink::plain_ink;

const MIN_LINES: f32 = 10.0;
const MAX_LINES: f32 = 120.0;
const MIN_DOT_RADIUS: f32 = 0.1;
const MAX_DOT_RADIUS: f32 = 4.0;

/// Grid density and dot size derived from `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StippleGeometry {
    /// Number of vertical guide lines.
    pub lines: usize,
    /// Dot positions per line.
    pub dots: usize,
    /// Radius of a dot at zero darkness.
    pub min_radius: f32,
    /// Radius of a dot at full darkness.
    pub max_radius: f32,
}

impl StippleGeometry {
    pub fn for_scale(scale: f32) -> Self {
        let count = (MIN_LINES + (MAX_LINES - MIN_LINES) * scale).round() as usize;
        Self {
            lines: count,
            dots: count,
            min_radius: MIN_DOT_RADIUS / scale,
            max_radius: MAX_DOT_RADIUS / scale,
        }
    }

    /// Column of guide line `lx`: `floor((lx + 0.5) * width / lines)`.
    #[inline]
    pub fn line_x(&self, lx: usize, width: usize) -> usize {
        cell_center(lx, width, self.lines)
    }

    /// Row of dot `ly`: `floor((ly + 0.5) * height / dots)`.
    #[inline]
    pub fn dot_y(&self, ly: usize, height: usize) -> usize {
        cell_center(ly, height, self.dots)
    }

    /// Radius for a luminance, linear in darkness `1 - gray/255`.
    #[inline]
    pub fn radius(&self, gray: f32) -> f32 {
        let darkness = 1.0 - gray / 255.0;
        self.min_radius + (self.max_radius - self.min_radius) * darkness
    }
}

#[inline]
fn cell_center(i: usize, extent: usize, count: usize) -> usize {
    let pos = ((i as f32 + 0.5) * extent as f32 / count as f32).floor() as usize;
    pos.min(extent.saturating_sub(1))
}

/// Memo of rasterized dot shapes, keyed by radius.
///
/// Owned by a single render call. Holds at most `capacity` shapes; beyond
/// that, stamps are computed without being stored. Only dots up to
/// [`DotCache::MAX_RADIUS`] are stamped; larger ones are filled row by row
/// against the image bounds.
#[derive(Debug)]
pub struct DotCache {
    stamps: HashMap<u32, Vec<(i32, i32)>>,
    capacity: usize,
}

impl DotCache {
    pub const DEFAULT_CAPACITY: usize = 256;
    pub const MAX_RADIUS: f32 = 32.0;

    pub fn new(capacity: usize) -> Self {
        Self {
            stamps: HashMap::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    /// Offsets `(dx, dy)` with `dx² + dy² <= r²`.
    pub fn stamp(&mut self, radius: f32) -> Cow<'_, [(i32, i32)]> {
        let key = radius.to_bits();
        if !self.stamps.contains_key(&key) && self.stamps.len() >= self.capacity {
            return Cow::Owned(rasterize_dot(radius));
        }
        Cow::Borrowed(
            self.stamps
                .entry(key)
                .or_insert_with(|| rasterize_dot(radius))
                .as_slice(),
        )
    }
}

impl Default for DotCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

fn rasterize_dot(radius: f32) -> Vec<(i32, i32)> {
    let radius = radius.min(DotCache::MAX_RADIUS);
    let reach = radius.ceil() as i32;
    let r2 = radius * radius;
    let mut offsets = Vec::new();
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            if (dx * dx + dy * dy) as f32 <= r2 {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}

/// Fill a disc of `radius` around `(cx, cy)`, clipped to the bitmap.
///
/// Work is bounded by the clipped area, so radii far beyond the image (tiny
/// `scale`) stay cheap.
fn fill_disc(out: &mut Bitmap, cx: usize, cy: usize, radius: f32, ink: [u8; 4]) {
    let (w, h) = (out.width(), out.height());
    // No pixel is farther than w + h from the center
    let radius = f64::from(radius.min((w + h) as f32));
    let r2 = radius * radius;
    let reach = radius.ceil() as usize;

    for py in cy.saturating_sub(reach)..=(cy + reach).min(h - 1) {
        let dy = py as f64 - cy as f64;
        let rem = r2 - dy * dy;
        if rem < 0.0 {
            continue;
        }
        let half = rem.sqrt().floor() as usize;
        for px in cx.saturating_sub(half)..=(cx + half).min(w - 1) {
            out.set_pixel(px, py, ink);
        }
    }
}

/// Luminance field for stippling: separable blur, invert shape, luminance,
/// contrast, tone, optional posterization. `invert` is not applied here; it
/// only swaps the colors.
fn stipple_field(bitmap: &Bitmap, settings: &StyleSettings) -> ProcessedField {
    let blurred = box_blur_separable(bitmap, blur_radius(settings.blur));
    let shaped = invert_shape_bitmap(&blurred, settings.invert_shape);
    ProcessedField::from_bitmap(&shaped)
        .contrast(settings.contrast)
        .tone(settings.midtones, settings.highlights)
        .posterize(posterize_levels(settings.smoothness))
}

/// Render guide lines and dots.
///
/// A dot is drawn at a grid point when its luminance exceeds
/// `luminanceThreshold/100 * 255`. The background is black (white under
/// `invert`), opaque while previewing and fully transparent when
/// `is_exporting` is set.
pub fn render_stipple(bitmap: &Bitmap, settings: &StyleSettings) -> Bitmap {
    let (w, h) = (bitmap.width(), bitmap.height());
    let field = stipple_field(bitmap, settings);
    let geometry = StippleGeometry::for_scale(settings.scale);
    let threshold = settings.luminance_threshold / 100.0 * 255.0;
    let ink = plain_ink(settings).rgba();

    let paper_rgb = if settings.invert { 255 } else { 0 };
    let paper_alpha = if settings.is_exporting { 0 } else { 255 };
    let mut out = Bitmap::filled(w, h, [paper_rgb, paper_rgb, paper_rgb, paper_alpha]);

    tracing::trace!(
        lines = geometry.lines,
        dots = geometry.dots,
        min_radius = geometry.min_radius,
        max_radius = geometry.max_radius,
        "stippling"
    );

    for lx in 0..geometry.lines {
        let x = geometry.line_x(lx, w);
        for y in 0..h {
            out.set_pixel(x, y, ink);
        }
    }

    let mut cache = DotCache::default();
    for lx in 0..geometry.lines {
        let x = geometry.line_x(lx, w);
        for ly in 0..geometry.dots {
            let y = geometry.dot_y(ly, h);
            let gray = field.get(x, y);
            if gray <= threshold {
                continue;
            }
            let radius = geometry.radius(gray);
            if radius.is_nan() || radius > DotCache::MAX_RADIUS {
                fill_disc(&mut out, x, y, radius, ink);
                continue;
            }
            let (x, y) = (x as i32, y as i32);
            for &(dx, dy) in cache.stamp(radius).iter() {
                let (px, py) = (x + dx, y + dy);
                if px >= 0 && py >= 0 && (px as usize) < w && (py as usize) < h {
                    out.set_pixel(px as usize, py as usize, ink);
                }
            }
        }
    }

    out
}
