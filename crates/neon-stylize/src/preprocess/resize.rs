//! Resampling.
//!
//! - [`resize_area`]: box-average downscale used before dithering at reduced
//!   scale.
//! - [`resize_nearest`]: nearest-neighbour resample used to restore the
//!   original size without softening dither cells.
//! - [`reduce_rows`]: row-mean vertical downscale followed by a nearest
//!   upscale back to full height (gradient quality reduction).
//! - [`crop_zoom`]: centered crop resampled back to full size (gradient zoom).

use crate::output::Bitmap;

/// Processed size for a scale factor: `floor(dim * scale)`, at least 1.
#[inline]
pub fn scaled_dimensions(width: usize, height: usize, scale: f32) -> (usize, usize) {
    let w = ((width as f32 * scale).floor() as usize).max(1);
    let h = ((height as f32 * scale).floor() as usize).max(1);
    (w.min(width), h.min(height))
}

/// Nearest-neighbour resample: `src = floor(dst * src_dim / dst_dim)`.
pub fn resize_nearest(bitmap: &Bitmap, new_width: usize, new_height: usize) -> Bitmap {
    let (w, h) = (bitmap.width(), bitmap.height());
    if w == new_width && h == new_height {
        return bitmap.clone();
    }
    let mut out = Bitmap::transparent(new_width, new_height);
    for y in 0..new_height {
        let sy = y * h / new_height;
        for x in 0..new_width {
            let sx = x * w / new_width;
            out.set_pixel(x, y, bitmap.pixel(sx, sy));
        }
    }
    out
}

/// Area-average resample. Every destination pixel averages the source
/// block that maps onto it (at least one source pixel). All four channels
/// are averaged.
pub fn resize_area(bitmap: &Bitmap, new_width: usize, new_height: usize) -> Bitmap {
    let (w, h) = (bitmap.width(), bitmap.height());
    if w == new_width && h == new_height {
        return bitmap.clone();
    }
    let src = bitmap.pixels();
    let mut out = Bitmap::transparent(new_width, new_height);
    let dst = out.pixels_mut();

    for y in 0..new_height {
        let (y0, y1) = span(y, h, new_height);
        for x in 0..new_width {
            let (x0, x1) = span(x, w, new_width);
            let mut sum = [0u32; 4];
            for sy in y0..y1 {
                for sx in x0..x1 {
                    let i = (sy * w + sx) * 4;
                    for c in 0..4 {
                        sum[c] += src[i + c] as u32;
                    }
                }
            }
            let count = ((y1 - y0) * (x1 - x0)) as f32;
            let i = (y * new_width + x) * 4;
            for c in 0..4 {
                dst[i + c] = (sum[c] as f32 / count).round() as u8;
            }
        }
    }
    out
}

/// Source range `[start, end)` covered by destination index `d`.
#[inline]
fn span(d: usize, src_len: usize, dst_len: usize) -> (usize, usize) {
    let start = (d * src_len / dst_len).min(src_len - 1);
    let end = ((d + 1) * src_len / dst_len).clamp(start + 1, src_len);
    (start, end)
}

/// Reduce to `quality` rows by row-mean averaging, then nearest-upscale back
/// to the original height. Output alpha is opaque.
///
/// `quality >= height` returns an unchanged copy.
pub fn reduce_rows(bitmap: &Bitmap, quality: usize) -> Bitmap {
    let (w, h) = (bitmap.width(), bitmap.height());
    let quality = quality.max(1);
    if quality >= h {
        return bitmap.clone();
    }

    let src = bitmap.pixels();
    let mut reduced = vec![[0u8; 3]; w * quality];
    for q in 0..quality {
        let (y0, y1) = span(q, h, quality);
        for x in 0..w {
            let mut sum = [0u32; 3];
            for y in y0..y1 {
                let i = (y * w + x) * 4;
                for c in 0..3 {
                    sum[c] += src[i + c] as u32;
                }
            }
            let count = (y1 - y0) as f32;
            reduced[q * w + x] = [
                (sum[0] as f32 / count).round() as u8,
                (sum[1] as f32 / count).round() as u8,
                (sum[2] as f32 / count).round() as u8,
            ];
        }
    }

    let mut out = Bitmap::transparent(w, h);
    for y in 0..h {
        let q = y * quality / h;
        for x in 0..w {
            let [r, g, b] = reduced[q * w + x];
            out.set_pixel(x, y, [r, g, b, 255]);
        }
    }
    out
}

/// Crop the centered `round(w/zoom) × round(h/zoom)` region and resample it
/// back to full size with nearest-neighbour. `zoom <= 1` is a copy.
pub fn crop_zoom(bitmap: &Bitmap, zoom: f32) -> Bitmap {
    if zoom <= 1.0 {
        return bitmap.clone();
    }
    let (w, h) = (bitmap.width(), bitmap.height());
    let crop_w = ((w as f32 / zoom).round() as usize).clamp(1, w);
    let crop_h = ((h as f32 / zoom).round() as usize).clamp(1, h);
    let crop_x = (w - crop_w) / 2;
    let crop_y = (h - crop_h) / 2;

    let mut out = Bitmap::transparent(w, h);
    for y in 0..h {
        let sy = crop_y + y * crop_h / h;
        for x in 0..w {
            let sx = crop_x + x * crop_w / w;
            out.set_pixel(x, y, bitmap.pixel(sx, sy));
        }
    }
    out
}
