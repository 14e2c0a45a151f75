use crate::error::ExportError;
use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use neon_stylize::{Bitmap, StyleSettings};

/// Backdrop for formats without alpha: white when inverted, black otherwise
pub fn jpeg_background(settings: &StyleSettings) -> [u8; 3] {
    if settings.invert {
        [255, 255, 255]
    } else {
        [0, 0, 0]
    }
}

/// Alpha-composite over a solid color, dropping the alpha channel
pub fn flatten(bitmap: &Bitmap, background: [u8; 3]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(bitmap.width() * bitmap.height() * 3);
    for [r, g, b, a] in bitmap.iter_pixels() {
        let alpha = a as f32 / 255.0;
        for (c, bg) in [r, g, b].into_iter().zip(background) {
            rgb.push((c as f32 * alpha + bg as f32 * (1.0 - alpha)).round() as u8);
        }
    }
    rgb
}

/// Encode a bitmap as baseline JPEG after flattening it onto `background`
pub fn encode_jpeg(
    bitmap: &Bitmap,
    background: [u8; 3],
    quality: u8,
) -> Result<Vec<u8>, ExportError> {
    let unsupported = || ExportError::UnsupportedDimensions {
        width: bitmap.width(),
        height: bitmap.height(),
    };
    // JPEG frame headers store 16-bit dimensions
    let width = u16::try_from(bitmap.width()).map_err(|_| unsupported())?;
    let height = u16::try_from(bitmap.height()).map_err(|_| unsupported())?;

    let rgb = flatten(bitmap, background);
    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, quality.clamp(1, 100));
    encoder
        .encode(&rgb, width as u32, height as u32, ExtendedColorType::Rgb8)
        .map_err(|e| ExportError::JpegEncode(e.to_string()))?;
    Ok(buf)
}
