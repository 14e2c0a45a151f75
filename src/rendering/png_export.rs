use crate::error::ExportError;
use neon_stylize::Bitmap;
use std::io::Cursor;

/// Encode a bitmap as 8-bit RGBA PNG, keeping transparency
///
/// With `optimize`, the PNG is written with fast settings and then
/// re-compressed by oxipng; if oxipng fails the fast encoding is kept.
pub fn encode_png(bitmap: &Bitmap, optimize: bool) -> Result<Vec<u8>, ExportError> {
    let (width, height) = png_dimensions(bitmap)?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        if optimize {
            encoder.set_compression(png::Compression::Fast);
            encoder.set_filter(png::FilterType::NoFilter);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| ExportError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(bitmap.pixels())
            .map_err(|e| ExportError::PngEncode(e.to_string()))?;
    }
    let png_bytes = buf.into_inner();

    if !optimize {
        return Ok(png_bytes);
    }

    // Keep the RGB of fully transparent pixels as rendered
    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or(png_bytes);
    Ok(optimized)
}

fn png_dimensions(bitmap: &Bitmap) -> Result<(u32, u32), ExportError> {
    let unsupported = || ExportError::UnsupportedDimensions {
        width: bitmap.width(),
        height: bitmap.height(),
    };
    let width = u32::try_from(bitmap.width()).map_err(|_| unsupported())?;
    let height = u32::try_from(bitmap.height()).map_err(|_| unsupported())?;
    Ok((width, height))
}
