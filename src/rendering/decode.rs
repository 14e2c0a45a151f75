use crate::error::ExportError;
use image::{DynamicImage, ImageReader};
use neon_stylize::Bitmap;
use std::io::Cursor;
use std::path::Path;

/// Decode an image file into an RGBA bitmap
///
/// The format is guessed from the file contents, not the extension.
pub fn load_bitmap(path: &Path) -> Result<Bitmap, ExportError> {
    let image = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| ExportError::Decode(format!("{}: {e}", path.display())))?;
    into_bitmap(image)
}

/// Decode in-memory image bytes into an RGBA bitmap
pub fn decode_bitmap(bytes: &[u8]) -> Result<Bitmap, ExportError> {
    let image = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()
        .map_err(|e| ExportError::Decode(e.to_string()))?;
    into_bitmap(image)
}

fn into_bitmap(image: DynamicImage) -> Result<Bitmap, ExportError> {
    let rgba = image.into_rgba8();
    let (width, height) = rgba.dimensions();
    tracing::debug!(width, height, "Decoded image");
    Ok(Bitmap::new(
        width as usize,
        height as usize,
        rgba.into_raw(),
    )?)
}
