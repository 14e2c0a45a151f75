pub mod ascii_export;
pub mod decode;
pub mod jpeg_export;
pub mod png_export;

pub use ascii_export::{grid_to_html, grid_to_text};
pub use decode::{decode_bitmap, load_bitmap};
pub use jpeg_export::{encode_jpeg, flatten, jpeg_background};
pub use png_export::encode_png;

use crate::error::ExportError;
use crate::models::{ExportConfig, ExportFormat};
use neon_stylize::{Rendered, StyleSettings};

/// Encode a transform result in `format`
///
/// Pixel formats need a bitmap and text formats need an ASCII grid.
pub fn export(
    rendered: &Rendered,
    settings: &StyleSettings,
    format: ExportFormat,
    options: &ExportConfig,
) -> Result<Vec<u8>, ExportError> {
    match (format, rendered) {
        (ExportFormat::Png, Rendered::Bitmap(bitmap)) => encode_png(bitmap, options.optimize),
        (ExportFormat::Jpeg, Rendered::Bitmap(bitmap)) => {
            encode_jpeg(bitmap, jpeg_background(settings), options.jpeg_quality)
        }
        (ExportFormat::Text, Rendered::Ascii(grid)) => Ok(grid_to_text(grid).into_bytes()),
        (ExportFormat::Html, Rendered::Ascii(grid)) => Ok(grid_to_html(grid).into_bytes()),
        (format, _) => Err(ExportError::WrongOutput {
            format: format.name(),
            expected: if format.is_text() {
                "ascii grid"
            } else {
                "bitmap"
            },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neon_stylize::{defaults_for, transform, Bitmap, Style};

    #[test]
    fn test_format_mismatch() {
        let settings = defaults_for(Style::Ascii);
        let grid = transform(&Bitmap::filled(40, 40, [0, 0, 0, 255]), &settings).unwrap();
        let err = export(&grid, &settings, ExportFormat::Png, &ExportConfig::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "png export needs bitmap output");

        let settings = defaults_for(Style::Atkinson);
        let bitmap = transform(&Bitmap::filled(4, 4, [0, 0, 0, 255]), &settings).unwrap();
        let err = export(&bitmap, &settings, ExportFormat::Html, &ExportConfig::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "html export needs ascii grid output");
    }

    #[test]
    fn test_jpeg_export() {
        let settings = defaults_for(Style::FloydSteinberg);
        let out = transform(&Bitmap::filled(8, 8, [40, 40, 40, 255]), &settings).unwrap();
        let bytes = export(&out, &settings, ExportFormat::Jpeg, &ExportConfig::default()).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }
}
