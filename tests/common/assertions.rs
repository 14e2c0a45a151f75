//! Assertion helpers for tests.

use neon_stylize::Bitmap;
use neondither::rendering::decode_bitmap;
use pretty_assertions::assert_eq;
use std::path::Path;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Assert bytes are a PNG image and decode them
pub fn assert_png(bytes: &[u8]) -> Bitmap {
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
    decode_bitmap(bytes).expect("PNG should decode")
}

/// Assert a file exists and holds a PNG of the given size
pub fn assert_png_file(path: &Path, width: usize, height: usize) -> Bitmap {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected output {}: {e}", path.display()));
    let bitmap = assert_png(&bytes);
    assert_eq!(
        (bitmap.width(), bitmap.height()),
        (width, height),
        "Unexpected dimensions for {}",
        path.display()
    );
    bitmap
}

/// Assert every pixel of a bitmap equals `rgba`
pub fn assert_all_pixels(bitmap: &Bitmap, rgba: [u8; 4]) {
    for y in 0..bitmap.height() {
        for x in 0..bitmap.width() {
            assert_eq!(bitmap.pixel(x, y), rgba, "pixel ({x},{y})");
        }
    }
}
