//! Test fixtures: synthetic images written to scratch directories.

use neon_stylize::Bitmap;
use neondither::rendering::encode_png;
use std::path::{Path, PathBuf};

/// Common pixel values
pub mod colors {
    pub const WHITE: [u8; 4] = [255, 255, 255, 255];
    pub const BLACK: [u8; 4] = [0, 0, 0, 255];
    pub const DARK_GRAY: [u8; 4] = [100, 100, 100, 255];
}

/// Horizontal luminance ramp from black to white
pub fn ramp(width: usize, height: usize) -> Bitmap {
    let mut pixels = Vec::with_capacity(width * height * 4);
    for _ in 0..height {
        for x in 0..width {
            let v = (x * 255 / (width - 1).max(1)) as u8;
            pixels.extend_from_slice(&[v, v, v, 255]);
        }
    }
    Bitmap::new(width, height, pixels).unwrap()
}

/// Write `bitmap` as a PNG file named `name` inside `dir`
pub fn write_png(dir: &Path, name: &str, bitmap: &Bitmap) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, encode_png(bitmap, false).unwrap()).unwrap();
    path
}

/// Minimal render config in YAML
pub const ATKINSON_RED_YAML: &str = r#"
settings:
  style: atkinson
  useCustomColors: true
  neonColor: { h: 0, s: 100, v: 100, a: 1 }
export:
  format: png
  optimize: false
"#;
