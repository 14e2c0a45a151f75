//! RGBA8 bitmap shared by every stage of the pipeline.
//!
//! [`Bitmap`] is both the input handed over by the decode collaborator and
//! the output of every pixel renderer. The buffer length is validated on
//! construction and never changes afterwards, so renderers can index
//! `(y * width + x) * 4` without further checks.

use crate::api::StylizeError;

/// Largest image accepted by the pipeline, in pixels (2^28).
///
/// Larger inputs fail with [`StylizeError::ResourceExhaustion`] before any
/// working buffer is allocated.
pub const MAX_PIXELS: usize = 1 << 28;

/// An RGBA8 image with interleaved channels in row-major order.
///
/// # Example
///
/// ```
/// use neon_stylize::Bitmap;
///
/// let bitmap = Bitmap::filled(2, 2, [255, 255, 255, 255]);
/// assert_eq!(bitmap.pixels().len(), 2 * 2 * 4);
/// assert_eq!(bitmap.pixel(1, 1), [255, 255, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Wrap an existing RGBA buffer.
    ///
    /// Fails with [`StylizeError::InvalidImageData`] when either dimension is
    /// zero or `pixels.len() != width * height * 4`, and with
    /// [`StylizeError::ResourceExhaustion`] above [`MAX_PIXELS`].
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self, StylizeError> {
        let expected = checked_len(width, height)?;
        if pixels.len() != expected {
            return Err(StylizeError::InvalidImageData {
                reason: format!(
                    "buffer holds {} bytes, expected {} for {}x{} RGBA",
                    pixels.len(),
                    expected,
                    width,
                    height
                ),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A fully transparent black bitmap.
    pub fn transparent(width: usize, height: usize) -> Self {
        Self::filled(width, height, [0, 0, 0, 0])
    }

    /// A bitmap with every pixel set to `rgba`.
    ///
    /// Intended for internal buffers and tests; dimensions are trusted.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity(width * height * 4);
        for _ in 0..width * height {
            pixels.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw interleaved RGBA bytes.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consume the bitmap and return its buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// RGBA value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width + x) * 4;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    #[inline]
    pub(crate) fn set_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        let i = (y * self.width + x) * 4;
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }

    /// Iterate over pixels as `[r, g, b, a]` arrays in row-major order.
    pub fn iter_pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.pixels
            .chunks_exact(4)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// `width * height * 4` with overflow, zero-size and size-limit checks.
pub(crate) fn checked_len(width: usize, height: usize) -> Result<usize, StylizeError> {
    if width == 0 || height == 0 {
        return Err(StylizeError::InvalidImageData {
            reason: format!("image has zero dimension ({}x{})", width, height),
        });
    }
    let pixels = width
        .checked_mul(height)
        .filter(|&n| n <= MAX_PIXELS)
        .ok_or(StylizeError::ResourceExhaustion {
            width,
            height,
            max_pixels: MAX_PIXELS,
        })?;
    Ok(pixels * 4)
}
