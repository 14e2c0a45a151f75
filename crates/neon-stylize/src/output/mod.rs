//! Output types: RGBA bitmaps and ASCII grids.

mod ascii_grid;
mod bitmap;

pub use ascii_grid::{AsciiCell, AsciiGrid, AsciiLayout};
pub use bitmap::{Bitmap, MAX_PIXELS};

pub(crate) use bitmap::checked_len;

/// Result of a transformation: pixels for five styles, characters for ASCII.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Bitmap(Bitmap),
    Ascii(AsciiGrid),
}

impl Rendered {
    pub fn as_bitmap(&self) -> Option<&Bitmap> {
        match self {
            Rendered::Bitmap(b) => Some(b),
            Rendered::Ascii(_) => None,
        }
    }

    pub fn as_ascii(&self) -> Option<&AsciiGrid> {
        match self {
            Rendered::Ascii(g) => Some(g),
            Rendered::Bitmap(_) => None,
        }
    }

    pub fn into_bitmap(self) -> Option<Bitmap> {
        match self {
            Rendered::Bitmap(b) => Some(b),
            Rendered::Ascii(_) => None,
        }
    }

    pub fn into_ascii(self) -> Option<AsciiGrid> {
        match self {
            Rendered::Ascii(g) => Some(g),
            Rendered::Bitmap(_) => None,
        }
    }
}
