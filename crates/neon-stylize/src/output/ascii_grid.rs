//! Character-grid output of the ASCII style.

/// One character with its display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiCell {
    pub ch: char,
    /// RGBA.
    pub color: [u8; 4],
}

/// Rectangular grid of [`AsciiCell`]s.
///
/// Every row has exactly [`columns`](Self::columns) cells. The grid may be
/// empty when the image is smaller than one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiGrid {
    rows: Vec<Vec<AsciiCell>>,
    columns: usize,
    cell_size: usize,
    background: [u8; 4],
}

impl AsciiGrid {
    /// Build a grid from rows that all hold `columns` cells.
    pub(crate) fn new(
        rows: Vec<Vec<AsciiCell>>,
        columns: usize,
        cell_size: usize,
        background: [u8; 4],
    ) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns));
        Self {
            rows,
            columns,
            cell_size,
            background,
        }
    }

    pub fn rows(&self) -> &[Vec<AsciiCell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns == 0
    }

    /// Source pixels per cell edge (`N`). Also the display font size.
    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    /// Solid backdrop color behind the characters.
    pub fn background(&self) -> [u8; 4] {
        self.background
    }

    /// Characters of one row as a string.
    pub fn row_text(&self, y: usize) -> String {
        self.rows[y].iter().map(|c| c.ch).collect()
    }
}

/// Monospace font metrics used to lay a grid out on a canvas.
///
/// Widths and heights are fractions of the font size. The default line
/// height is the compact 0.6 em the grid is designed for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsciiLayout {
    /// Font size in pixels.
    pub font_size: f32,
    /// Advance width of one character, in em.
    pub char_width: f32,
    /// Line height, in em.
    pub line_height: f32,
}

impl AsciiLayout {
    pub const DEFAULT_CHAR_WIDTH: f32 = 0.6;
    pub const DEFAULT_LINE_HEIGHT: f32 = 0.6;

    /// Layout with the grid's cell size as font size and default metrics.
    pub fn for_grid(grid: &AsciiGrid) -> Self {
        Self {
            font_size: grid.cell_size() as f32,
            char_width: Self::DEFAULT_CHAR_WIDTH,
            line_height: Self::DEFAULT_LINE_HEIGHT,
        }
    }

    /// Pixel size of one character cell `(width, height)`.
    pub fn cell_pixels(&self) -> (f32, f32) {
        (
            self.font_size * self.char_width,
            self.font_size * self.line_height,
        )
    }

    /// Canvas size needed to draw `grid`, rounded up, at least 1×1.
    pub fn canvas_size(&self, grid: &AsciiGrid) -> (u32, u32) {
        let (cw, ch) = self.cell_pixels();
        (
            ceil_px(grid.columns() as f32 * cw),
            ceil_px(grid.row_count() as f32 * ch),
        )
    }
}

/// Round up to whole pixels, ignoring float noise from the em fractions.
fn ceil_px(v: f32) -> u32 {
    (v - 1e-3).ceil().max(1.0) as u32
}
