//! The five renderers and the color rules they share.
//!
//! | Style            | Renderer                | Output      |
//! |------------------|-------------------------|-------------|
//! | Floyd-Steinberg  | [`render_diffusion`]    | [`Bitmap`]  |
//! | Atkinson         | [`render_diffusion`]    | [`Bitmap`]  |
//! | Smooth Diffuse   | [`render_edges`]        | [`Bitmap`]  |
//! | Stippling        | [`render_stipple`]      | [`Bitmap`]  |
//! | Gradient         | [`render_gradient`]     | [`Bitmap`]  |
//! | ASCII            | [`render_ascii`]        | [`AsciiGrid`](crate::AsciiGrid) |
//!
//! Renderers take validated input and cannot fail.

mod ascii;
mod diffusion;
mod edge_lines;
mod gradient;
mod ink;
mod stipple;

pub use ascii::{ascii_cell_size, render_ascii, ASCII_CHARSET};
pub use diffusion::render_diffusion;
pub use edge_lines::render_edges;
pub use gradient::{gradient_quality, gradient_zoom, render_gradient};
pub use ink::{diffusion_ink, diffusion_paper, edge_ink, edge_paper, plain_ink, Ink};
pub use stipple::{render_stipple, DotCache, StippleGeometry};

use crate::output::Bitmap;
use crate::preprocess::{resize_area, resize_nearest, scaled_dimensions};

/// Run `render` at `scale` resolution and bring the result back to the
/// source size with nearest-neighbour.
fn at_scale(bitmap: &Bitmap, scale: f32, render: impl FnOnce(&Bitmap) -> Bitmap) -> Bitmap {
    let (w, h) = (bitmap.width(), bitmap.height());
    if scale >= 1.0 {
        return render(bitmap);
    }
    let (pw, ph) = scaled_dimensions(w, h, scale);
    let working = resize_area(bitmap, pw, ph);
    resize_nearest(&render(&working), w, h)
}

/// Bitmap with `ink` where `mask` is set and `paper` elsewhere.
fn paint_mask(width: usize, height: usize, mask: &[bool], ink: [u8; 4], paper: [u8; 4]) -> Bitmap {
    let mut out = Bitmap::filled(width, height, paper);
    for (px, &on) in out.pixels_mut().chunks_exact_mut(4).zip(mask) {
        if on {
            px.copy_from_slice(&ink);
        }
    }
    out
}
