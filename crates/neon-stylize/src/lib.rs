//! neon-stylize: pixel-level image stylization
//!
//! Turns an RGBA bitmap into a monochrome or neon-colored rendition using one
//! of six styles, or into a colored character grid for the ASCII style.
//!
//! # Quick Start
//!
//! [`transform`] is the single entry point:
//!
//! ```
//! use neon_stylize::{defaults_for, transform, Bitmap, Rendered, Style};
//!
//! let bitmap = Bitmap::filled(4, 4, [90, 90, 90, 255]);
//! let settings = defaults_for(Style::Atkinson);
//!
//! match transform(&bitmap, &settings).unwrap() {
//!     Rendered::Bitmap(out) => assert_eq!((out.width(), out.height()), (4, 4)),
//!     Rendered::Ascii(_) => unreachable!(),
//! }
//! ```
//!
//! # Styles
//!
//! | Style            | Algorithm                                             |
//! |------------------|-------------------------------------------------------|
//! | Floyd-Steinberg  | error diffusion, 4 neighbours, weights /16            |
//! | Atkinson         | error diffusion, 6 neighbours, weights /8             |
//! | Smooth Diffuse   | forward-difference gradient magnitude, thresholded    |
//! | Stippling        | vertical guide lines plus darkness-sized dots         |
//! | Gradient         | threshold runs filled with mirrored linear gradients  |
//! | ASCII            | block-averaged luminance mapped to a 10-char ramp     |
//!
//! ## Pipeline Overview
//!
//! ```text
//! Bitmap (RGBA8)
//!     |
//!     v
//! [validate]            dimensions, buffer length, pixel limit, settings
//!     |
//!     v
//! [opacity pre-step]    diffusion and edge styles, custom alpha < 1
//!     |
//!     v
//! [scale]               area-average down to floor(dim * scale)
//!     |
//!     v
//! ProcessedField        blur -> invert shape -> luminance -> contrast
//!     |                 -> tone -> posterize / invert
//!     v
//! [renderer]            mask, dots, bands or characters
//!     |
//!     v
//! [scale back]          nearest-neighbour to the source size
//!     |
//!     v
//! Rendered::Bitmap | Rendered::Ascii
//! ```
//!
//! Only the two diffusion styles and Smooth Diffuse resample. Stippling and
//! Gradient read `scale` as a density and zoom control, ASCII as the cell
//! size.
//!
//! ## Error Diffusion Polarity
//!
//! A field value below the luminance cutoff is *foreground*: it quantizes to
//! 255 and is painted in ink. Everything else is background and quantizes to
//! 0. The propagated error is `(value - quantized) * (1 - smoothness/10)`,
//! so smoothness 10 turns diffusion into plain thresholding.
//!
//! At `luminanceThreshold = 0` the cutoff switches to a fixed near-white
//! rule (`value <= 240`) and the tone curve is skipped; anything short of
//! near-white becomes ink.
//!
//! ## Alpha
//!
//! Error diffusion and edge output is binary in alpha: every pixel is either
//! paper or ink, and both carry one of two fixed alpha values. Stippling and
//! gradient bands compose their own alpha; the ASCII grid carries a single
//! color for every cell.

pub mod api;
pub mod color;
pub mod dither;
pub mod output;
pub mod preprocess;
pub mod render;


pub use api::{defaults_for, transform, NeonColor, Style, StyleSettings, StylizeError};
pub use output::{AsciiCell, AsciiGrid, AsciiLayout, Bitmap, Rendered, MAX_PIXELS};
