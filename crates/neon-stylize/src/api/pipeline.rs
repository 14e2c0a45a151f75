//! The single entry point: validate, pre-step, dispatch.

use crate::color::apply_opacity;
use crate::dither::{Atkinson, FloydSteinberg};
use crate::output::{checked_len, Bitmap, Rendered};
use crate::render::{render_ascii, render_diffusion, render_edges, render_gradient, render_stipple};

use super::error::StylizeError;
use super::settings::{Style, StyleSettings};

/// Stylize `bitmap` according to `settings`.
///
/// Five styles return [`Rendered::Bitmap`] with the input's dimensions; the
/// ASCII style returns [`Rendered::Ascii`]. The input is never modified and
/// the call holds no shared state, so independent calls may run on
/// different threads.
///
/// The opacity pre-step (alpha scaled by the neon color's `a`) runs for the
/// diffusion and edge styles when custom colors are on and `a < 1`; the
/// other styles compose their own alpha.
///
/// # Errors
///
/// - [`StylizeError::InvalidImageData`] for a zero-sized bitmap
/// - [`StylizeError::ResourceExhaustion`] above [`MAX_PIXELS`](crate::MAX_PIXELS)
/// - [`StylizeError::InvalidSettings`] for out-of-range parameters
///
/// # Example
///
/// ```
/// use neon_stylize::{defaults_for, transform, Bitmap, Style};
///
/// let bitmap = Bitmap::filled(2, 2, [255, 255, 255, 255]);
/// let out = transform(&bitmap, &defaults_for(Style::FloydSteinberg)).unwrap();
/// let out = out.as_bitmap().unwrap();
/// assert!(out.iter_pixels().all(|p| p[3] == 0));
/// ```
pub fn transform(bitmap: &Bitmap, settings: &StyleSettings) -> Result<Rendered, StylizeError> {
    let expected = checked_len(bitmap.width(), bitmap.height())?;
    if bitmap.pixels().len() != expected {
        return Err(StylizeError::InvalidImageData {
            reason: format!(
                "buffer holds {} bytes, expected {}",
                bitmap.pixels().len(),
                expected
            ),
        });
    }
    settings.validate()?;

    tracing::debug!(
        style = %settings.style,
        width = bitmap.width(),
        height = bitmap.height(),
        scale = settings.scale,
        "transform"
    );

    let opacity_prestep = settings.style.uses_opacity_prestep()
        && settings.use_custom_colors
        && settings.neon_color.a < 1.0;
    let prepared;
    let source = if opacity_prestep {
        prepared = apply_opacity(bitmap, settings.neon_color.a);
        &prepared
    } else {
        bitmap
    };

    let rendered = match settings.style {
        Style::FloydSteinberg => Rendered::Bitmap(render_diffusion(source, settings, &FloydSteinberg)),
        Style::Atkinson => Rendered::Bitmap(render_diffusion(source, settings, &Atkinson)),
        Style::SmoothDiffuse => Rendered::Bitmap(render_edges(source, settings)),
        Style::Stippling => Rendered::Bitmap(render_stipple(source, settings)),
        Style::Gradient => Rendered::Bitmap(render_gradient(source, settings)),
        Style::Ascii => Rendered::Ascii(render_ascii(source, settings)),
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::defaults_for;

    #[test]
    fn test_zero_sized_bitmap_rejected() {
        let bitmap = Bitmap::filled(0, 3, [0, 0, 0, 0]);
        let err = transform(&bitmap, &defaults_for(Style::Gradient)).unwrap_err();
        assert!(matches!(err, StylizeError::InvalidImageData { .. }));
    }

    #[test]
    fn test_invalid_settings_rejected_before_rendering() {
        let mut settings = defaults_for(Style::Stippling);
        settings.scale = 0.0;
        let err = transform(&Bitmap::filled(2, 2, [0, 0, 0, 255]), &settings).unwrap_err();
        assert!(matches!(err, StylizeError::InvalidSettings(_)));
    }

    #[test]
    fn test_ascii_returns_grid() {
        let out = transform(
            &Bitmap::filled(40, 40, [0, 0, 0, 255]),
            &defaults_for(Style::Ascii),
        )
        .unwrap();
        assert!(out.as_ascii().is_some());
        assert!(out.as_bitmap().is_none());
    }

    #[test]
    fn test_every_pixel_style_returns_bitmap() {
        let src = Bitmap::filled(5, 4, [100, 150, 200, 255]);
        for style in Style::ALL.into_iter().filter(|s| !s.is_text()) {
            let out = transform(&src, &defaults_for(style)).unwrap();
            let bitmap = out.into_bitmap().unwrap();
            assert_eq!((bitmap.width(), bitmap.height()), (5, 4), "{style}");
        }
    }
}
