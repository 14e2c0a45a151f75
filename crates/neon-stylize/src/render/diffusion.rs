//! Error-diffusion styles (Floyd-Steinberg, Atkinson).

use crate::api::StyleSettings;
use crate::dither::{Dither, DitherOptions, ThresholdPolicy};
use crate::output::Bitmap;
use crate::preprocess::diffusion_field;

use super::ink::{diffusion_ink, diffusion_paper};
use super::{at_scale, paint_mask};

/// Dither `bitmap` with `algorithm` and paint the mask in ink and paper.
///
/// Runs at `floor(dim * scale)` resolution and restores the original size
/// with nearest-neighbour, so dither cells stay crisp.
pub fn render_diffusion(bitmap: &Bitmap, settings: &StyleSettings, algorithm: &dyn Dither) -> Bitmap {
    at_scale(bitmap, settings.scale, |working| {
        let field = diffusion_field(working, settings);
        let options = DitherOptions::new()
            .threshold(ThresholdPolicy::from_luminance_threshold(
                settings.luminance_threshold,
            ))
            .smoothness(settings.smoothness);
        tracing::trace!(
            width = field.width(),
            height = field.height(),
            threshold = ?options.threshold,
            error_factor = options.error_factor,
            "error diffusion"
        );

        let mask = algorithm.dither(&field, &options);
        paint_mask(
            field.width(),
            field.height(),
            &mask,
            diffusion_ink(settings).rgba(),
            diffusion_paper(settings),
        )
    })
}
