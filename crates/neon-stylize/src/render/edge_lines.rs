//! Smooth Diffuse: line art from luminance discontinuities.

use crate::api::StyleSettings;
use crate::output::Bitmap;
use crate::preprocess::{diffusion_field, edge_mask, edge_threshold};

use super::ink::{edge_ink, edge_paper};
use super::{at_scale, paint_mask};

/// Paint interior pixels whose forward-difference gradient exceeds
/// `20 + smoothness * 8` in ink; everything else is paper.
///
/// Uses the same preprocessing and scale handling as the diffusion styles.
pub fn render_edges(bitmap: &Bitmap, settings: &StyleSettings) -> Bitmap {
    at_scale(bitmap, settings.scale, |working| {
        let field = diffusion_field(working, settings);
        let threshold = edge_threshold(settings.smoothness);
        let mask = edge_mask(&field, threshold);
        tracing::trace!(
            width = field.width(),
            height = field.height(),
            threshold,
            edges = mask.iter().filter(|&&e| e).count(),
            "edge lines"
        );
        paint_mask(
            field.width(),
            field.height(),
            &mask,
            edge_ink(settings).rgba(),
            edge_paper(settings),
        )
    })
}
