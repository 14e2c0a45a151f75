//! Atkinson error diffusion.
//!
//! Developed by Bill Atkinson for the original Macintosh. Only 6/8 of the
//! error is propagated, which gives crisper, higher-contrast results than
//! Floyd-Steinberg.

use crate::preprocess::ProcessedField;

use super::{dither_with_kernel, Dither, DitherOptions, ATKINSON};

/// Atkinson error diffusion.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// Each of the 6 neighbours receives 1/8 of the error.
pub struct Atkinson;

impl Dither for Atkinson {
    fn dither(&self, field: &ProcessedField, options: &DitherOptions) -> Vec<bool> {
        dither_with_kernel(field, &ATKINSON, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dither::FloydSteinberg;

    #[test]
    fn test_atkinson_single_dark_pixel_is_foreground() {
        let field = ProcessedField::from_values(1, 1, vec![100.0]);
        assert_eq!(Atkinson.dither(&field, &DitherOptions::new()), vec![true]);
    }

    #[test]
    fn test_atkinson_passes_less_error_right() {
        // Background 200 leaves +200 of error: FS pushes 87.5 right,
        // Atkinson only 25, so the 100 stays below the 127.5 cutoff
        let field = ProcessedField::from_values(2, 1, vec![200.0, 100.0]);
        let options = DitherOptions::new().smoothness(0.0);
        assert_eq!(Atkinson.dither(&field, &options), vec![false, true]);
        assert_eq!(FloydSteinberg.dither(&field, &options), vec![false, false]);
    }
}
