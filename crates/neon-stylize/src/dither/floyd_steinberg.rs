//! Floyd-Steinberg error diffusion.

use crate::preprocess::ProcessedField;

use super::{dither_with_kernel, Dither, DitherOptions, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion.
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, field: &ProcessedField, options: &DitherOptions) -> Vec<bool> {
        dither_with_kernel(field, &FLOYD_STEINBERG, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dither::ThresholdPolicy;

    #[test]
    fn test_floyd_steinberg_white_is_background() {
        let field = ProcessedField::from_values(2, 2, vec![255.0; 4]);
        let mask = FloydSteinberg.dither(&field, &DitherOptions::new());
        assert_eq!(mask, vec![false; 4]);
    }

    #[test]
    fn test_floyd_steinberg_near_white_policy() {
        let options = DitherOptions::new().threshold(ThresholdPolicy::NearWhite);
        let gray = ProcessedField::from_values(4, 4, vec![128.0; 16]);
        assert!(FloydSteinberg.dither(&gray, &options).iter().all(|&fg| fg));

        let white = ProcessedField::from_values(4, 4, vec![255.0; 16]);
        assert!(FloydSteinberg.dither(&white, &options).iter().all(|&fg| !fg));
    }

    #[test]
    fn test_floyd_steinberg_deterministic() {
        let values: Vec<f32> = (0..64).map(|i| (i * 4) as f32).collect();
        let field = ProcessedField::from_values(8, 8, values);
        let options = DitherOptions::new().smoothness(2.0);
        assert_eq!(
            FloydSteinberg.dither(&field, &options),
            FloydSteinberg.dither(&field, &options)
        );
    }
}
