//! Luminance posterization.

/// Number of levels for a smoothness value: `max(2, round(20 - s/10 * 18))`.
///
/// Returns `None` when smoothness is 0 (posterization disabled).
pub fn posterize_levels(smoothness: f32) -> Option<u32> {
    if smoothness <= 0.0 {
        return None;
    }
    let levels = (20.0 - smoothness / 10.0 * 18.0).round().max(2.0);
    Some(levels as u32)
}

/// Snap `value` in `[0, 255]` to the nearest of `levels` evenly spaced steps.
#[inline]
pub fn posterize(value: f32, levels: u32) -> f32 {
    let steps = (levels.max(2) - 1) as f32;
    (value / 255.0 * steps).round() / steps * 255.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_from_smoothness() {
        assert_eq!(posterize_levels(0.0), None);
        assert_eq!(posterize_levels(10.0), Some(2));
        assert_eq!(posterize_levels(5.0), Some(11));
        assert_eq!(posterize_levels(3.0), Some(15));
        assert_eq!(posterize_levels(0.5), Some(19));
    }

    #[test]
    fn test_two_levels_binarize() {
        assert_eq!(posterize(100.0, 2), 0.0);
        assert_eq!(posterize(200.0, 2), 255.0);
    }

    #[test]
    fn test_endpoints_are_fixed() {
        for levels in 2..20 {
            assert_eq!(posterize(0.0, levels), 0.0);
            assert!((posterize(255.0, levels) - 255.0).abs() < 1e-3);
        }
    }
}
