//! Dithering options and threshold policy.

/// Near-white cutoff used when the luminance threshold is disabled.
pub const NEAR_WHITE_CUTOFF: f32 = 240.0;

/// How a (possibly error-adjusted) value is classified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdPolicy {
    /// Threshold slider at 0: everything at or below [`NEAR_WHITE_CUTOFF`]
    /// is foreground, only near-white is background.
    NearWhite,
    /// Foreground when the value is strictly below the cutoff.
    Below(f32),
}

impl ThresholdPolicy {
    /// Policy for a `luminanceThreshold` slider value in `[0, 100]`.
    ///
    /// 0 selects [`ThresholdPolicy::NearWhite`]; anything else maps to
    /// `Below(255 - lt/100 * 255)`.
    pub fn from_luminance_threshold(luminance_threshold: f32) -> Self {
        if luminance_threshold == 0.0 {
            ThresholdPolicy::NearWhite
        } else {
            ThresholdPolicy::Below(255.0 - luminance_threshold / 100.0 * 255.0)
        }
    }

    #[inline]
    pub fn is_foreground(&self, value: f32) -> bool {
        match *self {
            ThresholdPolicy::NearWhite => value <= NEAR_WHITE_CUTOFF,
            ThresholdPolicy::Below(cutoff) => value < cutoff,
        }
    }
}

/// Configuration for the error diffusion loop.
///
/// # Example
///
/// ```
/// use neon_stylize::dither::{DitherOptions, ThresholdPolicy};
///
/// let options = DitherOptions::new()
///     .threshold(ThresholdPolicy::from_luminance_threshold(50.0))
///     .smoothness(5.0);
/// assert!((options.error_factor - 0.5).abs() < f32::EPSILON);
/// ```
#[derive(Debug, Clone)]
pub struct DitherOptions {
    /// Foreground/background decision.
    ///
    /// Default: `Below(127.5)` (luminance threshold 50)
    pub threshold: ThresholdPolicy,

    /// Multiplier on the quantization error before it is spread,
    /// `1 - smoothness/10`.
    ///
    /// Default: `0.5` (smoothness 5)
    pub error_factor: f32,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self {
            threshold: ThresholdPolicy::from_luminance_threshold(50.0),
            error_factor: 0.5,
        }
    }
}

impl DitherOptions {
    /// Same as `DitherOptions::default()`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn threshold(mut self, threshold: ThresholdPolicy) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the error factor from a smoothness value in `[0, 10]`.
    #[inline]
    pub fn smoothness(mut self, smoothness: f32) -> Self {
        self.error_factor = (1.0 - smoothness / 10.0).clamp(0.0, 1.0);
        self
    }

    #[inline]
    pub fn error_factor(mut self, factor: f32) -> Self {
        self.error_factor = factor;
        self
    }
}
