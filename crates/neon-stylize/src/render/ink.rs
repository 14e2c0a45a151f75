//! Foreground and background color resolution.
//!
//! The styles agree on where the ink color comes from (white, or the neon
//! color) but each treats `invert` and the background a little differently.
//! Those per-style rules are collected here so the renderers only ask for
//! "ink" and "paper".

use crate::api::StyleSettings;
use crate::color::{invert_rgb, BLACK, WHITE};

/// Foreground color plus alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ink {
    pub rgb: [u8; 3],
    pub alpha: u8,
}

impl Ink {
    #[inline]
    pub fn rgba(&self) -> [u8; 4] {
        [self.rgb[0], self.rgb[1], self.rgb[2], self.alpha]
    }
}

/// Blue value substituted when a custom neon color resolves to pure white,
/// so drawn ink never equals the reserved plain-white foreground.
const WHITE_NUDGE_BLUE: u8 = 254;

/// Ink for the error-diffusion styles.
///
/// Custom colors convert HSV to RGB with pure white nudged to
/// `(255, 255, 254)`. Under `invert`, a white ink becomes pure black and
/// anything else is channel-inverted.
pub fn diffusion_ink(settings: &StyleSettings) -> Ink {
    resolve_ink(settings, true)
}

/// Ink for the edge style: same rules as [`diffusion_ink`] without the nudge.
pub fn edge_ink(settings: &StyleSettings) -> Ink {
    resolve_ink(settings, false)
}

fn resolve_ink(settings: &StyleSettings, nudge_white: bool) -> Ink {
    let mut rgb = if settings.use_custom_colors {
        settings.neon_color.rgb()
    } else {
        WHITE
    };
    if settings.use_custom_colors && nudge_white && rgb == WHITE {
        rgb[2] = WHITE_NUDGE_BLUE;
    }

    if settings.invert {
        let is_white =
            (settings.use_custom_colors && settings.neon_color.is_hsv_white()) || rgb == WHITE;
        rgb = if is_white { BLACK } else { invert_rgb(rgb) };
    }

    Ink {
        rgb,
        alpha: settings.ink_alpha(),
    }
}

/// Background for the error-diffusion styles.
///
/// Transparent, except `invert` with custom colors which paints solid black
/// at the ink's alpha so only two alpha values ever appear.
pub fn diffusion_paper(settings: &StyleSettings) -> [u8; 4] {
    if settings.invert && settings.use_custom_colors {
        [0, 0, 0, settings.ink_alpha()]
    } else {
        [0, 0, 0, 0]
    }
}

/// Background for the edge style: always fully transparent.
///
/// Only the stored RGB varies; `invert` without custom colors keeps white
/// under the zero alpha, everything else black.
pub fn edge_paper(settings: &StyleSettings) -> [u8; 4] {
    if settings.invert && !settings.use_custom_colors {
        [255, 255, 255, 0]
    } else {
        [0, 0, 0, 0]
    }
}

/// Ink for stippling, gradient endpoints and ASCII: the neon color or white,
/// channel-inverted under `invert`, no special cases.
pub fn plain_ink(settings: &StyleSettings) -> Ink {
    let rgb = if settings.use_custom_colors {
        settings.neon_color.rgb()
    } else {
        WHITE
    };
    Ink {
        rgb: if settings.invert { invert_rgb(rgb) } else { rgb },
        alpha: settings.ink_alpha(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{defaults_for, NeonColor, Style};

    fn settings(custom: bool, invert: bool, color: NeonColor) -> StyleSettings {
        let mut s = defaults_for(Style::FloydSteinberg);
        s.use_custom_colors = custom;
        s.invert = invert;
        s.neon_color = color;
        s
    }

    #[test]
    fn test_plain_white_ink() {
        let s = settings(false, false, NeonColor::default());
        assert_eq!(diffusion_ink(&s).rgba(), [255, 255, 255, 255]);
        assert_eq!(diffusion_paper(&s), [0, 0, 0, 0]);
    }

    #[test]
    fn test_custom_red_ink() {
        let s = settings(true, false, NeonColor::new(0.0, 100.0, 100.0, 1.0));
        assert_eq!(diffusion_ink(&s).rgba(), [255, 0, 0, 255]);
    }

    #[test]
    fn test_custom_white_is_nudged_for_diffusion_only() {
        let s = settings(true, false, NeonColor::new(0.0, 0.0, 100.0, 1.0));
        assert_eq!(diffusion_ink(&s).rgb, [255, 255, 254]);
        assert_eq!(edge_ink(&s).rgb, [255, 255, 255]);
    }

    #[test]
    fn test_inverted_white_becomes_black() {
        let s = settings(true, true, NeonColor::new(42.0, 0.0, 100.0, 1.0));
        assert_eq!(diffusion_ink(&s).rgb, [0, 0, 0]);
        let s = settings(false, true, NeonColor::default());
        assert_eq!(diffusion_ink(&s).rgb, [0, 0, 0]);
    }

    #[test]
    fn test_inverted_color_is_complemented() {
        let s = settings(true, true, NeonColor::new(0.0, 100.0, 100.0, 0.5));
        let ink = diffusion_ink(&s);
        assert_eq!(ink.rgb, [0, 255, 255]);
        assert_eq!(ink.alpha, 128);
        assert_eq!(diffusion_paper(&s), [0, 0, 0, 128]);
    }

    #[test]
    fn test_edge_paper_combinations() {
        let c = NeonColor::default();
        assert_eq!(edge_paper(&settings(false, false, c)), [0, 0, 0, 0]);
        assert_eq!(edge_paper(&settings(false, true, c)), [255, 255, 255, 0]);
        assert_eq!(edge_paper(&settings(true, false, c)), [0, 0, 0, 0]);
        assert_eq!(edge_paper(&settings(true, true, c)), [0, 0, 0, 0]);
        let translucent = NeonColor::new(120.0, 100.0, 100.0, 0.5);
        assert_eq!(edge_paper(&settings(true, true, translucent)), [0, 0, 0, 0]);
    }

    #[test]
    fn test_plain_ink_inverts_without_special_case() {
        let s = settings(false, true, NeonColor::default());
        assert_eq!(plain_ink(&s).rgb, [0, 0, 0]);
        let s = settings(true, true, NeonColor::new(300.0, 100.0, 100.0, 1.0));
        assert_eq!(plain_ink(&s).rgb, [0, 255, 0]);
    }
}
