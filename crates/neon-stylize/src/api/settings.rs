//! Style selection and the settings record driving one transformation.
//!
//! [`StyleSettings`] carries every user-tunable parameter. Each style has its
//! own defaults ([`defaults_for`]); switching style through
//! [`StyleSettings::switch_style`] resets the numeric fields to the new
//! style's defaults while keeping color choices and flags.
//!
//! With the `serde` feature the record (de)serializes with camelCase field
//! names. Fields missing on input are taken from the defaults of the style
//! named in the same record.

use std::fmt;
use std::str::FromStr;

use crate::color::hsv_to_rgb;

use super::error::StylizeError;

/// The six rendering styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Style {
    /// Floyd-Steinberg error diffusion.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "Floyd-Steinberg"))]
    FloydSteinberg,
    /// Atkinson error diffusion.
    #[cfg_attr(feature = "serde", serde(alias = "Atkinson"))]
    Atkinson,
    /// Edge line art.
    #[cfg_attr(feature = "serde", serde(alias = "Smooth Diffuse"))]
    SmoothDiffuse,
    /// Guide lines plus darkness-sized dots.
    #[cfg_attr(feature = "serde", serde(alias = "Stippling"))]
    Stippling,
    /// Threshold bands filled with linear gradients.
    #[cfg_attr(feature = "serde", serde(alias = "Gradient"))]
    Gradient,
    /// Character grid.
    #[cfg_attr(feature = "serde", serde(alias = "ASCII"))]
    Ascii,
}

impl Style {
    pub const ALL: [Style; 6] = [
        Style::FloydSteinberg,
        Style::Atkinson,
        Style::SmoothDiffuse,
        Style::Stippling,
        Style::Gradient,
        Style::Ascii,
    ];

    /// Machine name, as accepted on the command line and in config files.
    pub fn name(self) -> &'static str {
        match self {
            Style::FloydSteinberg => "floyd-steinberg",
            Style::Atkinson => "atkinson",
            Style::SmoothDiffuse => "smooth-diffuse",
            Style::Stippling => "stippling",
            Style::Gradient => "gradient",
            Style::Ascii => "ascii",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Style::FloydSteinberg => "Floyd-Steinberg",
            Style::Atkinson => "Atkinson",
            Style::SmoothDiffuse => "Smooth Diffuse",
            Style::Stippling => "Stippling",
            Style::Gradient => "Gradient",
            Style::Ascii => "ASCII",
        }
    }

    /// Whether the style produces a character grid instead of pixels.
    pub fn is_text(self) -> bool {
        self == Style::Ascii
    }

    /// Styles that use the opacity pre-step and manage no alpha of their own.
    pub(crate) fn uses_opacity_prestep(self) -> bool {
        matches!(
            self,
            Style::FloydSteinberg | Style::Atkinson | Style::SmoothDiffuse
        )
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = StylizeError;

    /// Accepts machine names and labels, ignoring case, spaces, `-` and `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "floydsteinberg" | "fs" => Ok(Style::FloydSteinberg),
            "atkinson" => Ok(Style::Atkinson),
            "smoothdiffuse" => Ok(Style::SmoothDiffuse),
            "stippling" => Ok(Style::Stippling),
            "gradient" => Ok(Style::Gradient),
            "ascii" => Ok(Style::Ascii),
            _ => Err(StylizeError::settings(format!("unknown style '{}'", s))),
        }
    }
}

/// User-selected foreground color: HSV plus separate opacity.
///
/// `h` in degrees `[0, 360]`, `s` and `v` in percent, `a` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NeonColor {
    pub h: f32,
    pub s: f32,
    pub v: f32,
    pub a: f32,
}

impl Default for NeonColor {
    /// Neon magenta, fully opaque.
    fn default() -> Self {
        Self {
            h: 300.0,
            s: 100.0,
            v: 100.0,
            a: 1.0,
        }
    }
}

impl NeonColor {
    pub fn new(h: f32, s: f32, v: f32, a: f32) -> Self {
        Self { h, s, v, a }
    }

    #[inline]
    pub fn rgb(&self) -> [u8; 3] {
        hsv_to_rgb(self.h, self.s, self.v)
    }

    /// `round(a * 255)`.
    #[inline]
    pub fn alpha_byte(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// Zero saturation at full value, i.e. white regardless of hue.
    #[inline]
    pub(crate) fn is_hsv_white(&self) -> bool {
        self.s == 0.0 && self.v == 100.0
    }
}

/// Parameters for a single transformation pass.
///
/// Build one with [`defaults_for`] and adjust fields directly.
///
/// ```
/// use neon_stylize::{defaults_for, Style};
///
/// let mut settings = defaults_for(Style::Atkinson);
/// settings.contrast = 20.0;
/// settings.switch_style(Style::Gradient);
/// assert_eq!(settings.contrast, 0.0);
/// assert_eq!(settings.smoothness, 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", from = "SettingsRecord")
)]
pub struct StyleSettings {
    pub style: Style,
    /// Processing resolution / density, `(0, 1]`.
    pub scale: f32,
    /// Diffusion damping, edge sensitivity or posterization, `[0, 10]`.
    pub smoothness: f32,
    /// `[-100, 100]`.
    pub contrast: f32,
    /// `[0, 100]`.
    pub midtones: f32,
    /// `[0, 100]`.
    pub highlights: f32,
    /// `[0, 100]`, 0 selects the near-white policy for the diffusion styles.
    pub luminance_threshold: f32,
    /// Box-blur radius, `[0, 10]`.
    pub blur: f32,
    pub invert: bool,
    /// Partial negative of the source, `[0, 100]`.
    pub invert_shape: f32,
    pub use_custom_colors: bool,
    pub neon_color: NeonColor,
    /// Stippling only: transparent instead of opaque background.
    pub is_exporting: bool,
}

impl Default for StyleSettings {
    fn default() -> Self {
        defaults_for(Style::default())
    }
}

/// Documented defaults for `style`.
///
/// All styles share scale 1, contrast 0, midtones 65, highlights 100,
/// luminance threshold 50, blur 0 and invert-shape 0. Smoothness is 5 for
/// the diffusion and edge styles, 0 for stippling and ASCII, 3 for gradient.
pub fn defaults_for(style: Style) -> StyleSettings {
    let smoothness = match style {
        Style::FloydSteinberg | Style::Atkinson | Style::SmoothDiffuse => 5.0,
        Style::Stippling | Style::Ascii => 0.0,
        Style::Gradient => 3.0,
    };
    StyleSettings {
        style,
        scale: 1.0,
        smoothness,
        contrast: 0.0,
        midtones: 65.0,
        highlights: 100.0,
        luminance_threshold: 50.0,
        blur: 0.0,
        invert: false,
        invert_shape: 0.0,
        use_custom_colors: false,
        neon_color: NeonColor::default(),
        is_exporting: false,
    }
}

impl StyleSettings {
    /// Change style, resetting every numeric field to the new style's
    /// defaults. Flags and the neon color are kept.
    pub fn switch_style(&mut self, style: Style) {
        let mut next = defaults_for(style);
        next.invert = self.invert;
        next.use_custom_colors = self.use_custom_colors;
        next.neon_color = self.neon_color;
        next.is_exporting = self.is_exporting;
        *self = next;
    }

    /// Alpha byte for drawn ink: `round(a * 255)` with custom colors, else 255.
    #[inline]
    pub fn ink_alpha(&self) -> u8 {
        if self.use_custom_colors {
            self.neon_color.alpha_byte()
        } else {
            255
        }
    }

    /// Check every numeric field against its documented range.
    pub fn validate(&self) -> Result<(), StylizeError> {
        if !(self.scale.is_finite() && self.scale > 0.0 && self.scale <= 1.0) {
            return Err(StylizeError::settings(format!(
                "scale must be in (0, 1], got {}",
                self.scale
            )));
        }
        check_range("smoothness", self.smoothness, 0.0, 10.0)?;
        check_range("contrast", self.contrast, -100.0, 100.0)?;
        check_range("midtones", self.midtones, 0.0, 100.0)?;
        check_range("highlights", self.highlights, 0.0, 100.0)?;
        check_range("luminanceThreshold", self.luminance_threshold, 0.0, 100.0)?;
        check_range("blur", self.blur, 0.0, 10.0)?;
        check_range("invertShape", self.invert_shape, 0.0, 100.0)?;
        check_range("neonColor.h", self.neon_color.h, 0.0, 360.0)?;
        check_range("neonColor.s", self.neon_color.s, 0.0, 100.0)?;
        check_range("neonColor.v", self.neon_color.v, 0.0, 100.0)?;
        check_range("neonColor.a", self.neon_color.a, 0.0, 1.0)?;
        Ok(())
    }
}

fn check_range(name: &str, value: f32, min: f32, max: f32) -> Result<(), StylizeError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(StylizeError::settings(format!(
            "{} must be in [{}, {}], got {}",
            name, min, max, value
        )))
    }
}

/// Wire form of [`StyleSettings`] where every field is optional.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsRecord {
    #[serde(default)]
    style: Style,
    scale: Option<f32>,
    smoothness: Option<f32>,
    contrast: Option<f32>,
    midtones: Option<f32>,
    highlights: Option<f32>,
    luminance_threshold: Option<f32>,
    blur: Option<f32>,
    invert: Option<bool>,
    invert_shape: Option<f32>,
    use_custom_colors: Option<bool>,
    neon_color: Option<NeonColor>,
    is_exporting: Option<bool>,
}

#[cfg(feature = "serde")]
impl From<SettingsRecord> for StyleSettings {
    fn from(r: SettingsRecord) -> Self {
        let d = defaults_for(r.style);
        StyleSettings {
            style: r.style,
            scale: r.scale.unwrap_or(d.scale),
            smoothness: r.smoothness.unwrap_or(d.smoothness),
            contrast: r.contrast.unwrap_or(d.contrast),
            midtones: r.midtones.unwrap_or(d.midtones),
            highlights: r.highlights.unwrap_or(d.highlights),
            luminance_threshold: r.luminance_threshold.unwrap_or(d.luminance_threshold),
            blur: r.blur.unwrap_or(d.blur),
            invert: r.invert.unwrap_or(d.invert),
            invert_shape: r.invert_shape.unwrap_or(d.invert_shape),
            use_custom_colors: r.use_custom_colors.unwrap_or(d.use_custom_colors),
            neon_color: r.neon_color.unwrap_or(d.neon_color),
            is_exporting: r.is_exporting.unwrap_or(d.is_exporting),
        }
    }
}
