use crate::error::ConfigError;
use neon_stylize::{NeonColor, Style, StyleSettings};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Render configuration loaded from a YAML file
///
/// ```yaml
/// settings:
///   style: atkinson
///   scale: 0.5
///   useCustomColors: true
///   neonColor: { h: 180, s: 100, v: 100, a: 0.8 }
/// export:
///   format: png
///   optimize: true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Stylization parameters (missing fields take the style's defaults)
    pub settings: StyleSettings,

    /// How results are written to disk
    pub export: ExportConfig,
}

/// Output encoding options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportConfig {
    /// Output format; when unset, text for ASCII and PNG otherwise
    pub format: Option<ExportFormat>,

    /// Re-compress PNG output with oxipng
    pub optimize: bool,

    /// JPEG quality, 1-100
    pub jpeg_quality: u8,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: None,
            optimize: true,
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

fn default_jpeg_quality() -> u8 {
    90
}

/// File format for stylized output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Png,
    #[serde(alias = "jpg")]
    Jpeg,
    Text,
    Html,
}

impl ExportFormat {
    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpeg",
            ExportFormat::Text => "text",
            ExportFormat::Html => "html",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Text => "txt",
            ExportFormat::Html => "html",
        }
    }

    /// True for formats that take a character grid rather than pixels
    pub fn is_text(self) -> bool {
        matches!(self, ExportFormat::Text | ExportFormat::Html)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "jpeg" | "jpg" => Ok(ExportFormat::Jpeg),
            "text" | "txt" => Ok(ExportFormat::Text),
            "html" => Ok(ExportFormat::Html),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

impl RenderConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            style = %config.settings.style,
            "Loaded configuration"
        );
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Effective output format for the configured style
    pub fn format(&self) -> ExportFormat {
        self.export.format.unwrap_or(if self.settings.style.is_text() {
            ExportFormat::Text
        } else {
            ExportFormat::Png
        })
    }

    /// Switch style, resetting numeric settings to the new style's defaults
    pub fn set_style(&mut self, style: Style) {
        if style != self.settings.style {
            self.settings.switch_style(style);
        }
    }

    /// Apply a `key=value` override from the command line
    ///
    /// Keys accept camelCase, kebab-case or snake_case spellings.
    pub fn apply_override(&mut self, pair: &str) -> Result<(), ConfigError> {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| ConfigError::MalformedOverride(pair.to_string()))?;
        let (key, value) = (key.trim(), value.trim());
        let normalized: String = key
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        let s = &mut self.settings;
        match normalized.as_str() {
            "style" => {
                let style = value.parse::<Style>()?;
                if style != s.style {
                    s.switch_style(style);
                }
            }
            "scale" => s.scale = parse_number(key, value)?,
            "smoothness" => s.smoothness = parse_number(key, value)?,
            "contrast" => s.contrast = parse_number(key, value)?,
            "midtones" => s.midtones = parse_number(key, value)?,
            "highlights" => s.highlights = parse_number(key, value)?,
            "luminancethreshold" => s.luminance_threshold = parse_number(key, value)?,
            "blur" => s.blur = parse_number(key, value)?,
            "invertshape" => s.invert_shape = parse_number(key, value)?,
            "invert" => s.invert = parse_bool(key, value)?,
            "usecustomcolors" => s.use_custom_colors = parse_bool(key, value)?,
            "isexporting" => s.is_exporting = parse_bool(key, value)?,
            "neoncolor" => s.neon_color = parse_neon_color(key, value)?,
            "format" => self.export.format = Some(value.parse()?),
            "optimize" => self.export.optimize = parse_bool(key, value)?,
            "jpegquality" => self.export.jpeg_quality = parse_number(key, value)?,
            _ => return Err(ConfigError::UnknownSetting(key.to_string())),
        }
        Ok(())
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| invalid(key, value))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

/// `h,s,v` or `h,s,v,a`
fn parse_neon_color(key: &str, value: &str) -> Result<NeonColor, ConfigError> {
    let parts = value
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid(key, value))?;
    match parts.as_slice() {
        [h, s, v] => Ok(NeonColor::new(*h, *s, *v, 1.0)),
        [h, s, v, a] => Ok(NeonColor::new(*h, *s, *v, *a)),
        _ => Err(invalid(key, value)),
    }
}
