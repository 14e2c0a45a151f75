use neon_stylize::StylizeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid override '{0}': expected key=value")]
    MalformedOverride(String),

    #[error("Unknown setting '{0}'")]
    UnknownSetting(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Unknown export format '{0}'")]
    UnknownFormat(String),

    #[error(transparent)]
    Settings(#[from] StylizeError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Invalid bitmap: {0}")]
    Bitmap(#[from] StylizeError),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: usize, height: usize },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("JPEG encode error: {0}")]
    JpegEncode(String),

    #[error("{format} export needs {expected} output")]
    WrongOutput {
        format: &'static str,
        expected: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Stylize error: {0}")]
    Stylize(#[from] StylizeError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Render task failed: {0}")]
    Task(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_malformed_override() {
        let error = ConfigError::MalformedOverride("scale".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid override 'scale': expected key=value"
        );
    }

    #[test]
    fn test_config_error_unknown_setting() {
        let error = ConfigError::UnknownSetting("gamma".to_string());
        assert_eq!(error.to_string(), "Unknown setting 'gamma'");
    }

    #[test]
    fn test_config_error_settings_is_transparent() {
        let error: ConfigError = StylizeError::InvalidSettings("blur must be in [0, 10], got 11".into()).into();
        assert_eq!(
            error.to_string(),
            "invalid settings: blur must be in [0, 10], got 11"
        );
    }

    #[test]
    fn test_export_error_unsupported_dimensions() {
        let error = ExportError::UnsupportedDimensions {
            width: 70000,
            height: 1,
        };
        assert_eq!(error.to_string(), "Unsupported dimensions: 70000x1");
    }

    #[test]
    fn test_export_error_wrong_output() {
        let error = ExportError::WrongOutput {
            format: "png",
            expected: "bitmap",
        };
        assert_eq!(error.to_string(), "png export needs bitmap output");
    }

    #[test]
    fn test_service_error_from_stylize_error() {
        let error: ServiceError = StylizeError::InvalidImageData {
            reason: "zero width".to_string(),
        }
        .into();
        match error {
            ServiceError::Stylize(_) => {}
            _ => panic!("Expected Stylize variant"),
        }
    }

    #[test]
    fn test_service_error_from_export_error() {
        let error: ServiceError = ExportError::PngEncode("broken".to_string()).into();
        assert_eq!(error.to_string(), "Export error: PNG encode error: broken");
    }
}
