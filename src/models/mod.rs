pub mod config;

pub use config::{ExportConfig, ExportFormat, RenderConfig};
