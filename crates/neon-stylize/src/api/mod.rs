//! Public API: settings, the dispatcher and the error type.

mod error;
mod pipeline;
mod settings;

pub use error::StylizeError;
pub use pipeline::transform;
pub use settings::{defaults_for, NeonColor, Style, StyleSettings};
