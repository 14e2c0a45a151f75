//! Unified error type for the neon-stylize public API.
//!
//! Every fallible entry point returns [`StylizeError`]. Renderers themselves
//! are infallible once their inputs have been validated, so all failures
//! surface at the boundary: bitmap construction, settings validation, and
//! style-name parsing.

use thiserror::Error;

/// Error returned by [`transform`](crate::transform) and the validated
/// constructors.
///
/// # Example
///
/// ```
/// use neon_stylize::{Bitmap, StylizeError};
///
/// let err = Bitmap::new(2, 2, vec![0; 3]).unwrap_err();
/// assert!(matches!(err, StylizeError::InvalidImageData { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StylizeError {
    /// Malformed bitmap: zero dimension or buffer length mismatch.
    #[error("invalid image data: {reason}")]
    InvalidImageData { reason: String },

    /// Out-of-range parameter or unknown style name.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Image too large to process in memory.
    #[error("image of {width}x{height} exceeds the {max_pixels} pixel limit")]
    ResourceExhaustion {
        width: usize,
        height: usize,
        max_pixels: usize,
    },
}

impl StylizeError {
    pub(crate) fn settings(msg: impl Into<String>) -> Self {
        StylizeError::InvalidSettings(msg.into())
    }
}
