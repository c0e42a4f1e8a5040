//! Error types for colorextract-color

use thiserror::Error;

/// Errors that can occur while extracting and naming dominant colors
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] colorextract_core::Error),

    /// Invalid parameters (bit depth outside 0..=8, zero workers, ...)
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Malformed reference palette table
    #[error("invalid palette at line {line}: {reason}")]
    InvalidPalette { line: usize, reason: String },

    /// Quantization error
    #[error("quantization error: {0}")]
    QuantizationError(String),

    /// Empty image
    #[error("empty image: no pixels to process")]
    EmptyImage,
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
