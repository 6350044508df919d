//! Error types for dialread-transform

use thiserror::Error;

/// Errors that can occur during geometric transformations
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] dialread_core::Error),

    /// Input mask does not match the configured geometry
    #[error("mask is {width}x{height}, expected {expected}x{expected}")]
    MaskSize {
        expected: u32,
        width: u32,
        height: u32,
    },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
