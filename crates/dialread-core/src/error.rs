//! Error types for dialread-core
//!
//! Provides a unified error type for the core data structures and the
//! reader configuration. Geometry problems are reported here so that a
//! misconfigured dial is rejected once, before any mask is sampled.

use thiserror::Error;

/// dialread core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Grid data length does not match its dimensions
    #[error("data length {len} does not match {width}x{height} grid")]
    DataLength { width: u32, height: u32, len: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Grid dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Dial geometry would sample outside the label mask
    #[error("invalid dial geometry: {0}")]
    InvalidGeometry(String),

    /// Label values are not distinct
    #[error("labels must be distinct: background={background}, pointer={pointer}, scale={scale}")]
    AmbiguousLabels { background: u8, pointer: u8, scale: u8 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for dialread core operations
pub type Result<T> = std::result::Result<T, Error>;
