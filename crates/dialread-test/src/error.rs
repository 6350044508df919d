//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] dialread_core::Error),

    /// Transform error while mapping arcs into the mask
    #[error("transform error: {0}")]
    Transform(#[from] dialread_transform::TransformError),

    /// Arc does not fit the unrolled strip
    #[error("arc {start}..={end} does not fit a strip {width} columns wide")]
    ArcOutOfRange { start: u32, end: u32, width: u32 },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
