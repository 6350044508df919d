//! Error types for dialread-reader

use thiserror::Error;

/// Errors that can occur while reading meters
#[derive(Debug, Error)]
pub enum ReaderError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] dialread_core::Error),

    /// Polar unrolling failed
    #[error("transform error: {0}")]
    Transform(#[from] dialread_transform::TransformError),

    /// Mask erosion failed
    #[error("morph error: {0}")]
    Morph(#[from] dialread_morph::MorphError),

    /// Worker pool could not be created
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Column signal does not match the unrolled width
    #[error("signal length {actual} does not match unrolled width {expected}")]
    SignalLength { expected: usize, actual: usize },
}

/// Result type for reading operations
pub type ReaderResult<T> = Result<T, ReaderError>;
