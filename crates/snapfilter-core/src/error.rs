//! Error types for pipeline operations.

use thiserror::Error;

/// Errors produced by the transform pipeline and its codec collaborators.
///
/// Every error is local to the call that produced it: no partial image is
/// ever returned alongside an error, and nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// Pixel buffer length does not match `width * height * 4`, or a
    /// dimension is zero.
    #[error(
        "Invalid dimensions: {width}x{height} requires {expected} bytes (width * height * 4), got {actual}"
    )]
    InvalidDimensions {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// An operation parameter is outside its documented domain.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Decoding or encoding an image file failed.
    #[error("Encoding error: {0}")]
    EncodingError(String),
}

impl PipelineError {
    pub(crate) fn unsupported(message: impl Into<String>) -> Self {
        PipelineError::UnsupportedOperation(message.into())
    }

    pub(crate) fn encoding(err: impl std::fmt::Display) -> Self {
        PipelineError::EncodingError(err.to_string())
    }
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
