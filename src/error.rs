//! Error types for texture operations

use thiserror::Error;

use crate::format::PixelFormat;

/// Result type for texture operations
pub type Result<T> = std::result::Result<T, TextureOpError>;

/// Errors that can occur while constructing or applying texture operations
#[derive(Error, Debug)]
pub enum TextureOpError {
    /// Channel index outside the R/G/B range
    #[error("Channel index out of range: {0} (expected 0, 1 or 2)")]
    ChannelOutOfRange(i32),

    /// Pixel format not handled by color-channel operations
    #[error("Pixel format not supported: {0:?}")]
    UnsupportedFormat(PixelFormat),

    /// Buffer length inconsistent with the declared layout
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

impl TextureOpError {
    /// Create a new channel out-of-range error
    pub fn channel_out_of_range(index: i32) -> Self {
        Self::ChannelOutOfRange(index)
    }

    /// Create a new unsupported format error
    pub fn unsupported_format(format: PixelFormat) -> Self {
        Self::UnsupportedFormat(format)
    }

    /// Create a new buffer size mismatch error
    pub fn buffer_size_mismatch(expected: usize, actual: usize) -> Self {
        Self::BufferSizeMismatch { expected, actual }
    }
}
