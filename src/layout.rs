//! Pixel buffer layout metadata

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextureOpError};
use crate::format::PixelFormat;

/// Layout of a raw pixel buffer as supplied by the caller's bitmap layer
///
/// `stride` is the number of bytes per row including any row-end padding,
/// so the buffer described by a layout is exactly `stride * height` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelLayout {
    pub format: PixelFormat,
    pub stride: usize,
    pub height: usize,
}

impl PixelLayout {
    /// Create a new layout
    pub fn new(format: PixelFormat, stride: usize, height: usize) -> Self {
        Self {
            format,
            stride,
            height,
        }
    }

    /// Expected buffer length for this layout
    pub fn buffer_len(&self) -> usize {
        self.stride * self.height
    }

    /// Validate a buffer length against this layout
    pub fn validate(&self, actual: usize) -> Result<()> {
        let expected = self.buffer_len();
        if actual != expected {
            return Err(TextureOpError::buffer_size_mismatch(expected, actual));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_len() {
        let layout = PixelLayout::new(PixelFormat::Rgb24, 12, 4);
        assert_eq!(layout.buffer_len(), 48);
    }

    #[test]
    fn test_validate_exact_match() {
        let layout = PixelLayout::new(PixelFormat::Argb32, 16, 2);
        assert!(layout.validate(32).is_ok());
    }

    #[test]
    fn test_validate_mismatch() {
        let layout = PixelLayout::new(PixelFormat::Argb32, 16, 2);
        let err = layout.validate(31).unwrap_err();
        assert!(matches!(
            err,
            TextureOpError::BufferSizeMismatch {
                expected: 32,
                actual: 31
            }
        ));
    }

    #[test]
    fn test_validate_empty() {
        let layout = PixelLayout::new(PixelFormat::Rgb24, 12, 0);
        assert!(layout.validate(0).is_ok());
        assert!(layout.validate(12).is_err());
    }
}
