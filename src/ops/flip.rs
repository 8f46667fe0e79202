//! Vertical flip

use super::TextureOperation;
use crate::error::Result;
use crate::layout::PixelLayout;

/// Reverses the row order of the buffer (top/bottom mirror)
///
/// Pure byte-row reversal: the pixel format is irrelevant and every format
/// value is accepted. Applying twice restores the original buffer.
#[derive(Debug, Clone)]
pub struct VerticalFlip {
    name: String,
}

impl VerticalFlip {
    /// Create a vertical flip
    pub fn new() -> Self {
        Self {
            name: "fy".to_string(),
        }
    }

    /// Create a vertical flip with a caller-supplied label
    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for VerticalFlip {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureOperation for VerticalFlip {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, buffer: &mut [u8], layout: &PixelLayout) -> Result<()> {
        layout.validate(buffer.len())?;

        let stride = layout.stride;
        if stride == 0 || layout.height < 2 {
            return Ok(());
        }

        // Three-way exchange through one scratch row, walking the two row
        // cursors inward until they meet or cross.
        let mut scratch = vec![0u8; stride];
        let mut from = 0;
        let mut to = (layout.height - 1) * stride;
        while from < to {
            scratch.copy_from_slice(&buffer[to..to + stride]);
            buffer.copy_within(from..from + stride, to);
            buffer[from..from + stride].copy_from_slice(&scratch);
            from += stride;
            to -= stride;
        }
        Ok(())
    }
}
