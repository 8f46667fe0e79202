//! Per-pixel vector normalization

use serde::{Deserialize, Serialize};

use super::TextureOperation;
use crate::error::Result;
use crate::layout::PixelLayout;

/// Scaling rule applied to the normalized components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NormalizeScaling {
    /// Divide each component by the vector norm and truncate toward zero
    ///
    /// A component smaller than the norm collapses to 0 and a component
    /// equal to the norm becomes 1.
    #[default]
    Truncate,
    /// Map each normalized component onto the full byte range as
    /// `round(component / norm * 255)`, rounding half away from zero
    Rescale,
}

/// Rescales each pixel's R/G/B bytes, read as a 3-vector, to unit length
///
/// Keeps normal-map textures unit-length after resampling or channel edits.
/// All three components are read before any is written. A pixel whose three
/// color bytes are all zero has no direction and is left unchanged. Not
/// idempotent in general: 8-bit quantization can shift components by one on
/// repeated application.
#[derive(Debug, Clone)]
pub struct VectorNormalize {
    scaling: NormalizeScaling,
    name: String,
}

impl VectorNormalize {
    /// Create a normalization with the truncating scaling rule
    pub fn new() -> Self {
        Self::with_scaling(NormalizeScaling::default())
    }

    /// Create a normalization with an explicit scaling rule
    pub fn with_scaling(scaling: NormalizeScaling) -> Self {
        Self {
            scaling,
            name: "N".to_string(),
        }
    }

    /// Create a normalization with a caller-supplied label
    pub fn with_name(scaling: NormalizeScaling, name: impl Into<String>) -> Self {
        Self {
            scaling,
            name: name.into(),
        }
    }

    /// The scaling rule this operation applies
    pub fn scaling(&self) -> NormalizeScaling {
        self.scaling
    }
}

impl Default for VectorNormalize {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureOperation for VectorNormalize {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, buffer: &mut [u8], layout: &PixelLayout) -> Result<()> {
        let channels = layout.format.channel_layout()?;
        layout.validate(buffer.len())?;
        if buffer.is_empty() {
            return Ok(());
        }

        let base = channels.color_offset;
        for row in buffer.chunks_exact_mut(layout.stride) {
            for pixel in row.chunks_exact_mut(channels.pixel_size) {
                let r = pixel[base] as f64;
                let g = pixel[base + 1] as f64;
                let b = pixel[base + 2] as f64;
                let norm = (r * r + g * g + b * b).sqrt();
                if norm == 0.0 {
                    continue;
                }
                match self.scaling {
                    NormalizeScaling::Truncate => {
                        pixel[base] = (r / norm) as u8;
                        pixel[base + 1] = (g / norm) as u8;
                        pixel[base + 2] = (b / norm) as u8;
                    }
                    NormalizeScaling::Rescale => {
                        pixel[base] = (r / norm * 255.0).round() as u8;
                        pixel[base + 1] = (g / norm * 255.0).round() as u8;
                        pixel[base + 2] = (b / norm * 255.0).round() as u8;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::PixelFormat;

    #[test]
    fn test_truncate_collapses_partial_components() {
        // Norm of (3, 4, 0) is 5; every quotient below 1 truncates to 0.
        let layout = PixelLayout::new(PixelFormat::Rgb24, 3, 1);
        let mut buffer = vec![3u8, 4, 0];
        VectorNormalize::new().apply(&mut buffer, &layout).unwrap();
        assert_eq!(buffer, [0, 0, 0]);
    }

    #[test]
    fn test_truncate_single_axis_becomes_one() {
        let layout = PixelLayout::new(PixelFormat::Rgb24, 3, 1);
        let mut buffer = vec![5u8, 0, 0];
        VectorNormalize::new().apply(&mut buffer, &layout).unwrap();
        assert_eq!(buffer, [1, 0, 0]);
    }

    #[test]
    fn test_rescale_maps_to_byte_range() {
        let layout = PixelLayout::new(PixelFormat::Rgb24, 3, 1);
        let mut buffer = vec![3u8, 4, 0];
        VectorNormalize::with_scaling(NormalizeScaling::Rescale)
            .apply(&mut buffer, &layout)
            .unwrap();
        assert_eq!(buffer, [153, 204, 0]);
    }

    #[test]
    fn test_rescale_preserves_single_axis() {
        let layout = PixelLayout::new(PixelFormat::Rgb24, 3, 1);
        let mut buffer = vec![0u8, 0, 255];
        VectorNormalize::with_scaling(NormalizeScaling::Rescale)
            .apply(&mut buffer, &layout)
            .unwrap();
        assert_eq!(buffer, [0, 0, 255]);
    }

    #[test]
    fn test_zero_vector_left_unchanged() {
        let layout = PixelLayout::new(PixelFormat::Rgb24, 6, 1);
        let mut buffer = vec![0u8, 0, 0, 3, 0, 0];
        for scaling in [NormalizeScaling::Truncate, NormalizeScaling::Rescale] {
            let mut copy = buffer.clone();
            VectorNormalize::with_scaling(scaling)
                .apply(&mut copy, &layout)
                .unwrap();
            assert_eq!(&copy[..3], [0, 0, 0]);
        }
        VectorNormalize::new().apply(&mut buffer, &layout).unwrap();
        assert_eq!(buffer, [0, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_alpha_byte_untouched_argb32() {
        let layout = PixelLayout::new(PixelFormat::Argb32, 4, 1);
        let mut buffer = vec![77u8, 0, 0, 200];
        VectorNormalize::with_scaling(NormalizeScaling::Rescale)
            .apply(&mut buffer, &layout)
            .unwrap();
        assert_eq!(buffer, [77, 0, 0, 255]);
    }

    #[test]
    fn test_unsupported_format_leaves_buffer_unmodified() {
        let layout = PixelLayout::new(PixelFormat::Argb1555, 2, 1);
        let mut buffer = vec![1u8, 2];
        assert!(
            VectorNormalize::new()
                .apply(&mut buffer, &layout)
                .is_err()
        );
        assert_eq!(buffer, [1, 2]);
    }

    #[test]
    fn test_default_name() {
        assert_eq!(VectorNormalize::new().name(), "N");
        assert_eq!(
            VectorNormalize::with_name(NormalizeScaling::Rescale, "renorm").name(),
            "renorm"
        );
    }
}
