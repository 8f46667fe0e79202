//! Texture operations
//!
//! Each operation is a named, stateless transform applied in place to a raw
//! pixel buffer:
//! - [`ChannelInvert`] - inverts one color channel
//! - [`ChannelSwap`] - exchanges two color channels
//! - [`VerticalFlip`] - reverses row order
//! - [`VectorNormalize`] - rescales each pixel's R/G/B vector to unit length
//!
//! Operations are constructed once and may be applied to any number of
//! buffers, from any number of threads. [`OperationPipeline`] sequences
//! several of them over one buffer.

mod flip;
mod invert;
mod normalize;
mod swap;

pub use flip::VerticalFlip;
pub use invert::ChannelInvert;
pub use normalize::{NormalizeScaling, VectorNormalize};
pub use swap::ChannelSwap;

use tracing::debug;

use crate::error::Result;
use crate::layout::PixelLayout;

/// A named, in-place transform over a raw pixel buffer
///
/// `apply` mutates the buffer in place and returns nothing on success.
/// Format and length checks run before any byte is written, so a failed
/// apply leaves the buffer untouched.
pub trait TextureOperation {
    /// Caller-facing label, used for caching and logging, not interpreted
    fn name(&self) -> &str;

    /// Apply the transform to `buffer` described by `layout`
    fn apply(&self, buffer: &mut [u8], layout: &PixelLayout) -> Result<()>;
}

/// Ordered sequence of texture operations applied to one buffer
///
/// The pipeline owns its operations and applies them in insertion order,
/// stopping at the first failure.
#[derive(Default)]
pub struct OperationPipeline {
    ops: Vec<Box<dyn TextureOperation + Send + Sync>>,
}

impl OperationPipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Append an operation
    pub fn push(&mut self, op: impl TextureOperation + Send + Sync + 'static) {
        self.ops.push(Box::new(op));
    }

    /// Append an operation, builder style
    pub fn with_op(mut self, op: impl TextureOperation + Send + Sync + 'static) -> Self {
        self.push(op);
        self
    }

    /// Apply every operation in order to the same buffer
    pub fn apply(&self, buffer: &mut [u8], layout: &PixelLayout) -> Result<()> {
        for op in &self.ops {
            debug!(op = op.name(), "applying texture operation");
            op.apply(buffer, layout)?;
        }
        Ok(())
    }

    /// Labels of the contained operations, in application order
    pub fn names(&self) -> Vec<&str> {
        self.ops.iter().map(|op| op.name()).collect()
    }

    /// Number of operations in the pipeline
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the pipeline contains no operations
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
