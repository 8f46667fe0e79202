//! In-place pixel buffer operations for texture export
//!
//! This crate provides the pixel-level transformations an exporter runs on
//! decoded bitmap data before an image is written out, most of them
//! normal-map corrections: channel inversion, channel swapping, vertical
//! flip, and per-pixel vector normalization. The caller owns decoding and
//! encoding; operations here mutate the raw bytes in place.
//!
//! # Architecture
//!
//! - `format` - pixel format definitions and channel layout resolution
//! - `layout` - buffer layout metadata supplied by the caller's bitmap layer
//! - `ops` - the texture operations and the pipeline that sequences them
//! - `error` - error types
//!
//! # Example
//!
//! ```rust
//! use texture_prep::{ChannelInvert, PixelFormat, PixelLayout, TextureOperation};
//!
//! // One 2x1 RGB24 row: a red-ish and a blue-ish pixel.
//! let mut buffer = vec![200u8, 10, 10, 10, 10, 200];
//! let layout = PixelLayout::new(PixelFormat::Rgb24, 6, 1);
//!
//! let invert = ChannelInvert::new(0)?;
//! invert.apply(&mut buffer, &layout)?;
//! assert_eq!(buffer, [55, 10, 10, 245, 10, 200]);
//! # Ok::<(), texture_prep::TextureOpError>(())
//! ```

pub mod error;
pub mod format;
pub mod layout;
pub mod ops;

pub use error::{Result, TextureOpError};
pub use format::{Channel, ChannelLayout, PixelFormat};
pub use layout::PixelLayout;
pub use ops::{
    ChannelInvert, ChannelSwap, NormalizeScaling, OperationPipeline, TextureOperation,
    VectorNormalize, VerticalFlip,
};
