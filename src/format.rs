//! Pixel format definitions
//!
//! This module defines the pixel packings understood by the texture
//! operations and the resolution from a format to the byte layout of its
//! color channels.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextureOpError};

/// Pixel formats as reported by the caller's bitmap layer
///
/// Values match the GDI+ `PixelFormat` constants, which encode flag bits and
/// a bits-per-pixel field alongside a small ordinal. Only the 24/32-bit RGB
/// and ARGB packings are operated on; the remaining variants exist so that
/// any value the bitmap layer hands over can be represented and rejected
/// cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(i32)]
pub enum PixelFormat {
    /// Unrecognized or unset format
    #[default]
    Undefined = 0,
    Indexed1 = 0x0003_0101,
    Indexed4 = 0x0003_0402,
    Indexed8 = 0x0003_0803,
    GrayScale16 = 0x0010_1004,
    Rgb555 = 0x0002_1005,
    Rgb565 = 0x0002_1006,
    Argb1555 = 0x0006_1007,
    /// 3 bytes per pixel, R,G,B order
    Rgb24 = 0x0002_1808,
    /// 4 bytes per pixel, R,G,B plus one padding byte
    Rgb32 = 0x0002_2009,
    /// 4 bytes per pixel, leading alpha byte then R,G,B
    Argb32 = 0x0026_200A,
    /// Same byte layout as [`PixelFormat::Argb32`], alpha pre-multiplied
    PArgb32 = 0x000E_200B,
    Rgb48 = 0x0010_300C,
    Argb64 = 0x0034_400D,
    PArgb64 = 0x001A_400E,
    /// Flag-only canonical value, treated as 24-bit RGB
    Canonical = 0x0020_0000,
}

impl From<i32> for PixelFormat {
    fn from(value: i32) -> Self {
        match value {
            0x0003_0101 => PixelFormat::Indexed1,
            0x0003_0402 => PixelFormat::Indexed4,
            0x0003_0803 => PixelFormat::Indexed8,
            0x0010_1004 => PixelFormat::GrayScale16,
            0x0002_1005 => PixelFormat::Rgb555,
            0x0002_1006 => PixelFormat::Rgb565,
            0x0006_1007 => PixelFormat::Argb1555,
            0x0002_1808 => PixelFormat::Rgb24,
            0x0002_2009 => PixelFormat::Rgb32,
            0x0026_200A => PixelFormat::Argb32,
            0x000E_200B => PixelFormat::PArgb32,
            0x0010_300C => PixelFormat::Rgb48,
            0x0034_400D => PixelFormat::Argb64,
            0x001A_400E => PixelFormat::PArgb64,
            0x0020_0000 => PixelFormat::Canonical,
            _ => PixelFormat::Undefined,
        }
    }
}

impl PixelFormat {
    /// Storage size of one pixel in bits
    ///
    /// `Canonical` carries no size bits of its own and is counted as 24-bit
    /// RGB, the layout the channel operations treat it as.
    pub fn bits_per_pixel(self) -> u32 {
        match self {
            PixelFormat::Undefined => 0,
            PixelFormat::Indexed1 => 1,
            PixelFormat::Indexed4 => 4,
            PixelFormat::Indexed8 => 8,
            PixelFormat::GrayScale16
            | PixelFormat::Rgb555
            | PixelFormat::Rgb565
            | PixelFormat::Argb1555 => 16,
            PixelFormat::Rgb24 | PixelFormat::Canonical => 24,
            PixelFormat::Rgb32 | PixelFormat::Argb32 | PixelFormat::PArgb32 => 32,
            PixelFormat::Rgb48 => 48,
            PixelFormat::Argb64 | PixelFormat::PArgb64 => 64,
        }
    }

    /// Resolve the byte layout of this format's color channels
    ///
    /// Computed once per operation, not per pixel. Fails for every format
    /// that is not an 8-bit-per-channel RGB or ARGB packing.
    pub fn channel_layout(self) -> Result<ChannelLayout> {
        let pixel_size = (self.bits_per_pixel() / 8) as usize;
        match self {
            PixelFormat::Canonical | PixelFormat::Rgb24 | PixelFormat::Rgb32 => Ok(ChannelLayout {
                pixel_size,
                color_offset: 0,
            }),
            PixelFormat::Argb32 | PixelFormat::PArgb32 => Ok(ChannelLayout {
                pixel_size,
                color_offset: 1,
            }),
            other => Err(TextureOpError::unsupported_format(other)),
        }
    }

    /// Check if the color-channel operations handle this format
    pub fn is_supported(self) -> bool {
        self.channel_layout().is_ok()
    }
}

/// One color component of a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl Channel {
    /// Resolve a raw channel index (R = 0, G = 1, B = 2)
    pub fn from_index(index: i32) -> Result<Self> {
        match index {
            0 => Ok(Channel::Red),
            1 => Ok(Channel::Green),
            2 => Ok(Channel::Blue),
            other => Err(TextureOpError::channel_out_of_range(other)),
        }
    }

    /// Logical index of this channel
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Byte layout of the color channels within one pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelLayout {
    /// Total bytes per pixel
    pub pixel_size: usize,
    /// Byte offset of the red channel from the pixel start
    pub color_offset: usize,
}

impl ChannelLayout {
    /// Byte offset of a channel from the pixel start
    pub fn channel_offset(&self, channel: Channel) -> usize {
        self.color_offset + channel.index()
    }
}
