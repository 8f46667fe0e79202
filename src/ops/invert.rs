//! Channel inversion

use super::TextureOperation;
use crate::error::Result;
use crate::format::Channel;
use crate::layout::PixelLayout;

/// Inverts one color channel across every pixel
///
/// Each selected byte `v` becomes `255 - v`. Inversion is self-inverse:
/// applying the same operation twice restores the original buffer.
#[derive(Debug, Clone)]
pub struct ChannelInvert {
    channel: Channel,
    name: String,
}

impl ChannelInvert {
    /// Create an inversion of the given channel (R = 0, G = 1, B = 2)
    ///
    /// Fails with a range error for any other index, before any buffer is
    /// touched.
    pub fn new(channel: i32) -> Result<Self> {
        let channel = Channel::from_index(channel)?;
        Ok(Self {
            name: format!("i{}", channel.index()),
            channel,
        })
    }

    /// Create an inversion with a caller-supplied label
    pub fn with_name(channel: i32, name: impl Into<String>) -> Result<Self> {
        let mut op = Self::new(channel)?;
        op.name = name.into();
        Ok(op)
    }

    /// The channel this operation inverts
    pub fn channel(&self) -> Channel {
        self.channel
    }
}

impl TextureOperation for ChannelInvert {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, buffer: &mut [u8], layout: &PixelLayout) -> Result<()> {
        let channels = layout.format.channel_layout()?;
        layout.validate(buffer.len())?;
        if buffer.is_empty() {
            return Ok(());
        }

        let offset = channels.channel_offset(self.channel);
        for row in buffer.chunks_exact_mut(layout.stride) {
            for pixel in row.chunks_exact_mut(channels.pixel_size) {
                pixel[offset] = 0xFF - pixel[offset];
            }
        }
        Ok(())
    }
}
