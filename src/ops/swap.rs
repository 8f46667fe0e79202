//! Channel exchange

use super::TextureOperation;
use crate::error::Result;
use crate::format::Channel;
use crate::layout::PixelLayout;

/// Exchanges two color channels across every pixel
///
/// Swapping the same pair twice restores the original buffer. Constructed
/// with equal indices, the operation touches nothing.
#[derive(Debug, Clone)]
pub struct ChannelSwap {
    channel_a: Channel,
    channel_b: Channel,
    name: String,
}

impl ChannelSwap {
    /// Create a swap of two channels (R = 0, G = 1, B = 2)
    ///
    /// Each index is validated independently; any value outside the range
    /// fails construction before any buffer is touched.
    pub fn new(channel_a: i32, channel_b: i32) -> Result<Self> {
        let channel_a = Channel::from_index(channel_a)?;
        let channel_b = Channel::from_index(channel_b)?;
        Ok(Self {
            name: format!("s{}{}", channel_a.index(), channel_b.index()),
            channel_a,
            channel_b,
        })
    }

    /// Create a swap with a caller-supplied label
    pub fn with_name(channel_a: i32, channel_b: i32, name: impl Into<String>) -> Result<Self> {
        let mut op = Self::new(channel_a, channel_b)?;
        op.name = name.into();
        Ok(op)
    }

    /// The pair of channels this operation exchanges
    pub fn channels(&self) -> (Channel, Channel) {
        (self.channel_a, self.channel_b)
    }
}

impl TextureOperation for ChannelSwap {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, buffer: &mut [u8], layout: &PixelLayout) -> Result<()> {
        // Swapping a channel with itself touches nothing, format included.
        if self.channel_a == self.channel_b {
            return Ok(());
        }

        let channels = layout.format.channel_layout()?;
        layout.validate(buffer.len())?;
        if buffer.is_empty() {
            return Ok(());
        }

        let i = channels.channel_offset(self.channel_a);
        let j = channels.channel_offset(self.channel_b);
        for row in buffer.chunks_exact_mut(layout.stride) {
            for pixel in row.chunks_exact_mut(channels.pixel_size) {
                pixel.swap(i, j);
            }
        }
        Ok(())
    }
}
