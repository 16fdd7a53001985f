//! DXT1 (BC1) blocks: one color block, alpha implied.
//!
//! Endpoint order picks the palette mode. In three-color mode index 3 decodes
//! to opaque black, not transparent black, so existing assets decode byte for
//! byte the same as they always have.

use dxtc_common::ByteSource;

use crate::block::{ColorBlock, DecodedBlock};
use crate::Result;

/// Encoded size of a DXT1 block.
pub const BLOCK_SIZE: usize = ColorBlock::SIZE;

/// A DXT1 block as read from the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dxt1Block {
    pub color: ColorBlock,
}

impl Dxt1Block {
    /// Read one block.
    #[inline]
    pub fn read<S: ByteSource>(source: &mut S) -> Result<Self> {
        Ok(Self {
            color: ColorBlock::read(source)?,
        })
    }

    /// Decode to sixteen RGBA pixels. Alpha is always 255.
    pub fn decode(&self) -> DecodedBlock {
        let palette = self.color.palette(self.color.implied_mode());

        let mut out = DecodedBlock::splat(Default::default());
        for (offset, pixel) in out.pixels.iter_mut().enumerate() {
            *pixel = palette[self.color.index_at(offset)].with_alpha(255);
        }
        out
    }
}
