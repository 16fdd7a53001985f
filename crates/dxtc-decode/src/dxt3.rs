//! DXT3 (BC2) blocks: explicit 4-bit alpha followed by a color block.
//!
//! The color block always decodes in four-color mode. Endpoint order never
//! implies transparency here since alpha is stored per pixel.

use dxtc_common::ByteSource;

use crate::alpha::alpha_at;
use crate::block::{ColorBlock, ColorMode, DecodedBlock};
use crate::Result;

/// Encoded size of a DXT3 block.
pub const BLOCK_SIZE: usize = 8 + ColorBlock::SIZE;

/// A DXT3 block as read from the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dxt3Block {
    /// Sixteen nibble-packed alpha values, low nibble first.
    pub alpha: [u8; 8],
    pub color: ColorBlock,
}

impl Dxt3Block {
    /// Read one block: alpha table, then color block.
    #[inline]
    pub fn read<S: ByteSource>(source: &mut S) -> Result<Self> {
        let alpha = source.read_array::<8>()?;
        let color = ColorBlock::read(source)?;
        Ok(Self { alpha, color })
    }

    /// Decode to sixteen RGBA pixels.
    pub fn decode(&self) -> DecodedBlock {
        let palette = self.color.palette(ColorMode::FourColorOpaque);

        let mut out = DecodedBlock::splat(Default::default());
        for (offset, pixel) in out.pixels.iter_mut().enumerate() {
            let alpha = alpha_at(&self.alpha, offset);
            *pixel = palette[self.color.index_at(offset)].with_alpha(alpha);
        }
        out
    }
}
