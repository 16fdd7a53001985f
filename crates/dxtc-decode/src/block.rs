//! The 8-byte color block shared by DXT1 and DXT3, and the decoded 4x4 tile.

use dxtc_common::ByteSource;

use crate::color::{Color565, Rgb888, Rgba8888};
use crate::Result;

/// How the two interpolated palette entries of a color block are formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Entries 2 and 3 are the 1/3 and 2/3 points between the endpoints.
    FourColorOpaque,
    /// Entry 2 is the midpoint, entry 3 is black. Alpha stays opaque.
    ThreeColorWithBlack,
}

impl ColorMode {
    /// DXT1 signals the mode through endpoint order: `c0 > c1` selects four colors.
    #[inline]
    pub fn from_endpoints(c0: Color565, c1: Color565) -> Self {
        if c0.raw() > c1.raw() {
            ColorMode::FourColorOpaque
        } else {
            ColorMode::ThreeColorWithBlack
        }
    }
}

/// Two endpoint colors and sixteen 2-bit palette indices.
///
/// Layout (little-endian): `u16 color0`, `u16 color1`, `u32 indices`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBlock {
    pub color0: Color565,
    pub color1: Color565,
    pub indices: u32,
}

impl ColorBlock {
    /// Size of a color block in bytes.
    pub const SIZE: usize = 8;

    /// Read one color block, fields in stream order.
    #[inline]
    pub fn read<S: ByteSource>(source: &mut S) -> Result<Self> {
        let color0 = Color565::from_raw(source.read_u16()?);
        let color1 = Color565::from_raw(source.read_u16()?);
        let indices = source.read_u32()?;
        Ok(Self {
            color0,
            color1,
            indices,
        })
    }

    /// The mode implied by endpoint order.
    #[inline]
    pub fn implied_mode(&self) -> ColorMode {
        ColorMode::from_endpoints(self.color0, self.color1)
    }

    /// Build the four-entry palette for `mode`.
    pub fn palette(&self, mode: ColorMode) -> [Rgb888; 4] {
        let c0 = self.color0.to_rgb888();
        let c1 = self.color1.to_rgb888();

        match mode {
            ColorMode::FourColorOpaque => [c0, c1, c0.blend(2, c1, 1), c0.blend(1, c1, 2)],
            ColorMode::ThreeColorWithBlack => [c0, c1, c0.blend(1, c1, 1), Rgb888::BLACK],
        }
    }

    /// Palette index of the pixel at `offset` (0..16, row-major).
    #[inline]
    pub const fn index_at(&self, offset: usize) -> usize {
        ((self.indices >> (2 * offset)) & 0b11) as usize
    }
}

/// A fully decoded 4x4 tile in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedBlock {
    pub pixels: [Rgba8888; 16],
}

impl DecodedBlock {
    /// Pixels per side.
    pub const DIM: usize = 4;

    /// A tile with every pixel set to `pixel`.
    pub const fn splat(pixel: Rgba8888) -> Self {
        Self { pixels: [pixel; 16] }
    }

    /// Pixel at column `x`, row `y`, or `None` outside the tile.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba8888> {
        if x < Self::DIM && y < Self::DIM {
            Some(self.pixels[y * Self::DIM + x])
        } else {
            None
        }
    }
}
