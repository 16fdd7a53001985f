//! Block format descriptors and payload size arithmetic.

use std::fmt;
use std::str::FromStr;

use crate::{dxt1, dxt3, Error};

/// Supported block-compressed formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFormat {
    /// DXT1 / BC1: 8 bytes per block, implied 1-bit alpha.
    Dxt1,
    /// DXT3 / BC2: 16 bytes per block, explicit 4-bit alpha.
    Dxt3,
}

impl BlockFormat {
    /// Encoded bytes per 4x4 block.
    pub const fn block_size(self) -> usize {
        match self {
            BlockFormat::Dxt1 => dxt1::BLOCK_SIZE,
            BlockFormat::Dxt3 => dxt3::BLOCK_SIZE,
        }
    }

    /// Bytes of compressed payload needed for a `width` x `height` image,
    /// or `None` if that does not fit in a `usize`.
    pub fn compressed_size(self, width: u32, height: u32) -> Option<usize> {
        let (blocks_x, blocks_y) = block_grid(width, height);
        blocks_x
            .checked_mul(blocks_y)?
            .checked_mul(self.block_size())
    }
}

impl fmt::Display for BlockFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockFormat::Dxt1 => f.write_str("DXT1"),
            BlockFormat::Dxt3 => f.write_str("DXT3"),
        }
    }
}

impl FromStr for BlockFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dxt1" | "bc1" => Ok(BlockFormat::Dxt1),
            "dxt3" | "bc2" => Ok(BlockFormat::Dxt3),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Number of 4x4 blocks across and down, rounding partial blocks up.
#[inline]
pub fn block_grid(width: u32, height: u32) -> (usize, usize) {
    ((width as usize).div_ceil(4), (height as usize).div_ceil(4))
}
