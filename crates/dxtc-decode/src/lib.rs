//! DXT1 and DXT3 texture decompression.
//!
//! Converts block-compressed payloads (no container headers) into row-major
//! RGBA8888 pixel buffers. Width and height are supplied by the caller.
//!
//! | Format | Block size | Layout (little-endian) |
//! |--------|------------|------------------------|
//! | DXT1   | 8 bytes    | `u16 color0`, `u16 color1`, `u32 indices` |
//! | DXT3   | 16 bytes   | 8 bytes of 4-bit alpha, then a DXT1 color block |
//!
//! Decoding is stateless. Each call owns its output and every block is a pure
//! function of its own bytes, so independent calls may run on any number of
//! threads.
//!
//! Images whose sides are not multiples of 4 still consume a full block grid
//! (`ceil(w/4) * ceil(h/4)` blocks); pixels of edge blocks that fall outside
//! the image are discarded.
//!
//! # Example
//!
//! ```
//! use dxtc_decode::decompress_dxt1;
//!
//! // One block: color0 = red, color1 = blue, every index 0.
//! let block = [0x00, 0xF8, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00];
//! let pixels = decompress_dxt1(&block, 4, 4)?;
//!
//! assert_eq!(pixels.len(), 4 * 4 * 4);
//! assert_eq!(&pixels[..4], &[255, 0, 0, 255]);
//! # Ok::<(), dxtc_decode::Error>(())
//! ```

mod decode;
mod error;

pub mod alpha;
pub mod block;
pub mod color;
pub mod dxt1;
pub mod dxt3;
pub mod format;
pub mod writer;

pub use block::{ColorBlock, ColorMode, DecodedBlock};
pub use color::{Color565, Rgb888, Rgba8888};
pub use decode::{
    decompress, decompress_dxt1, decompress_dxt1_from_reader, decompress_dxt3,
    decompress_dxt3_from_reader, decompress_from_reader, decompress_from_source, output_len,
};
pub use error::{Error, Result};
pub use format::BlockFormat;
