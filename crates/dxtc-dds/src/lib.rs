//! DDS container reading for DXT1 and DXT3 textures.
//!
//! A DDS file is the `"DDS "` magic, a 124-byte header, an optional 20-byte
//! DX10 extension, and then the compressed surfaces, largest mip first. This
//! crate resolves the block format from the header and hands the top-level
//! surface to [`dxtc_decode`].
//!
//! # Example
//!
//! ```no_run
//! use dxtc_dds::decode_dds;
//!
//! let data = std::fs::read("path/to/texture.dds")?;
//! let image = decode_dds(&data)?;
//! println!("{}x{} {}", image.width, image.height, image.format);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod header;
mod surface;

pub use error::{Error, Result};
pub use header::{block_format, DdsHeader, DdsHeaderDxt10, DdsPixelFormat, FourCC};
pub use surface::{decode_dds, DdsFile, DecodedImage};

/// DDS file magic bytes ("DDS ").
pub const DDS_MAGIC: &[u8; 4] = b"DDS ";
