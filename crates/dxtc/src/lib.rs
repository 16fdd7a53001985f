//! dxtc - DXT1/DXT3 texture decompression.
//!
//! This crate provides a unified interface to the dxtc crates.
//!
//! # Crates
//!
//! - [`dxtc_common`] - Byte sources and shared errors
//! - [`dxtc_decode`] - DXT1/DXT3 block decoding to RGBA8888
//! - [`dxtc_dds`] - DDS container reading
//!
//! # Example
//!
//! ```no_run
//! use dxtc::prelude::*;
//!
//! // Raw payload with dimensions known from elsewhere
//! let payload = std::fs::read("texture.bc1")?;
//! let rgba = decompress_dxt1(&payload, 256, 256)?;
//!
//! // Or a DDS file, which carries its own dimensions and format
//! let image = decode_dds(&std::fs::read("texture.dds")?)?;
//! println!("{}x{} {}", image.width, image.height, image.format);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use dxtc_common as common;
pub use dxtc_dds as dds;
pub use dxtc_decode as decode;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use dxtc_common::{BinaryReader, ByteSource, StreamReader};
    pub use dxtc_dds::{decode_dds, DdsFile, DecodedImage};
    pub use dxtc_decode::{
        decompress, decompress_dxt1, decompress_dxt1_from_reader, decompress_dxt3,
        decompress_dxt3_from_reader, decompress_from_reader, BlockFormat,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
