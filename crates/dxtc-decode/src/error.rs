//! Error types for block decompression.

use thiserror::Error;

/// Errors that can occur while decompressing a texture.
#[derive(Debug, Error)]
pub enum Error {
    /// Byte source error, including running out of input.
    #[error("{0}")]
    Common(#[from] dxtc_common::Error),

    /// Width or height is zero, or the output size does not fit in memory.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Unrecognised block format name.
    #[error("unknown block format: {0:?}")]
    UnknownFormat(String),
}

impl Error {
    /// Whether the input ran out before every block could be read.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Error::Common(e) if e.is_eof())
    }
}

/// Result type for decompression.
pub type Result<T> = std::result::Result<T, Error>;
