//! Error types for DDS handling.

use dxtc_decode::BlockFormat;
use thiserror::Error;

use crate::header::FourCC;

/// Errors that can occur when working with DDS files.
#[derive(Debug, Error)]
pub enum Error {
    /// Common library error.
    #[error("{0}")]
    Common(#[from] dxtc_common::Error),

    /// Decompression error.
    #[error("{0}")]
    Decode(#[from] dxtc_decode::Error),

    /// Invalid DDS magic.
    #[error("invalid DDS magic: expected 'DDS ', got {0:?}")]
    InvalidMagic([u8; 4]),

    /// Invalid DDS header.
    #[error("invalid DDS header: {0}")]
    InvalidHeader(String),

    /// Compression format other than DXT1/DXT3.
    #[error("unsupported pixel format: FourCC {four_cc}, DXGI format {dxgi_format:?}")]
    UnsupportedFormat {
        four_cc: FourCC,
        dxgi_format: Option<u32>,
    },

    /// Payload shorter than the top-level surface.
    #[error("{format} surface too small: expected {expected} bytes, got {actual}")]
    SurfaceTooSmall {
        format: BlockFormat,
        expected: usize,
        actual: usize,
    },
}

/// Result type for DDS operations.
pub type Result<T> = std::result::Result<T, Error>;
