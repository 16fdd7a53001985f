//! DDS header structures.

use std::fmt;

use dxtc_decode::BlockFormat;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// DDS file header.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct DdsHeader {
    /// Header size (should be 124).
    pub size: u32,
    /// Header flags.
    pub flags: u32,
    /// Image height.
    pub height: u32,
    /// Image width.
    pub width: u32,
    /// Pitch or linear size.
    pub pitch_or_linear_size: u32,
    /// Depth (for volume textures).
    pub depth: u32,
    /// Number of mipmap levels.
    pub mipmap_count: u32,
    /// Reserved.
    pub reserved1: [u32; 11],
    /// Pixel format.
    pub pixel_format: DdsPixelFormat,
    /// Surface capabilities.
    pub caps: u32,
    /// Surface capabilities 2.
    pub caps2: u32,
    /// Surface capabilities 3.
    pub caps3: u32,
    /// Surface capabilities 4.
    pub caps4: u32,
    /// Reserved.
    pub reserved2: u32,
}

impl DdsHeader {
    /// Expected header size.
    pub const SIZE: u32 = 124;

    /// Check if this is a DX10 extended header.
    pub fn is_dx10(&self) -> bool {
        self.pixel_format.four_cc == FourCC::DX10
    }

    /// Mip levels stored, treating an unset count as one.
    pub fn mip_levels(&self) -> u32 {
        self.mipmap_count.max(1)
    }
}

/// DDS pixel format.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct DdsPixelFormat {
    /// Structure size (should be 32).
    pub size: u32,
    /// Pixel format flags.
    pub flags: u32,
    /// Four-character code for compression.
    pub four_cc: FourCC,
    /// Number of bits per pixel (for uncompressed).
    pub rgb_bit_count: u32,
    /// Red bit mask.
    pub r_bit_mask: u32,
    /// Green bit mask.
    pub g_bit_mask: u32,
    /// Blue bit mask.
    pub b_bit_mask: u32,
    /// Alpha bit mask.
    pub a_bit_mask: u32,
}

impl DdsPixelFormat {
    /// Expected structure size.
    pub const SIZE: u32 = 32;
    /// `four_cc` holds a valid code.
    pub const FLAG_FOURCC: u32 = 0x4;

    /// Whether the FourCC field is in use.
    pub fn has_four_cc(&self) -> bool {
        self.flags & Self::FLAG_FOURCC != 0
    }
}

/// Four-character code for compression type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(transparent)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    /// DXT1 compression.
    pub const DXT1: Self = Self(*b"DXT1");
    /// DXT2 compression (DXT3 with premultiplied alpha).
    pub const DXT2: Self = Self(*b"DXT2");
    /// DXT3 compression.
    pub const DXT3: Self = Self(*b"DXT3");
    /// DX10 extended header.
    pub const DX10: Self = Self(*b"DX10");
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            self.0.iter().try_for_each(|&b| write!(f, "{}", b as char))
        } else {
            write!(f, "0x{:08X}", u32::from_le_bytes(self.0))
        }
    }
}

/// DX10 extended header.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct DdsHeaderDxt10 {
    /// DXGI format.
    pub dxgi_format: u32,
    /// Resource dimension.
    pub resource_dimension: u32,
    /// Misc flags.
    pub misc_flag: u32,
    /// Array size.
    pub array_size: u32,
    /// Misc flags 2.
    pub misc_flags2: u32,
}

impl DdsHeaderDxt10 {
    /// BC1 UNORM format.
    pub const BC1_UNORM: u32 = 71;
    /// BC1 UNORM sRGB format.
    pub const BC1_UNORM_SRGB: u32 = 72;
    /// BC2 UNORM format.
    pub const BC2_UNORM: u32 = 74;
    /// BC2 UNORM sRGB format.
    pub const BC2_UNORM_SRGB: u32 = 75;
}

/// Map a FourCC (and DXGI format, for DX10 files) to a decodable block format.
pub fn block_format(four_cc: FourCC, dx10_format: Option<u32>) -> Option<BlockFormat> {
    match (four_cc, dx10_format) {
        (FourCC::DXT1, _) => Some(BlockFormat::Dxt1),
        (FourCC::DXT2 | FourCC::DXT3, _) => Some(BlockFormat::Dxt3),
        (FourCC::DX10, Some(DdsHeaderDxt10::BC1_UNORM | DdsHeaderDxt10::BC1_UNORM_SRGB)) => {
            Some(BlockFormat::Dxt1)
        }
        (FourCC::DX10, Some(DdsHeaderDxt10::BC2_UNORM | DdsHeaderDxt10::BC2_UNORM_SRGB)) => {
            Some(BlockFormat::Dxt3)
        }
        _ => None,
    }
}
