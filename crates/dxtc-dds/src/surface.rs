//! Locating and decoding the top-level surface of a DDS file.

use dxtc_common::BinaryReader;
use dxtc_decode::BlockFormat;
use tracing::trace;

use crate::header::{block_format, DdsHeader, DdsHeaderDxt10, DdsPixelFormat};
use crate::{Error, Result, DDS_MAGIC};

/// A parsed DDS file borrowing its payload.
#[derive(Debug, Clone)]
pub struct DdsFile<'a> {
    header: DdsHeader,
    dx10: Option<DdsHeaderDxt10>,
    format: BlockFormat,
    surface_len: usize,
    payload: &'a [u8],
}

/// A decoded RGBA8888 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub format: BlockFormat,
    /// Row-major RGBA, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl<'a> DdsFile<'a> {
    /// Parse the header of a DDS file.
    ///
    /// Only DXT1 and DXT3 (including DXT2 and the equivalent DX10 BC1/BC2
    /// formats) are accepted.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        if data.len() < 4 {
            return Err(Error::InvalidHeader("file too small".into()));
        }

        let mut magic = [0u8; 4];
        magic.copy_from_slice(&data[..4]);
        if &magic != DDS_MAGIC {
            return Err(Error::InvalidMagic(magic));
        }

        let mut reader = BinaryReader::new(&data[4..]);
        let header: DdsHeader = reader.read_struct()?;

        let size = header.size;
        if size != DdsHeader::SIZE {
            return Err(Error::InvalidHeader(format!(
                "header size {size}, expected {}",
                DdsHeader::SIZE
            )));
        }

        let pixel_format = header.pixel_format;
        let pf_size = pixel_format.size;
        if pf_size != DdsPixelFormat::SIZE {
            return Err(Error::InvalidHeader(format!(
                "pixel format size {pf_size}, expected {}",
                DdsPixelFormat::SIZE
            )));
        }
        if !pixel_format.has_four_cc() {
            return Err(Error::InvalidHeader("uncompressed pixel format".into()));
        }

        let (width, height) = (header.width, header.height);
        if width == 0 || height == 0 {
            return Err(Error::InvalidHeader(format!(
                "zero dimension {width}x{height}"
            )));
        }

        let dx10: Option<DdsHeaderDxt10> = if header.is_dx10() {
            Some(reader.read_struct()?)
        } else {
            None
        };
        let dxgi_format = dx10.map(|h| h.dxgi_format);

        let four_cc = pixel_format.four_cc;
        let format = block_format(four_cc, dxgi_format).ok_or(Error::UnsupportedFormat {
            four_cc,
            dxgi_format,
        })?;

        let surface_len = format.compressed_size(width, height).ok_or_else(|| {
            Error::InvalidHeader(format!("{width}x{height} {format} surface size overflows"))
        })?;

        trace!(%four_cc, ?dxgi_format, %format, width, height, surface_len, "parsed DDS header");

        Ok(Self {
            header,
            dx10,
            format,
            surface_len,
            payload: reader.remaining_bytes(),
        })
    }

    /// The main header.
    pub fn header(&self) -> &DdsHeader {
        &self.header
    }

    /// The DX10 extension header, if present.
    pub fn dx10_header(&self) -> Option<&DdsHeaderDxt10> {
        self.dx10.as_ref()
    }

    /// Block format of the surface data.
    pub fn format(&self) -> BlockFormat {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.header.width
    }

    pub fn height(&self) -> u32 {
        self.header.height
    }

    /// Everything after the headers: all mips and faces.
    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }

    /// Size in bytes of the top-level mip.
    pub fn surface_len(&self) -> usize {
        self.surface_len
    }

    /// Compressed bytes of the top-level mip.
    pub fn surface(&self) -> Result<&'a [u8]> {
        let expected = self.surface_len;
        self.payload
            .get(..expected)
            .ok_or(Error::SurfaceTooSmall {
                format: self.format,
                expected,
                actual: self.payload.len(),
            })
    }

    /// Decode the top-level mip to RGBA8888.
    pub fn decode(&self) -> Result<DecodedImage> {
        let (width, height) = (self.width(), self.height());
        let pixels = dxtc_decode::decompress(self.format, self.surface()?, width, height)?;
        Ok(DecodedImage {
            width,
            height,
            format: self.format,
            pixels,
        })
    }
}

/// Parse a DDS file and decode its top-level surface.
///
/// Further mip levels and cube faces are ignored.
pub fn decode_dds(data: &[u8]) -> Result<DecodedImage> {
    DdsFile::parse(data)?.decode()
}
