//! Whole-image decompression entry points.

use std::io::Read;

use dxtc_common::{BinaryReader, ByteSource, StreamReader};
use tracing::debug;

use crate::dxt1::Dxt1Block;
use crate::dxt3::Dxt3Block;
use crate::format::{block_grid, BlockFormat};
use crate::writer::{PixelWriter, BYTES_PER_PIXEL};
use crate::{Error, Result};

/// Decompress a DXT1 payload into `width * height * 4` RGBA bytes.
pub fn decompress_dxt1(data: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    decompress(BlockFormat::Dxt1, data, width, height)
}

/// Decompress a DXT1 payload read sequentially from `reader`.
pub fn decompress_dxt1_from_reader<R: Read>(reader: R, width: u32, height: u32) -> Result<Vec<u8>> {
    decompress_from_reader(BlockFormat::Dxt1, reader, width, height)
}

/// Decompress a DXT3 payload into `width * height * 4` RGBA bytes.
pub fn decompress_dxt3(data: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    decompress(BlockFormat::Dxt3, data, width, height)
}

/// Decompress a DXT3 payload read sequentially from `reader`.
pub fn decompress_dxt3_from_reader<R: Read>(reader: R, width: u32, height: u32) -> Result<Vec<u8>> {
    decompress_from_reader(BlockFormat::Dxt3, reader, width, height)
}

/// Decompress an in-memory payload of the given format.
///
/// Bytes past the last block are ignored.
pub fn decompress(format: BlockFormat, data: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    decompress_from_source(format, &mut BinaryReader::new(data), width, height)
}

/// Decompress a payload of the given format from a stream.
pub fn decompress_from_reader<R: Read>(
    format: BlockFormat,
    reader: R,
    width: u32,
    height: u32,
) -> Result<Vec<u8>> {
    decompress_from_source(format, &mut StreamReader::new(reader), width, height)
}

/// Decompress from any [`ByteSource`].
///
/// Blocks are consumed top to bottom, left to right within a row. The output
/// is row-major RGBA8888 with a stride of `width * 4` bytes. If the source
/// runs dry before the last block, the whole call fails and nothing is
/// returned.
pub fn decompress_from_source<S: ByteSource>(
    format: BlockFormat,
    source: &mut S,
    width: u32,
    height: u32,
) -> Result<Vec<u8>> {
    let len = output_len(width, height)?;
    format
        .compressed_size(width, height)
        .ok_or(Error::InvalidDimensions { width, height })?;
    let (blocks_x, blocks_y) = block_grid(width, height);

    debug!(%format, width, height, blocks_x, blocks_y, "decompressing");

    let mut pixels = vec![0u8; len];
    let mut writer = PixelWriter::new(&mut pixels, width as usize, height as usize);

    for by in 0..blocks_y {
        for bx in 0..blocks_x {
            let block = match format {
                BlockFormat::Dxt1 => Dxt1Block::read(source)?.decode(),
                BlockFormat::Dxt3 => Dxt3Block::read(source)?.decode(),
            };
            writer.write_block(bx, by, &block);
        }
    }

    Ok(pixels)
}

/// Output size for the given dimensions, rejecting zero and overflow.
pub fn output_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }

    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .ok_or(Error::InvalidDimensions { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_len() {
        assert_eq!(output_len(4, 4).unwrap(), 64);
        assert_eq!(output_len(3, 7).unwrap(), 84);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            output_len(0, 4),
            Err(Error::InvalidDimensions { width: 0, height: 4 })
        ));
        assert!(matches!(
            output_len(4, 0),
            Err(Error::InvalidDimensions { width: 4, height: 0 })
        ));
    }

    #[test]
    fn test_zero_dimensions_do_not_read() {
        let mut source = BinaryReader::new(&[0u8; 16]);

        assert!(decompress_from_source(BlockFormat::Dxt1, &mut source, 0, 0).is_err());
        assert_eq!(source.position(), 0);
    }

    #[test]
    fn test_consumes_exactly_the_block_grid() {
        let data = [0u8; 64];
        let mut source = BinaryReader::new(&data);

        decompress_from_source(BlockFormat::Dxt1, &mut source, 8, 5).unwrap();
        assert_eq!(source.position(), 2 * 2 * 8);
    }
}
