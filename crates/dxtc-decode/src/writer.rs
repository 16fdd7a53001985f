//! Placement of decoded tiles into a row-major RGBA8888 image.

use crate::block::DecodedBlock;

/// Bytes per output pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Writes decoded 4x4 tiles into an output buffer of `width * height` pixels.
///
/// Tiles on the right and bottom edges of an image whose dimensions are not
/// multiples of 4 hang over the image bounds. Pixels outside the image are
/// dropped, so the buffer is never written past `width * height * 4`.
#[derive(Debug)]
pub struct PixelWriter<'a> {
    pixels: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> PixelWriter<'a> {
    /// Wrap `pixels`, which must hold exactly `width * height * 4` bytes.
    ///
    /// # Panics
    ///
    /// Panics if the buffer length does not match the dimensions.
    pub fn new(pixels: &'a mut [u8], width: usize, height: usize) -> Self {
        assert_eq!(
            pixels.len(),
            width * height * BYTES_PER_PIXEL,
            "output buffer does not match {width}x{height}"
        );
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Row stride in bytes.
    #[inline]
    pub const fn stride(&self) -> usize {
        self.width * BYTES_PER_PIXEL
    }

    /// Byte offset of pixel (`x`, `y`), or `None` outside the image.
    #[inline]
    pub const fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.stride() + x * BYTES_PER_PIXEL)
        } else {
            None
        }
    }

    /// Write one RGBA quad at image coordinate (`x`, `y`), if it is in range.
    #[inline]
    pub fn write_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        if let Some(offset) = self.offset(x, y) {
            self.pixels[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&rgba);
        }
    }

    /// Write a decoded tile at block coordinate (`bx`, `by`).
    pub fn write_block(&mut self, bx: usize, by: usize, block: &DecodedBlock) {
        for py in 0..DecodedBlock::DIM {
            for px in 0..DecodedBlock::DIM {
                let pixel = block.pixels[py * DecodedBlock::DIM + px];
                self.write_pixel(
                    bx * DecodedBlock::DIM + px,
                    by * DecodedBlock::DIM + py,
                    pixel.to_bytes(),
                );
            }
        }
    }
}
