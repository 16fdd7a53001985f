//! Binary reader for zero-copy parsing of byte slices.
//!
//! This module provides [`BinaryReader`], a cursor-like type that reads
//! binary data from a byte slice without copying, and the [`ByteSource`]
//! trait shared with [`crate::StreamReader`].

use byteorder::{ByteOrder, LittleEndian};
use zerocopy::FromBytes;

use crate::{Error, Result};

/// A sequential source of little-endian binary data.
///
/// Block decoders are written against this trait so the same code can consume
/// an in-memory buffer or a stream. Implementors only supply
/// [`read_array`](ByteSource::read_array); the integer readers are derived.
pub trait ByteSource {
    /// Read exactly `N` bytes and advance.
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]>;

    /// Number of bytes consumed so far.
    fn position(&self) -> usize;

    /// Read a single byte.
    #[inline]
    fn read_u8(&mut self) -> Result<u8> {
        self.read_array::<1>().map(|b| b[0])
    }

    /// Read a little-endian u16.
    #[inline]
    fn read_u16(&mut self) -> Result<u16> {
        self.read_array::<2>().map(|b| LittleEndian::read_u16(&b))
    }

    /// Read a little-endian u32.
    #[inline]
    fn read_u32(&mut self) -> Result<u32> {
        self.read_array::<4>().map(|b| LittleEndian::read_u32(&b))
    }
}

/// A binary reader that provides zero-copy reading from a byte slice.
///
/// It maintains a position and reads data without copying where possible.
///
/// # Example
///
/// ```
/// use dxtc_common::{BinaryReader, ByteSource};
///
/// let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
/// let mut reader = BinaryReader::new(&data);
///
/// assert_eq!(reader.read_u32().unwrap(), 0x04030201);
/// assert_eq!(reader.read_u16().unwrap(), 0x0605);
/// assert_eq!(reader.remaining(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BinaryReader<'a> {
    /// Create a new reader from a byte slice.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Get the total length of the underlying buffer.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Get the number of bytes remaining to read.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Check if there are no more bytes to read.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Get the remaining bytes as a slice.
    #[inline]
    pub fn remaining_bytes(&self) -> &'a [u8] {
        &self.data[self.position.min(self.data.len())..]
    }

    /// Peek at bytes without advancing the position.
    #[inline]
    pub fn peek_bytes(&self, count: usize) -> Result<&'a [u8]> {
        if self.remaining() < count {
            return Err(Error::UnexpectedEof {
                needed: count,
                available: self.remaining(),
            });
        }
        Ok(&self.data[self.position..self.position + count])
    }

    /// Read bytes and advance the position.
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let bytes = self.peek_bytes(count)?;
        self.position += count;
        Ok(bytes)
    }

    /// Read a struct using zerocopy.
    ///
    /// The struct must implement `FromBytes` from the zerocopy crate.
    #[inline]
    pub fn read_struct<T: FromBytes>(&mut self) -> Result<T> {
        let size = std::mem::size_of::<T>();
        let bytes = self.read_bytes(size)?;
        T::read_from_bytes(bytes).map_err(|_| Error::UnexpectedEof {
            needed: size,
            available: bytes.len(),
        })
    }
}

impl ByteSource for BinaryReader<'_> {
    #[inline]
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    #[inline]
    fn position(&self) -> usize {
        self.position
    }
}
