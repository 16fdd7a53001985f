//! Sequential reading from [`std::io::Read`] sources.

use std::io::{ErrorKind, Read};

use crate::{ByteSource, Error, Result};

/// Adapts any [`Read`] into a [`ByteSource`].
///
/// Running out of input part-way through a read is reported as
/// [`Error::UnexpectedEof`] with the number of bytes that did arrive, the same
/// way [`crate::BinaryReader`] reports it. Other I/O failures surface as
/// [`Error::Io`].
#[derive(Debug)]
pub struct StreamReader<R> {
    inner: R,
    position: usize,
}

impl<R: Read> StreamReader<R> {
    /// Wrap a reader.
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Unwrap, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for StreamReader<R> {
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        let mut filled = 0;

        while filled < N {
            match self.inner.read(&mut out[filled..]) {
                Ok(0) => {
                    return Err(Error::UnexpectedEof {
                        needed: N,
                        available: filled,
                    })
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Io(e)),
            }
        }

        self.position += N;
        Ok(out)
    }

    fn position(&self) -> usize {
        self.position
    }
}
