//! Common utilities for dxtc.
//!
//! This crate provides the foundational pieces shared by the dxtc crates:
//!
//! - [`BinaryReader`] - Zero-copy sequential reading from byte slices
//! - [`StreamReader`] - Sequential reading from any [`std::io::Read`]
//! - [`ByteSource`] - The little-endian reading interface both of them implement

mod error;
mod reader;
mod stream;

pub use error::{Error, Result};
pub use reader::{BinaryReader, ByteSource};
pub use stream::StreamReader;
