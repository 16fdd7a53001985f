//! Explicit 4-bit alpha expansion used by DXT3.

/// Expand one byte of a DXT3 alpha table into two 8-bit alpha values.
///
/// The low nibble belongs to the even pixel and lands at index 0, the high
/// nibble to the odd pixel at index 1. Each nibble is replicated into both
/// halves of the result, so `0x0` maps to `0x00` and `0xF` to `0xFF`.
#[inline]
pub const fn expand_alpha_pair(value: u8) -> [u8; 2] {
    let low = value & 0x0F;
    let high = value & 0xF0;
    [low | (low << 4), high | (high >> 4)]
}

/// Alpha for the pixel at `offset` (0..16, row-major) within a block.
#[inline]
pub const fn alpha_at(table: &[u8; 8], offset: usize) -> u8 {
    expand_alpha_pair(table[offset / 2])[offset % 2]
}
