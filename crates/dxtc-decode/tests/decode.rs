use std::io::Cursor;

use dxtc_decode::{
    decompress, decompress_dxt1, decompress_dxt1_from_reader, decompress_dxt3,
    decompress_dxt3_from_reader, BlockFormat, Error,
};
use rstest::rstest;

const RED: u16 = 0xF800;
const BLUE: u16 = 0x001F;

fn dxt1_block(c0: u16, c1: u16, indices: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(8);
    out.extend_from_slice(&c0.to_le_bytes());
    out.extend_from_slice(&c1.to_le_bytes());
    out.extend_from_slice(&indices.to_le_bytes());
    out
}

fn dxt3_block(alpha: [u8; 8], c0: u16, c1: u16, indices: u32) -> Vec<u8> {
    let mut out = alpha.to_vec();
    out.extend(dxt1_block(c0, c1, indices));
    out
}

fn pixels(buf: &[u8]) -> impl Iterator<Item = &[u8]> {
    buf.chunks_exact(4)
}

/// A small deterministic byte pattern, enough to hit every index and mode.
fn pattern(len: usize) -> Vec<u8> {
    let mut state = 0x2545_F491u32;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}

#[test]
fn dxt1_solid_red_block() {
    let out = decompress_dxt1(&dxt1_block(RED, BLUE, 0), 4, 4).unwrap();

    assert_eq!(out.len(), 64);
    assert!(pixels(&out).all(|p| p == [255u8, 0, 0, 255]));
}

#[test]
fn dxt3_solid_red_block() {
    let out = decompress_dxt3(&dxt3_block([0xFF; 8], RED, BLUE, 0), 4, 4).unwrap();

    assert_eq!(out.len(), 64);
    assert!(pixels(&out).all(|p| p == [255u8, 0, 0, 255]));
}

#[test]
fn dxt1_four_color_index3_is_weighted_to_color1() {
    let out = decompress_dxt1(&dxt1_block(RED, BLUE, 0xFFFF_FFFF), 4, 4).unwrap();

    assert!(pixels(&out).all(|p| p == [85u8, 0, 170, 255]));
}

#[test]
fn dxt1_three_color_index3_is_opaque_black() {
    let out = decompress_dxt1(&dxt1_block(BLUE, RED, 0xFFFF_FFFF), 4, 4).unwrap();

    assert!(pixels(&out).all(|p| p == [0u8, 0, 0, 255]));
}

#[test]
fn dxt3_zero_alpha_is_independent_of_color() {
    let indices = 0xE4E4_E4E4; // 0, 1, 2, 3 repeating
    let out = decompress_dxt3(&dxt3_block([0x00; 8], RED, BLUE, indices), 4, 4).unwrap();

    let expected_rgb = [[255u8, 0, 0], [0, 0, 255], [170, 0, 85], [85, 0, 170]];
    for (i, p) in pixels(&out).enumerate() {
        assert_eq!(p[3], 0);
        assert_eq!(&p[..3], &expected_rgb[i % 4]);
    }
}

#[test]
fn blocks_are_placed_row_major() {
    // 8x8 image, four solid blocks: red, blue, white, black.
    let mut data = Vec::new();
    data.extend(dxt1_block(RED, BLUE, 0));
    data.extend(dxt1_block(RED, BLUE, 0x5555_5555));
    data.extend(dxt1_block(0xFFFF, 0x0000, 0));
    data.extend(dxt1_block(0x0000, 0xFFFF, 0xFFFF_FFFF));

    let out = decompress_dxt1(&data, 8, 8).unwrap();

    let at = |x: usize, y: usize| &out[(y * 8 + x) * 4..(y * 8 + x) * 4 + 4];
    assert_eq!(at(0, 0), [255u8, 0, 0, 255]);
    assert_eq!(at(7, 0), [0u8, 0, 255, 255]);
    assert_eq!(at(3, 4), [255u8, 255, 255, 255]);
    assert_eq!(at(4, 7), [0u8, 0, 0, 255]);
}

#[rstest]
#[case(BlockFormat::Dxt1, 4, 4)]
#[case(BlockFormat::Dxt1, 64, 32)]
#[case(BlockFormat::Dxt3, 8, 16)]
#[case(BlockFormat::Dxt3, 128, 4)]
fn output_size_matches_dimensions(
    #[case] format: BlockFormat,
    #[case] width: u32,
    #[case] height: u32,
) {
    let data = pattern(format.compressed_size(width, height).unwrap());
    let out = decompress(format, &data, width, height).unwrap();

    assert_eq!(out.len(), width as usize * height as usize * 4);
}

#[rstest]
#[case(BlockFormat::Dxt1)]
#[case(BlockFormat::Dxt3)]
fn decoding_is_deterministic(#[case] format: BlockFormat) {
    let data = pattern(format.compressed_size(32, 32).unwrap());

    let first = decompress(format, &data, 32, 32).unwrap();
    let second = decompress(format, &data, 32, 32).unwrap();
    assert_eq!(first, second);
}

#[rstest]
#[case(BlockFormat::Dxt1)]
#[case(BlockFormat::Dxt3)]
fn slice_and_stream_sources_agree(#[case] format: BlockFormat) {
    let data = pattern(format.compressed_size(16, 12).unwrap());

    let from_slice = decompress(format, &data, 16, 12).unwrap();
    let from_stream = match format {
        BlockFormat::Dxt1 => decompress_dxt1_from_reader(Cursor::new(&data), 16, 12),
        BlockFormat::Dxt3 => decompress_dxt3_from_reader(Cursor::new(&data), 16, 12),
    }
    .unwrap();
    assert_eq!(from_slice, from_stream);
}

#[test]
fn unaligned_dimensions_are_clipped() {
    // 6x6 needs a 2x2 block grid.
    let mut data = Vec::new();
    data.extend(dxt1_block(RED, BLUE, 0));
    data.extend(dxt1_block(RED, BLUE, 0x5555_5555));
    data.extend(dxt1_block(RED, BLUE, 0x5555_5555));
    data.extend(dxt1_block(RED, BLUE, 0));

    let out = decompress_dxt1(&data, 6, 6).unwrap();

    assert_eq!(out.len(), 6 * 6 * 4);
    let at = |x: usize, y: usize| &out[(y * 6 + x) * 4..(y * 6 + x) * 4 + 4];
    assert_eq!(at(3, 3), [255u8, 0, 0, 255]);
    assert_eq!(at(5, 0), [0u8, 0, 255, 255]);
    assert_eq!(at(0, 5), [0u8, 0, 255, 255]);
    assert_eq!(at(5, 5), [255u8, 0, 0, 255]);
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut data = dxt1_block(RED, BLUE, 0);
    data.extend_from_slice(&[0xAB; 5]);

    let out = decompress_dxt1(&data, 4, 4).unwrap();
    assert!(pixels(&out).all(|p| p == [255u8, 0, 0, 255]));
}

#[test]
fn truncated_dxt1_fails() {
    let data = dxt1_block(RED, BLUE, 0);
    let short = &data[..7];

    assert!(decompress_dxt1(short, 4, 4).unwrap_err().is_truncated());
    assert!(decompress_dxt1_from_reader(Cursor::new(short), 4, 4)
        .unwrap_err()
        .is_truncated());
}

#[test]
fn truncated_dxt3_fails() {
    let data = dxt3_block([0xFF; 8], RED, BLUE, 0);
    let short = &data[..15];

    assert!(decompress_dxt3(short, 4, 4).unwrap_err().is_truncated());
    assert!(decompress_dxt3_from_reader(Cursor::new(short), 4, 4)
        .unwrap_err()
        .is_truncated());
}

#[test]
fn truncated_later_block_fails() {
    let mut data = dxt1_block(RED, BLUE, 0);
    data.extend(dxt1_block(RED, BLUE, 0));

    // 8x8 needs four blocks, only two are present.
    assert!(decompress_dxt1(&data, 8, 8).unwrap_err().is_truncated());
}

#[test]
fn zero_dimensions_are_rejected() {
    let data = dxt1_block(RED, BLUE, 0);

    assert!(matches!(
        decompress_dxt1(&data, 0, 4),
        Err(Error::InvalidDimensions { width: 0, height: 4 })
    ));
    assert!(matches!(
        decompress_dxt3(&data, 4, 0),
        Err(Error::InvalidDimensions { width: 4, height: 0 })
    ));
}

#[test]
#[cfg(target_pointer_width = "64")]
fn oversized_dimensions_are_rejected() {
    assert!(matches!(
        decompress_dxt3(&[], u32::MAX, u32::MAX),
        Err(Error::InvalidDimensions { .. })
    ));
}
