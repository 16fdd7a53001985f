//! Color types and RGB565 expansion.
//!
//! Expansion from 5 and 6 bit channels replicates the high bits into the low
//! bits with rounding, which is what hardware decoders do. A plain shift
//! (`c5 << 3`) gives visibly darker colors and does not match.

/// A packed 16-bit 5:6:5 color as stored in block endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Color565(u16);

impl Color565 {
    /// Wrap a raw little-endian-decoded value.
    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// The raw packed value.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Red channel, bits 15-11.
    #[inline]
    pub const fn red5(self) -> u8 {
        (self.0 >> 11) as u8
    }

    /// Green channel, bits 10-5.
    #[inline]
    pub const fn green6(self) -> u8 {
        ((self.0 & 0x07E0) >> 5) as u8
    }

    /// Blue channel, bits 4-0.
    #[inline]
    pub const fn blue5(self) -> u8 {
        (self.0 & 0x001F) as u8
    }

    /// Expand to 8 bits per channel.
    #[inline]
    pub const fn to_rgb888(self) -> Rgb888 {
        Rgb888 {
            r: expand5(self.red5()),
            g: expand6(self.green6()),
            b: expand5(self.blue5()),
        }
    }
}

/// Expand a 5-bit channel value to 8 bits.
#[inline]
pub const fn expand5(c5: u8) -> u8 {
    let t = c5 as u32 * 255 + 16;
    ((t / 32 + t) / 32) as u8
}

/// Expand a 6-bit channel value to 8 bits.
#[inline]
pub const fn expand6(c6: u8) -> u8 {
    let t = c6 as u32 * 255 + 32;
    ((t / 64 + t) / 64) as u8
}

/// An 8:8:8 color without alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb888 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb888 {
    pub const BLACK: Self = Self::new(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Weighted integer average `(w_self*self + w_other*other) / (w_self + w_other)`
    /// per channel, truncating.
    #[inline]
    pub fn blend(self, w_self: u16, other: Self, w_other: u16) -> Self {
        let div = w_self + w_other;
        let mix = |a: u8, b: u8| ((w_self * a as u16 + w_other * b as u16) / div) as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// Attach an alpha channel.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Rgba8888 {
        Rgba8888 {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

/// One output pixel, stored as R, G, B, A bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8888 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8888 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::zero(0, 0)]
    #[case::one(1, 8)]
    #[case::mid(16, 132)]
    #[case::max(31, 255)]
    fn test_expand5_values(#[case] input: u8, #[case] expected: u8) {
        assert_eq!(expand5(input), expected);
    }

    #[rstest]
    #[case::zero(0, 0)]
    #[case::one(1, 4)]
    #[case::mid(32, 130)]
    #[case::max(63, 255)]
    fn test_expand6_values(#[case] input: u8, #[case] expected: u8) {
        assert_eq!(expand6(input), expected);
    }

    #[test]
    fn test_expansion_is_monotonic() {
        for c in 1..32u8 {
            assert!(expand5(c) >= expand5(c - 1), "5-bit dropped at {c}");
        }
        for c in 1..64u8 {
            assert!(expand6(c) >= expand6(c - 1), "6-bit dropped at {c}");
        }
    }

    #[test]
    fn test_channel_extraction() {
        let color = Color565::from_raw(0b10101_110011_01110);
        assert_eq!(color.red5(), 0b10101);
        assert_eq!(color.green6(), 0b110011);
        assert_eq!(color.blue5(), 0b01110);
    }

    #[rstest]
    #[case::red(0xF800, Rgb888::new(255, 0, 0))]
    #[case::green(0x07E0, Rgb888::new(0, 255, 0))]
    #[case::blue(0x001F, Rgb888::new(0, 0, 255))]
    #[case::white(0xFFFF, Rgb888::new(255, 255, 255))]
    #[case::black(0x0000, Rgb888::BLACK)]
    fn test_to_rgb888(#[case] raw: u16, #[case] expected: Rgb888) {
        assert_eq!(Color565::from_raw(raw).to_rgb888(), expected);
    }

    #[test]
    fn test_blend_truncates() {
        let a = Rgb888::new(255, 0, 10);
        let b = Rgb888::new(0, 255, 11);

        assert_eq!(a.blend(2, b, 1), Rgb888::new(170, 85, 10));
        assert_eq!(a.blend(1, b, 2), Rgb888::new(85, 170, 10));
        assert_eq!(a.blend(1, b, 1), Rgb888::new(127, 127, 10));
    }
}
