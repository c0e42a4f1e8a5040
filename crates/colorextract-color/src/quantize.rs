//! Color quantization
//!
//! Reduces every channel of a color to `2^bits` levels.
//!
//! # Bucket boundaries
//!
//! For a channel value `v` and `scale = 2^bits`:
//!
//! ```text
//! level  = ceil(v * scale / 255)
//! output = floor(level * 255 / scale)
//! ```
//!
//! Rounding the level *up* biases every non-zero value into the next
//! bucket, so a bucket covers `(prev, level]` rather than `[level, next)`.
//! `0` stays `0` and `255` stays `255` for every bit depth, and quantizing
//! an already quantized color is a no-op.
//!
//! Because `level` runs from `0` to `scale` inclusive, a channel has
//! `scale + 1` possible outputs below 8 bits: at 1 bit these are
//! `0`, `127` and `255`.
//!
//! Both steps are evaluated in integer arithmetic, so bucket edges are exact.

use crate::{ColorError, ColorResult};
use colorextract_core::Color;
use std::fmt;

/// Number of bits kept per channel, validated to `0..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuantizeBits(u8);

impl QuantizeBits {
    /// Largest supported depth (no precision lost beyond the ceil bias)
    pub const MAX: u8 = 8;

    /// Default histogram depth: 3 bits, 9 values per channel
    pub const FINE: QuantizeBits = QuantizeBits(3);

    /// Default clustering depth: 1 bit, 3 values per channel
    pub const COARSE: QuantizeBits = QuantizeBits(1);

    /// Validate a bit depth.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidParameters`] if `bits > 8`.
    pub fn new(bits: u8) -> ColorResult<Self> {
        if bits > Self::MAX {
            return Err(ColorError::InvalidParameters(format!(
                "bits per channel must be between 0 and {}, got {}",
                Self::MAX,
                bits
            )));
        }
        Ok(Self(bits))
    }

    /// Raw bit count.
    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Quantization levels per channel, `2^bits`.
    #[inline]
    pub fn levels(self) -> u32 {
        1 << self.0
    }

    /// Distinct output values per channel.
    ///
    /// `levels + 1` because of the ceil bias, except at 8 bits where the
    /// output can't exceed the 256 input values.
    #[inline]
    pub fn channel_values(self) -> u32 {
        self.levels().min(255) + 1
    }

    /// Total number of distinct output colors, `channel_values^3`.
    #[inline]
    pub fn buckets(self) -> u32 {
        self.channel_values().pow(3)
    }
}

impl fmt::Display for QuantizeBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bpc", self.0)
    }
}

/// Quantize a single channel value.
#[inline]
pub fn quantize_channel(value: u8, bits: QuantizeBits) -> u8 {
    let scale = bits.levels();
    let level = (value as u32 * scale).div_ceil(255);
    (level * 255 / scale) as u8
}

/// Quantize a color, channel by channel.
///
/// # Examples
///
/// ```
/// use colorextract_color::{QuantizeBits, quantize};
/// use colorextract_core::Color;
///
/// let bits = QuantizeBits::new(3).unwrap();
/// assert_eq!(quantize(Color::new(128, 128, 128), bits), Color::gray(159));
/// assert_eq!(quantize(Color::BLACK, bits), Color::BLACK);
/// ```
#[inline]
pub fn quantize(color: Color, bits: QuantizeBits) -> Color {
    color.map_channels(|v| quantize_channel(v, bits))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_bits() -> impl Iterator<Item = QuantizeBits> {
        (0..=QuantizeBits::MAX).map(|b| QuantizeBits::new(b).unwrap())
    }

    #[test]
    fn test_bits_validation() {
        assert!(QuantizeBits::new(0).is_ok());
        assert!(QuantizeBits::new(8).is_ok());
        assert!(matches!(
            QuantizeBits::new(9),
            Err(ColorError::InvalidParameters(_))
        ));
        assert_eq!(QuantizeBits::FINE.buckets(), 729);
        assert_eq!(QuantizeBits::COARSE.buckets(), 27);
        assert_eq!(QuantizeBits::new(8).unwrap().channel_values(), 256);
    }

    #[test]
    fn test_endpoints_fixed() {
        for bits in all_bits() {
            assert_eq!(quantize(Color::BLACK, bits), Color::BLACK, "{bits}");
            assert_eq!(quantize(Color::WHITE, bits), Color::WHITE, "{bits}");
        }
    }

    #[test]
    fn test_idempotent_every_value() {
        for bits in all_bits() {
            for v in 0..=255u8 {
                let once = quantize_channel(v, bits);
                assert_eq!(quantize_channel(once, bits), once, "v={v} {bits}");
            }
        }
    }

    #[test]
    fn test_level_count() {
        for bits in all_bits() {
            let mut outputs: Vec<u8> = (0..=255u8).map(|v| quantize_channel(v, bits)).collect();
            outputs.dedup();
            assert_eq!(outputs.len() as u32, bits.channel_values(), "{bits}");
        }
    }

    #[test]
    fn test_ceil_bias() {
        let bits = QuantizeBits::new(3).unwrap();
        // Anything above zero jumps to the first non-zero bucket (255/8 = 31.875).
        assert_eq!(quantize_channel(1, bits), 31);
        assert_eq!(quantize_channel(31, bits), 31);
        assert_eq!(quantize_channel(32, bits), 63);
        assert_eq!(quantize_channel(128, bits), 159);
    }

    #[test]
    fn test_one_bit_three_values() {
        let bits = QuantizeBits::COARSE;
        assert_eq!(quantize(Color::new(1, 0, 200), bits), Color::new(127, 0, 255));
        assert_eq!(quantize(Color::new(0, 127, 128), bits), Color::new(0, 127, 255));
    }

    #[test]
    fn test_zero_bits_is_binary() {
        let bits = QuantizeBits::new(0).unwrap();
        assert_eq!(quantize(Color::new(0, 1, 255), bits), Color::new(0, 255, 255));
    }

    #[test]
    fn test_eight_bits_close_to_identity() {
        let bits = QuantizeBits::new(8).unwrap();
        for v in 0..=255u8 {
            let q = quantize_channel(v, bits);
            assert!(q >= v.saturating_sub(1) && q <= v.saturating_add(1), "v={v} q={q}");
        }
    }
}
