//! Color - An exact 8-bit RGB triple
//!
//! `Color` is the key type of every histogram and palette in the workspace,
//! so equality and hashing are structural: two colors are the same key iff
//! all three channels match.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// 24-bit RGB color.
///
/// # Examples
///
/// ```
/// use colorextract_core::Color;
///
/// let gray: Color = "#808080".parse().unwrap();
/// assert_eq!(gray, Color::new(128, 128, 128));
/// assert_eq!(gray.to_string(), "#808080");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red component
    pub red: u8,
    /// Green component
    pub green: u8,
    /// Blue component
    pub blue: u8,
}

impl Color {
    /// Pure black (0, 0, 0)
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// Pure white (255, 255, 255)
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a color from its components.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a gray color with all channels equal to `value`.
    #[inline]
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Components as `[red, green, blue]`.
    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Apply `f` to each channel independently.
    #[inline]
    pub fn map_channels(self, mut f: impl FnMut(u8) -> u8) -> Self {
        Self::new(f(self.red), f(self.green), f(self.blue))
    }

    /// Squared Euclidean distance in RGB space.
    ///
    /// Orders colors exactly like the true Euclidean distance, without
    /// the square root.
    #[inline]
    pub fn distance_squared(self, other: Color) -> u32 {
        let dr = self.red as i32 - other.red as i32;
        let dg = self.green as i32 - other.green as i32;
        let db = self.blue as i32 - other.blue as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Parse a `#RRGGBB` (or bare `RRGGBB`) literal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHexColor`] unless the input is exactly six
    /// hex digits after the optional `#`.
    pub fn from_hex(text: &str) -> Result<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHexColor(text.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| Error::InvalidHexColor(text.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format as an uppercase `#RRGGBB` literal.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.channels()
    }
}
