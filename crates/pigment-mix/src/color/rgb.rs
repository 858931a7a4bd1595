//! 8-bit sRGB color.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;
use super::quantize;

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels scaled to `0.0..=1.0`.
    #[inline]
    pub fn to_float(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    /// Quantize float channels, clamping out-of-range values.
    ///
    /// Rounds by adding 0.5 and truncating, so 0.5/255 steps round up.
    #[inline]
    pub fn from_float(rgb: [f64; 3]) -> Self {
        Self::new(quantize(rgb[0]), quantize(rgb[1]), quantize(rgb[2]))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`.
    ///
    /// Case-insensitive; surrounding whitespace is trimmed. Shorthand
    /// digits are expanded by repetition (`#F80` is `#FF8800`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        let digits = s
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or(ParseColorError::InvalidDigit(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        match digits.as_slice() {
            &[r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
            &[r1, r0, g1, g0, b1, b0] => Ok(Self::new(
                (r1 << 4) | r0,
                (g1 << 4) | g0,
                (b1 << 4) | b0,
            )),
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
