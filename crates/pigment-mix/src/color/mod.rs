//! Color types and conversion helpers.
//!
//! - [`Rgb`]: 8-bit sRGB color with `#rrggbb` parsing and formatting
//! - [`gamma`]: exact sRGB transfer curve for linear-light entry points
//!
//! # Example
//!
//! ```
//! use pigment_mix::Rgb;
//!
//! let blue: Rgb = "#002185".parse().unwrap();
//! assert_eq!(blue.to_array(), [0x00, 0x21, 0x85]);
//! assert_eq!(blue.to_string(), "#002185");
//! ```

mod error;
pub mod gamma;
mod rgb;

pub use error::ParseColorError;
pub use rgb::Rgb;

/// Clamp a channel to `0.0..=1.0`.
#[inline]
pub(crate) fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Quantize a channel to 8 bits: clamp, scale, add 0.5, truncate.
#[inline]
pub(crate) fn quantize(x: f64) -> u8 {
    (clamp01(x) * 255.0 + 0.5) as u8
}
