//! The 7-component latent color representation.
//!
//! A latent vector is `(c0, c1, c2, c3, r4, r5, r6)`:
//!
//! - `c0..c2`: pigment concentrations interpolated from the LUT
//! - `c3 = 1 - (c0 + c1 + c2)`: closure component, unclamped
//! - `r4..r6`: residual between the source color and the polynomial
//!   prediction at `c0..c3`
//!
//! Because the residual is stored, decoding an encoded color reproduces it
//! exactly (up to 8-bit rounding) no matter how well the polynomial fits.
//! Mixing is plain linear interpolation of all seven components.

pub mod polynomial;

use crate::color::gamma::{linear_to_srgb, srgb_to_linear};
use crate::color::{clamp01, quantize};
use crate::lut::{Lut, LutError};

/// Number of latent components.
pub const LATENT_SIZE: usize = 7;

/// A color in latent pigment space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latent([f64; LATENT_SIZE]);

impl Latent {
    /// Wrap raw components. Any values are accepted, e.g. the result of
    /// extrapolating beyond two encoded colors.
    #[inline]
    pub const fn new(components: [f64; LATENT_SIZE]) -> Self {
        Self(components)
    }

    /// Build a latent vector from a slice of exactly seven components.
    pub fn from_slice(components: &[f64]) -> Option<Self> {
        <[f64; LATENT_SIZE]>::try_from(components).ok().map(Self)
    }

    /// Encode an sRGB float color using `lut`.
    ///
    /// Channels are clamped to `0.0..=1.0` first; the residual is taken
    /// against the clamped color and is itself left unclamped.
    pub fn encode(lut: &Lut, rgb: [f64; 3]) -> Result<Self, LutError> {
        let rgb = rgb.map(clamp01);
        let [c0, c1, c2] = lut.concentrations(rgb)?;
        let c3 = 1.0 - (c0 + c1 + c2);

        let predicted = polynomial::evaluate([c0, c1, c2, c3]);

        Ok(Self([
            c0,
            c1,
            c2,
            c3,
            rgb[0] - predicted[0],
            rgb[1] - predicted[1],
            rgb[2] - predicted[2],
        ]))
    }

    #[inline]
    pub fn components(&self) -> &[f64; LATENT_SIZE] {
        &self.0
    }

    /// The four concentrations `c0..c3`.
    #[inline]
    pub fn concentrations(&self) -> [f64; 4] {
        [self.0[0], self.0[1], self.0[2], self.0[3]]
    }

    /// The residual correction `r4..r6`.
    #[inline]
    pub fn residual(&self) -> [f64; 3] {
        [self.0[4], self.0[5], self.0[6]]
    }

    /// Componentwise `(1 - t) * self + t * other`. `t` is not clamped.
    pub fn lerp(&self, other: &Latent, t: f64) -> Latent {
        let mut mixed = [0.0; LATENT_SIZE];
        for (out, (a, b)) in mixed.iter_mut().zip(self.0.iter().zip(other.0.iter())) {
            *out = (1.0 - t) * a + t * b;
        }
        Latent(mixed)
    }

    /// Decode to sRGB floats in `0.0..=1.0`.
    pub fn to_rgb_float(&self) -> [f64; 3] {
        let predicted = polynomial::evaluate(self.concentrations());
        let residual = self.residual();
        [
            clamp01(predicted[0] + residual[0]),
            clamp01(predicted[1] + residual[1]),
            clamp01(predicted[2] + residual[2]),
        ]
    }

    /// Decode to 8-bit sRGB (clamp, scale by 255, add 0.5, truncate).
    pub fn to_rgb8(&self) -> [u8; 3] {
        let predicted = polynomial::evaluate(self.concentrations());
        let residual = self.residual();
        [
            quantize(predicted[0] + residual[0]),
            quantize(predicted[1] + residual[1]),
            quantize(predicted[2] + residual[2]),
        ]
    }

    /// Decode to linear-light floats in `0.0..=1.0`.
    pub fn to_linear_rgb(&self) -> [f64; 3] {
        self.to_rgb_float().map(srgb_to_linear)
    }
}

impl From<[f64; LATENT_SIZE]> for Latent {
    fn from(components: [f64; LATENT_SIZE]) -> Self {
        Self(components)
    }
}

impl From<Latent> for [f64; LATENT_SIZE] {
    fn from(latent: Latent) -> Self {
        latent.0
    }
}

/// Convert linear-light channels to sRGB floats for encoding.
pub(crate) fn linear_to_srgb_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(|v| linear_to_srgb(clamp01(v)))
}
