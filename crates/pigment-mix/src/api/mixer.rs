//! PigmentMixer -- the primary entry point for the crate.
//!
//! [`PigmentMixer`] owns the installed LUT and exposes encoding, decoding
//! and mixing. It replaces a process-wide LUT: several mixers with
//! different LUTs can coexist, and installing needs `&mut self`, so a LUT
//! can never change underneath a running lookup.

use std::sync::Arc;

use crate::latent::{linear_to_srgb_rgb, Latent};
use crate::lut::{CodecError, Lut, LUT_LEN};

use super::error::MixError;

/// Latent-space color mixer.
///
/// # Design
///
/// - Starts empty; every encode fails with
///   [`MixError::LutNotInitialized`] until a LUT is installed
/// - Installing replaces the LUT wholesale; a failed transport install
///   keeps the previous one
/// - All lookups take `&self` and the LUT is shared behind an `Arc`, so a
///   mixer can be cloned and read from many threads
///
/// # Example
///
/// ```no_run
/// use pigment_mix::PigmentMixer;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = std::fs::read_to_string("mixbox_lut.txt")?;
///
/// let mut mixer = PigmentMixer::new();
/// mixer.install_lut_from_transport(transport.trim())?;
///
/// let green = mixer.mix([0, 33, 133], [252, 211, 0], 0.5)?;
/// println!("{green:?}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PigmentMixer {
    lut: Option<Lut>,
}

impl PigmentMixer {
    /// Create a mixer with no LUT installed.
    pub fn new() -> Self {
        Self { lut: None }
    }

    /// Create a mixer with `lut` already installed.
    pub fn with_lut(lut: Lut) -> Self {
        Self { lut: Some(lut) }
    }

    /// Install raw LUT bytes, replacing any previous LUT.
    ///
    /// The buffer is used verbatim. A buffer shorter than
    /// [`LUT_LEN`] is accepted here and reported by each lookup.
    pub fn install_lut(&mut self, bytes: impl Into<Arc<[u8]>>) {
        self.set_lut(Lut::new(bytes));
    }

    /// Decode a transport string and install the result.
    ///
    /// On error the previously installed LUT (if any) is left in place.
    pub fn install_lut_from_transport(&mut self, transport: &str) -> Result<(), CodecError> {
        let lut = Lut::from_transport(transport)?;
        self.set_lut(lut);
        Ok(())
    }

    fn set_lut(&mut self, lut: Lut) {
        if lut.len() < LUT_LEN {
            tracing::warn!(
                len = lut.len(),
                required = LUT_LEN,
                "Installed LUT is shorter than a full grid; lookups will fail"
            );
        } else {
            tracing::debug!(len = lut.len(), "Installed LUT");
        }
        self.lut = Some(lut);
    }

    /// The installed LUT.
    pub fn lut(&self) -> Result<&Lut, MixError> {
        self.lut.as_ref().ok_or(MixError::LutNotInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.lut.is_some()
    }

    /// Encode an 8-bit sRGB color.
    pub fn encode_rgb8(&self, rgb: [u8; 3]) -> Result<Latent, MixError> {
        self.encode_rgb_float(rgb.map(|v| f64::from(v) / 255.0))
    }

    /// Encode an sRGB float color; out-of-range channels are clamped.
    pub fn encode_rgb_float(&self, rgb: [f64; 3]) -> Result<Latent, MixError> {
        Ok(Latent::encode(self.lut()?, rgb)?)
    }

    /// Encode a linear-light float color; out-of-range channels are clamped.
    pub fn encode_linear_rgb(&self, rgb: [f64; 3]) -> Result<Latent, MixError> {
        self.encode_rgb_float(linear_to_srgb_rgb(rgb))
    }

    /// Decode to 8-bit sRGB. Needs no LUT.
    pub fn decode_to_rgb8(&self, latent: &Latent) -> [u8; 3] {
        latent.to_rgb8()
    }

    /// Decode to sRGB floats in `0.0..=1.0`. Needs no LUT.
    pub fn decode_to_rgb_float(&self, latent: &Latent) -> [f64; 3] {
        latent.to_rgb_float()
    }

    /// Decode to linear-light floats in `0.0..=1.0`. Needs no LUT.
    pub fn decode_to_linear_rgb(&self, latent: &Latent) -> [f64; 3] {
        latent.to_linear_rgb()
    }

    /// Mix two 8-bit sRGB colors as pigments.
    ///
    /// `t = 0.0` gives `a`, `t = 1.0` gives `b`. `t` is not clamped;
    /// values outside `0.0..=1.0` extrapolate and the result is clamped on
    /// decode.
    pub fn mix(&self, a: [u8; 3], b: [u8; 3], t: f64) -> Result<[u8; 3], MixError> {
        let la = self.encode_rgb8(a)?;
        let lb = self.encode_rgb8(b)?;
        Ok(la.lerp(&lb, t).to_rgb8())
    }

    /// [`mix`](Self::mix) for sRGB float colors.
    pub fn mix_float(&self, a: [f64; 3], b: [f64; 3], t: f64) -> Result<[f64; 3], MixError> {
        let la = self.encode_rgb_float(a)?;
        let lb = self.encode_rgb_float(b)?;
        Ok(la.lerp(&lb, t).to_rgb_float())
    }

    /// [`mix`](Self::mix) for linear-light float colors.
    pub fn mix_linear(&self, a: [f64; 3], b: [f64; 3], t: f64) -> Result<[f64; 3], MixError> {
        let la = self.encode_linear_rgb(a)?;
        let lb = self.encode_linear_rgb(b)?;
        Ok(la.lerp(&lb, t).to_linear_rgb())
    }

    /// `steps` evenly spaced mixes from `a` to `b`, both endpoints included.
    pub fn gradient(
        &self,
        a: [u8; 3],
        b: [u8; 3],
        steps: usize,
    ) -> Result<Vec<[u8; 3]>, MixError> {
        if steps < 2 {
            return Err(MixError::InvalidSteps { steps });
        }

        let la = self.encode_rgb8(a)?;
        let lb = self.encode_rgb8(b)?;
        let last = (steps - 1) as f64;

        Ok((0..steps)
            .map(|i| la.lerp(&lb, i as f64 / last).to_rgb8())
            .collect())
    }
}
