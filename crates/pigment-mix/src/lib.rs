//! pigment-mix: pigment-style color mixing through a latent space
//!
//! Averaging two colors in RGB treats them as light: blue and yellow
//! average to a muddy grey. Paint does not work that way. This crate maps
//! each color into a 7-component latent vector of pigment concentrations
//! plus a residual, where straight-line interpolation behaves like mixing
//! paint: blue and yellow make green.
//!
//! # Quick Start
//!
//! The [`PigmentMixer`] context owns the lookup table and is the primary
//! entry point:
//!
//! ```no_run
//! use pigment_mix::PigmentMixer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = std::fs::read_to_string("mixbox_lut.txt")?;
//!
//! let mut mixer = PigmentMixer::new();
//! mixer.install_lut_from_transport(transport.trim())?;
//!
//! let mixed = mixer.mix([0, 33, 133], [252, 211, 0], 0.5)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Pipeline
//!
//! ```text
//! transport string ──base64──> deflate ──inflate──> delta rows ──undo──> Lut
//!
//! rgb ──clamp──> Lut::concentrations ──> (c0, c1, c2)
//!                                            │  c3 = 1 - Σc
//!                                            v
//!                             polynomial::evaluate ──> predicted rgb
//!                                            │
//!                       residual = rgb - predicted
//!                                            v
//!                    Latent (c0, c1, c2, c3, r4, r5, r6)
//!                                            │  lerp
//!                                            v
//!            polynomial::evaluate(c) + residual ──clamp, quantize──> rgb
//! ```
//!
//! # Lookup Table
//!
//! The [`Lut`] is a 64×64×64 grid over RGB holding three pigment
//! concentrations per cell, stored as three byte planes followed by 4161
//! bytes of zero padding. Concentrations are interpolated trilinearly
//! using the fixed [`lut::CORNER_OFFSETS`] addressing layout of the shipped
//! table. The table is normally distributed in a compact transport form,
//! see [`lut::decode_transport`].
//!
//! # Residual Correction
//!
//! The [`latent::polynomial`] model only approximates the pigment
//! simulation. The residual stored in the last three components makes
//! `decode(encode(rgb)) == rgb` exact up to 8-bit rounding, and because
//! it is interpolated along with the concentrations, mixes stay anchored
//! to their endpoints.

pub mod api;
pub mod color;
pub mod latent;
pub mod lut;


pub use api::{MixError, PigmentMixer};
pub use color::{ParseColorError, Rgb};
pub use latent::{Latent, LATENT_SIZE};
pub use lut::{CodecError, Lut, LutError};
