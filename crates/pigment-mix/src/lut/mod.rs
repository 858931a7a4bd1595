//! LUT store: a 64x64x64 grid of pigment concentrations over (R, G, B).
//!
//! The buffer holds three contiguous channel planes of `64³` bytes each,
//! indexed by `ix + iy·64 + iz·64·64`, followed by [`PADDING_LEN`] zero
//! bytes so that the fixed corner offsets stay inside the buffer near the
//! upper grid boundary.

mod codec;
mod error;

use std::fmt;
use std::sync::Arc;

pub use codec::{decode_transport, encode_transport};
pub use error::{CodecError, LutError};

/// Samples per grid axis.
pub const GRID_SIDE: usize = 64;

/// Cells per channel plane.
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE * GRID_SIDE;

/// Length of the three channel planes.
pub const PAYLOAD_LEN: usize = 3 * GRID_CELLS;

/// Zero bytes appended after the channel planes.
pub const PADDING_LEN: usize = 4161;

/// Minimum buffer length a lookup requires.
pub const LUT_LEN: usize = PAYLOAD_LEN + PADDING_LEN;

/// Grid corner addressing layout of the shipped LUT binary.
///
/// Added to the flattened base index these locate the eight corners of the
/// interpolation cell, paired in order with the trilinear weights (x varies
/// fastest, then y, then z). The values are fixed by the generator that
/// produced the LUT payload; do not re-derive them from grid coordinates.
pub const CORNER_OFFSETS: [usize; 8] = [192, 193, 256, 257, 4288, 4289, 4352, 4353];

/// Start of each output channel plane.
const CHANNEL_BASES: [usize; 3] = [0, GRID_CELLS, 2 * GRID_CELLS];

/// 18-bit bound on the flattened base index. Scaling by 63 already keeps
/// the index in range, so this never changes a valid index.
const INDEX_MASK: usize = 0x3FFFF;

/// Immutable LUT buffer.
///
/// Cloning is cheap: the bytes are shared.
#[derive(Clone)]
pub struct Lut {
    bytes: Arc<[u8]>,
}

impl Lut {
    /// Wrap raw LUT bytes.
    ///
    /// The length is not checked here; lookups on a short buffer fail with
    /// [`LutError::TooSmall`].
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Decode a LUT from its transport string.
    pub fn from_transport(input: &str) -> Result<Self, CodecError> {
        decode_transport(input).map(Self::new)
    }

    /// Buffer length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw buffer contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Verify the buffer is long enough for any lookup.
    pub fn check(&self) -> Result<(), LutError> {
        if self.bytes.len() < LUT_LEN {
            return Err(LutError::TooSmall {
                len: self.bytes.len(),
                required: LUT_LEN,
            });
        }
        Ok(())
    }

    /// Trilinearly interpolate the three pigment concentrations at `rgb`.
    ///
    /// Channels are clamped to `0.0..=1.0` and scaled by 63 so that 1.0
    /// lands exactly on the last grid index. Results are normalized to
    /// `0.0..=1.0` (byte value / 255).
    ///
    /// Corners with a zero weight are skipped: they contribute nothing, and
    /// on the upper grid boundary they would address bytes past the padding.
    pub fn concentrations(&self, rgb: [f64; 3]) -> Result<[f64; 3], LutError> {
        self.check()?;

        let x = rgb[0].clamp(0.0, 1.0) * 63.0;
        let y = rgb[1].clamp(0.0, 1.0) * 63.0;
        let z = rgb[2].clamp(0.0, 1.0) * 63.0;

        let ix = x as usize;
        let iy = y as usize;
        let iz = z as usize;

        let tx = x - ix as f64;
        let ty = y - iy as f64;
        let tz = z - iz as f64;

        let base = (ix + iy * GRID_SIDE + iz * GRID_SIDE * GRID_SIDE) & INDEX_MASK;

        let weights = [
            (1.0 - tx) * (1.0 - ty) * (1.0 - tz),
            tx * (1.0 - ty) * (1.0 - tz),
            (1.0 - tx) * ty * (1.0 - tz),
            tx * ty * (1.0 - tz),
            (1.0 - tx) * (1.0 - ty) * tz,
            tx * (1.0 - ty) * tz,
            (1.0 - tx) * ty * tz,
            tx * ty * tz,
        ];

        let mut c = [0.0f64; 3];
        for (&weight, &offset) in weights.iter().zip(CORNER_OFFSETS.iter()) {
            if weight == 0.0 {
                continue;
            }
            for (acc, &plane) in c.iter_mut().zip(CHANNEL_BASES.iter()) {
                *acc += weight * f64::from(self.byte(base + offset + plane)?);
            }
        }

        Ok(c.map(|v| v / 255.0))
    }

    #[inline]
    fn byte(&self, index: usize) -> Result<u8, LutError> {
        self.bytes
            .get(index)
            .copied()
            .ok_or(LutError::TooSmall {
                len: self.bytes.len(),
                required: index + 1,
            })
    }
}

impl fmt::Debug for Lut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lut").field("len", &self.bytes.len()).finish()
    }
}

impl From<Vec<u8>> for Lut {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}
