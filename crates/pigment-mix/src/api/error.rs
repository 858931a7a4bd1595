//! Unified error type for the pigment-mix public API.
//!
//! [`MixError`] wraps the LUT and codec errors into a single enum for
//! convenient `?` propagation in application code.

use thiserror::Error;

use crate::lut::{CodecError, LutError};

/// Unified error type for the pigment-mix public API.
///
/// # Example
///
/// ```
/// use pigment_mix::{MixError, PigmentMixer};
///
/// let mixer = PigmentMixer::new();
/// let result = mixer.mix([0, 33, 133], [252, 211, 0], 0.5);
/// assert!(matches!(result, Err(MixError::LutNotInitialized)));
/// ```
#[derive(Debug, Error)]
pub enum MixError {
    /// An encode was attempted before any LUT was installed.
    #[error("LUT not initialized")]
    LutNotInitialized,

    /// The installed LUT cannot serve the lookup.
    #[error("LUT error: {0}")]
    Lut(#[from] LutError),

    /// The LUT transport payload could not be decoded.
    #[error("LUT codec error: {0}")]
    Codec(#[from] CodecError),

    /// A gradient needs at least both endpoints.
    #[error("gradient needs at least 2 steps, got {steps}")]
    InvalidSteps { steps: usize },
}
