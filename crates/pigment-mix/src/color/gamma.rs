//! sRGB transfer curve (IEC 61966-2-1), evaluated exactly.

/// Convert one sRGB-encoded channel to linear light.
#[inline]
pub fn srgb_to_linear(x: f64) -> f64 {
    if x >= 0.04045 {
        ((x + 0.055) / 1.055).powf(2.4)
    } else {
        x / 12.92
    }
}

/// Convert one linear-light channel to sRGB encoding.
#[inline]
pub fn linear_to_srgb(x: f64) -> f64 {
    if x >= 0.0031308 {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * x
    }
}
