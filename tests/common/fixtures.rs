//! Test fixtures and constants.

use pigment_mix::lut::{CORNER_OFFSETS, GRID_CELLS, GRID_SIDE, LUT_LEN};

/// Colors used across the API tests
pub mod colors {
    pub const BLUE: &str = "#0000ff";
    pub const YELLOW: &str = "#ffff00";
    pub const COBALT: &str = "#002185";
    pub const HANSA: &str = "#fcd300";
}

/// Pigment mixes pinned against [`blue_yellow_lut`]
pub mod expected {
    /// Blue and yellow at t = 0.5
    pub const BLUE_YELLOW_HALF: &str = "#087991";
    pub const BLUE_YELLOW_HALF_RGB: [u8; 3] = [8, 121, 145];
    /// Blue and yellow at t = 0.25
    pub const BLUE_YELLOW_QUARTER: &str = "#003dc1";
    /// Cobalt and hansa yellow at t = 0.5
    pub const COBALT_HANSA_HALF: &str = "#639315";
}

/// Build a LUT from a function of logical grid vertex `(x, y, z)`.
pub fn logical_lut(f: impl Fn(usize, usize, usize) -> [u8; 3]) -> Vec<u8> {
    let mut bytes = vec![0u8; LUT_LEN];
    for z in 0..GRID_SIDE {
        for y in 0..GRID_SIDE {
            for x in 0..GRID_SIDE {
                let flat = x + y * GRID_SIDE + z * GRID_SIDE * GRID_SIDE + CORNER_OFFSETS[0];
                for (plane, value) in f(x, y, z).into_iter().enumerate() {
                    bytes[flat + plane * GRID_CELLS] = value;
                }
            }
        }
    }
    bytes
}

/// Two-pigment LUT: a blue pigment rising along B, a yellow pigment
/// rising with min(R, G) and fading with B.
pub fn blue_yellow_lut() -> Vec<u8> {
    logical_lut(|x, y, z| {
        let blue = (255 * z + 31) / 63;
        let yellow = (255 * x.min(y) * (63 - z) + 1984) / 3969;
        [blue as u8, yellow as u8, 0]
    })
}

/// Percent-encode the `#` of a hex color for use in a query string
pub fn q(color: &str) -> String {
    color.replace('#', "%23")
}
