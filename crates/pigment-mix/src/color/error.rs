//! Error type for color parsing.

use thiserror::Error;

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 digits after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 digits)")]
    InvalidLength,

    /// A character that is not a hexadecimal digit
    #[error("invalid hex digit: {0:?}")]
    InvalidDigit(char),
}
