//! Error types for LUT construction and lookup.

use thiserror::Error;

/// Failure while turning a transport string into LUT bytes (or back).
///
/// Each variant names the codec step that failed. A failed decode never
/// touches a previously installed LUT.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The transport string is not valid standard base64.
    #[error("base64 decode failed: {0}")]
    TransportDecode(#[from] base64::DecodeError),

    /// The decoded bytes are not a valid raw deflate stream.
    #[error("deflate decompression failed: {0}")]
    Decompression(#[from] flate2::DecompressError),

    /// The deflate stream ended before its final block.
    #[error("deflate stream truncated after {consumed} input bytes")]
    TruncatedStream {
        /// Compressed bytes consumed before input ran out
        consumed: usize,
    },

    /// Compressing a payload for transport failed.
    #[error("deflate compression failed: {0}")]
    Compression(#[source] std::io::Error),
}

/// Failure while reading from an installed LUT.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LutError {
    /// The buffer cannot hold the three channel planes plus padding.
    #[error("LUT too small: {len} bytes (need at least {required})")]
    TooSmall {
        /// Length of the installed buffer
        len: usize,
        /// Minimum length a lookup needs
        required: usize,
    },
}
