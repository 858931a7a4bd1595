//! LUT transport codec.
//!
//! The transport form is `base64(raw_deflate(delta(payload)))`, where the
//! payload is the three channel planes without the trailing padding. Delta
//! coding runs along 64-byte grid rows: the first byte of every row is
//! coded against a baseline of 127, every other byte against its
//! already-decoded predecessor. All arithmetic wraps modulo 256.

use std::io::Write;

use base64::{engine::general_purpose::STANDARD, Engine};
use flate2::{write::DeflateEncoder, Compression, Decompress, FlushDecompress, Status};

use super::error::CodecError;
use super::{GRID_SIDE, LUT_LEN, PADDING_LEN, PAYLOAD_LEN};

/// Delta coding resets at the start of every grid row.
const ROW_LEN: usize = GRID_SIDE;

/// Predecessor assumed for the first byte of each row.
const DELTA_BASELINE: u8 = 127;

/// Output growth step while inflating.
const INFLATE_CHUNK: usize = 64 * 1024;

/// Decode a transport string into a padded LUT buffer.
///
/// Returns the delta-decoded payload followed by [`PADDING_LEN`] zero
/// bytes. The shipped LUT decodes to exactly [`LUT_LEN`] bytes; other
/// payload lengths are returned as-is (and logged) so the lookup path can
/// report them.
///
/// # Errors
///
/// - [`CodecError::TransportDecode`] for invalid base64
/// - [`CodecError::Decompression`] for a malformed deflate stream
/// - [`CodecError::TruncatedStream`] when the stream ends early
pub fn decode_transport(input: &str) -> Result<Vec<u8>, CodecError> {
    let compressed = STANDARD.decode(input)?;
    let mut bytes = inflate(&compressed)?;

    if bytes.len() != PAYLOAD_LEN {
        tracing::warn!(
            len = bytes.len(),
            expected = PAYLOAD_LEN,
            "Decoded LUT payload has unexpected length"
        );
    }

    undo_delta(&mut bytes);
    bytes.resize(bytes.len() + PADDING_LEN, 0);

    tracing::debug!(
        compressed = compressed.len(),
        decoded = bytes.len(),
        "Decoded LUT transport payload"
    );

    Ok(bytes)
}

/// Encode a LUT buffer into its transport string.
///
/// A full-length buffer has its padding stripped first; any other length is
/// encoded verbatim. [`decode_transport`] inverts this exactly.
pub fn encode_transport(raw: &[u8]) -> Result<String, CodecError> {
    let payload = if raw.len() == LUT_LEN {
        &raw[..PAYLOAD_LEN]
    } else {
        raw
    };

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(&apply_delta(payload))
        .map_err(CodecError::Compression)?;
    let compressed = encoder.finish().map_err(CodecError::Compression)?;

    Ok(STANDARD.encode(compressed))
}

/// Inflate a complete raw deflate stream.
///
/// Drives [`Decompress`] directly so that a stream which runs out of input
/// before its final block is reported instead of yielding a short buffer.
fn inflate(input: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut inflater = Decompress::new(false);
    let mut out = Vec::with_capacity(PAYLOAD_LEN);

    loop {
        if out.len() == out.capacity() {
            out.reserve(INFLATE_CHUNK);
        }

        let consumed = inflater.total_in() as usize;
        let produced = inflater.total_out();
        let status =
            inflater.decompress_vec(&input[consumed..], &mut out, FlushDecompress::None)?;

        if status == Status::StreamEnd {
            return Ok(out);
        }

        let stalled =
            inflater.total_in() as usize == consumed && inflater.total_out() == produced;
        if stalled && out.len() < out.capacity() {
            return Err(CodecError::TruncatedStream { consumed });
        }
    }
}

fn undo_delta(bytes: &mut [u8]) {
    for row in bytes.chunks_mut(ROW_LEN) {
        let mut prev = DELTA_BASELINE;
        for byte in row {
            *byte = prev.wrapping_add(byte.wrapping_sub(DELTA_BASELINE));
            prev = *byte;
        }
    }
}

fn apply_delta(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    for row in bytes.chunks(ROW_LEN) {
        let mut prev = DELTA_BASELINE;
        for &byte in row {
            out.push(byte.wrapping_sub(prev).wrapping_add(DELTA_BASELINE));
            prev = byte;
        }
    }
    out
}
