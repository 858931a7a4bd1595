//! Loading the mixing LUT from disk.

use std::path::{Path, PathBuf};

use pigment_mix::{CodecError, Lut};
use thiserror::Error;

use crate::models::LutSource;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("No LUT configured (set LUT_FILE, LUT_TRANSPORT_FILE or lut.path in the config)")]
    NotConfigured,

    #[error("Failed to read LUT file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode LUT transport: {0}")]
    Codec(#[from] CodecError),
}

/// Load a LUT from the given source.
pub fn load_lut(source: &LutSource) -> Result<Lut, LoadError> {
    let lut = match source {
        LutSource::Raw(path) => load_raw(path)?,
        LutSource::Transport(path) => load_transport(path)?,
    };

    if let Err(e) = lut.check() {
        tracing::warn!(%e, source = %source, "Loaded LUT is too small for lookups");
    } else {
        tracing::info!(source = %source, len = lut.len(), "Loaded LUT");
    }

    Ok(lut)
}

/// Read a raw LUT file verbatim.
pub fn load_raw(path: &Path) -> Result<Lut, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Lut::new(bytes))
}

/// Read a file holding a transport string and decode it.
///
/// Surrounding whitespace (such as a trailing newline) is ignored.
pub fn load_transport(path: &Path) -> Result<Lut, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Lut::from_transport(content.trim())?)
}
