//! Public API for the pigment-mix crate.
//!
//! This module provides the high-level API: the [`PigmentMixer`] context
//! and the [`MixError`] unified error type.

mod error;
mod mixer;

pub use error::MixError;
pub use mixer::PigmentMixer;
