//! Pigmix - pigment-style color mixing
//!
//! HTTP server and CLI around the `pigment-mix` latent mixer.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
