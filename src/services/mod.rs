pub mod lut_loader;
pub mod mix_service;

pub use lut_loader::{load_lut, LoadError};
pub use mix_service::MixService;
