pub mod config;

pub use config::{AppConfig, GradientConfig, LutConfig, LutSource};
