pub mod config;

pub use config::{AppConfig, OutputConfig, StripConfig, TransformConfig, CONFIG_ENV};
