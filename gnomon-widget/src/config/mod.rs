//! Configuration loading
//!
//! Reads `ClockConfig` from a TOML file or the embedded defaults.

pub mod loader;

pub use loader::{load_config, parse_config, ConfigError, EMBEDDED_CONFIG};
