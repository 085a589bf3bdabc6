//! TOML configuration loader
//!
//! A user file given on the command line wins. If it cannot be read or
//! parsed, the embedded `gnomon.toml` is used instead, and if even that
//! fails the built-in defaults apply.

use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use gnomon_core::config::{ClockConfig, Language};

/// Embedded default configuration (compiled into the binary)
pub const EMBEDDED_CONFIG: &str = include_str!("../../gnomon.toml");

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML syntax error or a value of the wrong shape
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parse configuration text
///
/// When the file does not name a language, it is picked from `locale`
/// (for example the `LANG` environment variable).
pub fn parse_config(text: &str, locale: Option<&str>) -> Result<ClockConfig, ConfigError> {
    let table: toml::Table = toml::from_str(text)?;
    let explicit_language = table.contains_key("language");

    let mut config: ClockConfig = toml::Value::Table(table).try_into()?;
    if !explicit_language {
        config.language = Language::detect(None, locale);
    }
    Ok(config)
}

fn read_config(path: &Path, locale: Option<&str>) -> Result<ClockConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text, locale)
}

/// Load configuration, falling back to embedded defaults
pub fn load_config(path: Option<&Path>, locale: Option<&str>) -> ClockConfig {
    if let Some(path) = path {
        match read_config(path, locale) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("{e}, using embedded defaults");
            }
        }
    }

    match parse_config(EMBEDDED_CONFIG, locale) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            warn!("Embedded configuration rejected ({e}), using built-in defaults");
            ClockConfig {
                language: Language::detect(None, locale),
                ..ClockConfig::default()
            }
        }
    }
}
