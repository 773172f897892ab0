//! Configuration loading from TOML files.
//!
//! Keys are kebab-case and all optional:
//!
//! ```toml
//! node-count = 12
//! area-size = 1500
//! transport = "acoustic"
//! clustering = true
//! sofar = true
//! seed = 3
//! ```
//!
//! Range checks are left to `validate_configuration`, which runs as part of
//! every simulation.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::simulation::Configuration;

/// Error type for configuration file failures.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Failed to read config file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parse a configuration from TOML text. Missing keys take their defaults.
pub fn parse_configuration(content: &str) -> Result<Configuration, ConfigLoadError> {
    Ok(toml::from_str(content)?)
}

/// Load a configuration from a TOML file.
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Returns
/// * `Ok(Configuration)` if the file was read and parsed
/// * `Err(ConfigLoadError)` describing the failure otherwise
pub fn load_configuration(path: &Path) -> Result<Configuration, ConfigLoadError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigLoadError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_configuration(&content)?;
    log::info!("Loaded configuration from {}", path.display());
    Ok(config)
}
