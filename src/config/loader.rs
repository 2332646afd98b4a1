//! Configuration loading from the environment and optional file.

use std::env;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";

/// Environment variable overriding the listener port.
pub const PORT_VAR: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for the schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The PORT override is not a valid port number.
    #[error("invalid port {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Semantic validation failed.
    #[error("validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration: defaults, then the optional `CONFIG_PATH` file,
/// then environment overrides, then semantic validation.
pub fn load() -> Result<ServerConfig, ConfigError> {
    let mut config = match env::var(CONFIG_PATH_VAR) {
        Ok(path) => load_file(Path::new(&path))?,
        Err(_) => ServerConfig::default(),
    };

    if let Ok(raw) = env::var(PORT_VAR) {
        config.listener.port = parse_port(&raw)?;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load and parse a TOML config file.
pub fn load_file(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim().parse().map_err(|source| ConfigError::InvalidPort {
        value: raw.to_string(),
        source,
    })
}
