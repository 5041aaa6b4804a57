//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file is not valid TOML or does not match the inkpress schema")]
    Toml(#[from] toml::de::Error),

    #[error("invalid site configuration: {0}")]
    Validation(String),
}
