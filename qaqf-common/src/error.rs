//! Common error types for the QAQF services

use thiserror::Error;

/// Common result type for QAQF operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors shared by the QAQF crates
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a configuration or content file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration value present but unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// Level outside the nine-level framework
    #[error("Unknown QAQF level: {0} (expected 1-9)")]
    UnknownLevel(i64),
}
