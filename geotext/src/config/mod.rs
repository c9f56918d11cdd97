//! Configuration system for GeoText.
//!
//! Configuration is layered with figment: built-in defaults, then an optional
//! file, then `GEOTEXT_` environment variables, and is validated before use.

mod builder;
mod loader;
mod models;
mod validation;

pub use builder::ConfigBuilder;
pub use loader::ConfigLoader;
pub use models::*;
pub use validation::validate_config;

/// Default configuration file names that the system will look for
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "geotext.toml",
    "geotext.yaml",
    "geotext.yml",
    "geotext.json",
    ".geotext/config.toml",
    ".geotext/config.yaml",
    ".geotext/config.yml",
    ".geotext/config.json",
];

/// Environment variable prefix for GeoText configuration
pub const ENV_PREFIX: &str = "GEOTEXT_";

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error occurred during file loading
    #[error("Failed to load configuration file: {0}")]
    FileLoadError(String),

    /// Error occurred during validation
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error occurred during parsing
    #[error("Configuration parsing error: {0}")]
    ParseError(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
