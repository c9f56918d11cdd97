//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use super::{Result, models::*, validation};
use std::path::{Path, PathBuf};

/// Builder for creating GeoTextConfig instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: GeoTextConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: GeoTextConfig::default(),
        }
    }

    /// Set the directory holding the gazetteer tables.
    pub fn with_data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.gazetteer.data_dir = path.as_ref().to_path_buf();
        self
    }

    /// Override the file name of the cities table, e.g. `cities500.txt`.
    pub fn with_cities_file(mut self, file: impl Into<String>) -> Self {
        self.config.gazetteer.cities.file = file.into();
        self
    }

    /// Apply a tab separated city patch table, e.g. `citypatches.txt`.
    pub fn with_city_patches(mut self, file: impl Into<String>) -> Self {
        self.config.gazetteer.city_patches = Some(TableConfig::tsv(file));
        self
    }

    /// Replace the blacklist of generic words.
    pub fn with_blacklist<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.gazetteer.blacklist = words.into_iter().map(Into::into).collect();
        self
    }

    /// Add a word to the blacklist.
    pub fn blacklist_word(mut self, word: impl Into<String>) -> Self {
        self.config.gazetteer.blacklist.push(word.into());
        self
    }

    /// Set the default extraction mode.
    pub fn with_extraction_mode(mut self, mode: ExtractionMode) -> Self {
        self.config.extraction.mode = mode;
        self
    }

    /// Use aggressive extraction by default.
    pub fn aggressive(self) -> Self {
        self.with_extraction_mode(ExtractionMode::Aggressive)
    }

    /// Restrict default extraction to one country code.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.config.extraction.country = Some(country.into());
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Configure logging to a file.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Create a configuration for development.
    ///
    /// Tables are read from `./data` and logging is at debug level.
    pub fn development() -> Self {
        Self::new()
            .with_data_dir(PathBuf::from("./data"))
            .with_log_level(LogLevel::Debug)
            .with_log_format(LogFormat::Pretty)
    }

    /// Create a configuration for testing against the bundled fixtures.
    pub fn testing() -> Self {
        Self::development().with_data_dir(PathBuf::from("./tests/fixtures"))
    }

    /// Build the configuration, validating it in the process.
    pub fn build(self) -> Result<GeoTextConfig> {
        validation::validate_config(&self.config)?;

        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
