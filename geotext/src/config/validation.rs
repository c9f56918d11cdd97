//! Configuration validation utilities.
//!
//! This module provides validation functions for configuration values.

use super::ConfigError;
use super::models::*;
use crate::gazetteer::normalize;

/// Validate the entire configuration.
pub fn validate_config(config: &GeoTextConfig) -> Result<(), ConfigError> {
    validate_gazetteer_config(&config.gazetteer)?;
    validate_extraction_config(&config.extraction)?;

    Ok(())
}

/// Validate gazetteer configuration.
fn validate_gazetteer_config(config: &GazetteerConfig) -> Result<(), ConfigError> {
    if config.data_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Data directory cannot be empty".to_string(),
        ));
    }

    for (name, table) in [
        ("aliases", &config.aliases),
        ("custom_aliases", &config.custom_aliases),
        ("countries", &config.countries),
        ("cities", &config.cities),
        ("admin_divisions", &config.admin_divisions),
        ("nationalities", &config.nationalities),
    ] {
        validate_table_config(name, table)?;
    }

    if let Some(table) = &config.city_patches {
        validate_table_config("city_patches", table)?;
    }

    // Blacklist entries are compared against normalized lowercase keys
    for word in &config.blacklist {
        if word.is_empty() || normalize::lookup_key(word) != *word {
            return Err(ConfigError::ValidationError(format!(
                "Blacklist entry '{}' must be a non-empty normalized lowercase name",
                word
            )));
        }
    }

    Ok(())
}

fn validate_table_config(name: &str, table: &TableConfig) -> Result<(), ConfigError> {
    if table.file.trim().is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "File name for table '{}' cannot be empty",
            name
        )));
    }

    if table.separator == '\n' || table.separator == '\r' {
        return Err(ConfigError::ValidationError(format!(
            "Separator for table '{}' cannot be a line break",
            name
        )));
    }

    if table.separator == table.comment {
        return Err(ConfigError::ValidationError(format!(
            "Separator and comment character for table '{}' must differ",
            name
        )));
    }

    Ok(())
}

/// Validate extraction defaults.
fn validate_extraction_config(config: &ExtractionConfig) -> Result<(), ConfigError> {
    // Unknown codes are allowed (they simply match nothing), blank ones are not
    if let Some(country) = &config.country
        && country.trim().is_empty()
    {
        return Err(ConfigError::ValidationError(
            "Country filter cannot be blank; omit it to disable filtering".to_string(),
        ));
    }

    Ok(())
}
