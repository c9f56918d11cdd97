//! Errors raised while loading gazetteer tables.

use std::path::PathBuf;

/// Error raised while reading or parsing a gazetteer table.
///
/// Every variant is fatal: the index is never built from partially valid data.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// The table file could not be read
    #[error("Failed to read gazetteer table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row has fewer fields than the table shape requires
    #[error("Table '{table}' line {line}: expected at least {expected} fields, found {found}")]
    MissingField {
        table: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A population column does not hold a non-negative integer
    #[error("Table '{table}' line {line}: invalid population '{value}'")]
    InvalidPopulation {
        table: String,
        line: usize,
        value: String,
    },

    /// A row references aliases through an empty record id
    #[error("Table '{table}' line {line}: alias id column {column} is empty")]
    MissingAliasId {
        table: String,
        line: usize,
        column: usize,
    },
}

/// Result type for gazetteer loading.
pub type Result<T> = std::result::Result<T, DataLoadError>;
