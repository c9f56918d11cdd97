//! Structured logging infrastructure for GeoText.
//!
//! This module provides a configurable logging system based on the tracing crate,
//! supporting pretty, compact and JSON output to stdout or a file.

#[cfg(test)]
mod tests;

use crate::config::{LogFormat, LogLevel, LoggingConfig};
use std::path::Path;
use std::sync::{Mutex, OnceLock, PoisonError};
use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};

/// Keeps the file writer flushing for the lifetime of the process.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Whether [`init`] already installed the global subscriber.
static INITIALIZED: Mutex<bool> = Mutex::new(false);

/// Error type for logging operations
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing log level
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// Error in subscriber setup
    #[error("Subscriber error: {0}")]
    SubscriberError(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type for logging operations
pub type Result<T> = std::result::Result<T, LogError>;

/// Initialize the logging system with the given configuration.
///
/// Calling this again after a successful initialization is a no-op.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let mut initialized = INITIALIZED.lock().unwrap_or_else(PoisonError::into_inner);
    if *initialized {
        return Ok(());
    }

    let level = match config.level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    };

    // Nothing is installed without an output, so a later call may still set one up
    *initialized = match config.format {
        LogFormat::Json => init_json_logging(level, config)?,
        LogFormat::Compact => init_compact_logging(level, config)?,
        _ => init_pretty_logging(level, config)?,
    };

    Ok(())
}

/// Initialize logging with JSON formatting.
///
/// Returns whether a subscriber was installed.
fn init_json_logging(level: Level, config: &LoggingConfig) -> Result<bool> {
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_level(true)
        .with_target(true)
        .with_line_number(true)
        .with_thread_ids(true);

    match file_writer(config)? {
        Some(writer) => subscriber.with_writer(writer).try_init()?,
        None if config.stdout => subscriber.try_init()?,
        None => return Ok(false),
    }

    Ok(true)
}

/// Initialize logging with compact formatting
fn init_compact_logging(level: Level, config: &LoggingConfig) -> Result<bool> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_level(true)
        .with_target(true)
        .with_line_number(true)
        .with_thread_ids(true);

    match file_writer(config)? {
        Some(writer) => subscriber.with_writer(writer).try_init()?,
        None if config.stdout => subscriber.try_init()?,
        None => return Ok(false),
    }

    Ok(true)
}

/// Initialize logging with pretty formatting
fn init_pretty_logging(level: Level, config: &LoggingConfig) -> Result<bool> {
    let subscriber = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(level)
        .with_level(true)
        .with_target(true)
        .with_line_number(true)
        .with_thread_ids(true);

    match file_writer(config)? {
        Some(writer) => subscriber.with_writer(writer).try_init()?,
        None if config.stdout => subscriber.try_init()?,
        None => return Ok(false),
    }

    Ok(true)
}

/// File writer for the configured log file, when one is set.
///
/// A file takes precedence over stdout.
fn file_writer(config: &LoggingConfig) -> Result<Option<NonBlocking>> {
    let Some(path) = &config.file else {
        return Ok(None);
    };

    let (writer, guard) = create_non_blocking_file(path)?;
    // Only the first initialization owns a writer; later ones fail in try_init anyway
    let _ = FILE_GUARD.set(guard);
    Ok(Some(writer))
}

/// Create a non-blocking file writer.
fn create_non_blocking_file(path: impl AsRef<Path>) -> Result<(NonBlocking, WorkerGuard)> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file_appender = tracing_appender::rolling::never(
        path.parent().unwrap_or_else(|| Path::new(".")),
        path.file_name().unwrap_or_default(),
    );

    Ok(tracing_appender::non_blocking(file_appender))
}

/// Parse a log level string into a LogLevel enum.
pub fn parse_log_level(level: &str) -> Result<LogLevel> {
    level.parse().map_err(|_| LogError::InvalidLogLevel(level.to_string()))
}

/// Convert a tracing::Level to a LogLevel enum.
pub fn level_to_log_level(level: Level) -> LogLevel {
    match level {
        Level::TRACE => LogLevel::Trace,
        Level::DEBUG => LogLevel::Debug,
        Level::INFO => LogLevel::Info,
        Level::WARN => LogLevel::Warn,
        Level::ERROR => LogLevel::Error,
    }
}
