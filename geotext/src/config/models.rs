//! Configuration model definitions.
//!
//! This module contains the configuration structures for all GeoText components.

use crate::gazetteer::TableFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration structure for GeoText.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeoTextConfig {
    /// Gazetteer tables and blacklist
    pub gazetteer: GazetteerConfig,

    /// Default extraction options
    pub extraction: ExtractionConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Where the gazetteer tables live and how they are laid out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GazetteerConfig {
    /// Directory holding every table file
    pub data_dir: PathBuf,

    /// geonames alternate names (`alternateNamesFiltered.txt`)
    pub aliases: TableConfig,

    /// Hand-maintained aliases that extend the geonames ones
    pub custom_aliases: TableConfig,

    /// geonames `countryInfo.txt`
    pub countries: TableConfig,

    /// geonames cities table
    pub cities: TableConfig,

    /// geonames first-level admin divisions
    pub admin_divisions: TableConfig,

    /// `Nationality:CC` table
    pub nationalities: TableConfig,

    /// Optional `name, CC[, population]` overrides applied on top of the cities
    pub city_patches: Option<TableConfig>,

    /// Generic words never categorized even though they name real places
    pub blacklist: Vec<String>,
}

/// Words that are also nationalities or admin divisions.
pub const DEFAULT_BLACKLIST: &[&str] = &[
    "pole", "north", "northern", "western", "central", "southern", "eastern",
];

impl Default for GazetteerConfig {
    fn default() -> Self {
        let data_dir = directories::ProjectDirs::from("org", "geotext", "geotext")
            .map(|dirs| dirs.data_dir().join("gazetteer"))
            .unwrap_or_else(|| PathBuf::from("./data"));

        Self {
            data_dir,
            aliases: TableConfig::tsv("alternateNamesFiltered.txt"),
            custom_aliases: TableConfig::tsv("custom_aliases.txt"),
            countries: TableConfig {
                skip: 1,
                ..TableConfig::tsv("countryInfo.txt")
            },
            cities: TableConfig::tsv("cities15000.txt"),
            admin_divisions: TableConfig::tsv("admin_divisions1.txt"),
            nationalities: TableConfig {
                separator: ':',
                ..TableConfig::tsv("nationalities.txt")
            },
            city_patches: None,
            blacklist: DEFAULT_BLACKLIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl GazetteerConfig {
    /// Full path of a table file.
    pub fn path_of(&self, table: &TableConfig) -> PathBuf {
        self.data_dir.join(&table.file)
    }
}

/// One delimited table file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// File name, relative to the data directory
    pub file: String,

    /// Field separator
    #[serde(default = "default_separator")]
    pub separator: char,

    /// Comment character
    #[serde(default = "default_comment")]
    pub comment: char,

    /// Number of header lines to skip
    #[serde(default)]
    pub skip: usize,
}

fn default_separator() -> char {
    '\t'
}

fn default_comment() -> char {
    '#'
}

impl TableConfig {
    /// Tab separated table with `#` comments.
    pub fn tsv(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            separator: default_separator(),
            comment: default_comment(),
            skip: 0,
        }
    }

    /// Parsing format of this table.
    pub fn format(&self) -> TableFormat {
        TableFormat {
            separator: self.separator,
            comment: self.comment,
            skip: self.skip,
        }
    }
}

/// Candidate generation strategy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Capitalized word groups only; nationalities are not reported
    #[default]
    Strict,

    /// Any token n-gram, ignoring case and most punctuation
    Aggressive,
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionMode::Strict => write!(f, "strict"),
            ExtractionMode::Aggressive => write!(f, "aggressive"),
        }
    }
}

impl FromStr for ExtractionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(ExtractionMode::Strict),
            "aggressive" => Ok(ExtractionMode::Aggressive),
            _ => Err(format!("Invalid extraction mode: {}", s)),
        }
    }
}

/// Default options applied to extraction calls.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Matching strategy
    pub mode: ExtractionMode,

    /// Only keep cities, admin divisions and nationalities of this country
    pub country: Option<String>,
}

/// Configuration for logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,

    /// Log format
    pub format: LogFormat,

    /// File to log to (if any)
    pub file: Option<PathBuf>,

    /// Whether to log to stdout
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Default,
            file: None,
            stdout: true,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level
    Trace,

    /// Debug level
    Debug,

    /// Info level
    Info,

    /// Warn level
    Warn,

    /// Error level
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default format
    Default,

    /// JSON format
    Json,

    /// Compact format
    Compact,

    /// Pretty format
    Pretty,
}
