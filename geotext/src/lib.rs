//! # GeoText
//!
//! Extract cities, administrative divisions, countries and nationalities from
//! free-form text and attribute every mention to an ISO country code.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use geotext::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Build the gazetteer index once from the geonames tables
//!     let config = ConfigBuilder::new().with_data_dir("./data").build()?;
//!     let index = geotext::init(config)?;
//!
//!     // Strict mode trusts capitalization
//!     let places = GeoText::new(&index, "I would like to visit Lima, Dublin and Moscow (Russia).");
//!     assert_eq!(places.cities(), ["Lima", "Dublin", "Moscow"]);
//!     assert_eq!(places.country_mentions().to_pairs(), vec![("RU", 2), ("PE", 1), ("IE", 1)]);
//!
//!     // Aggressive mode ignores case and uses disambiguating suffixes
//!     let places = GeoText::aggressive(&index, "I live in Essex, MD.");
//!     assert_eq!(places.cities(), ["Essex MD"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Gazetteer**: delimited tables are loaded once into an immutable
//!   [`GazetteerIndex`](gazetteer::GazetteerIndex) (four category maps plus a
//!   name → categories meta index)
//! - **Extraction**: a strict regex-driven extractor and an aggressive
//!   longest-n-gram extractor, both read-only against the index
//! - **Mentions**: matched strings are tallied per country and ranked

pub mod config;
pub mod extraction;
pub mod gazetteer;
pub mod logging;
pub mod mentions;
pub mod places;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::places::{ExtractOptions, GeoText};

    pub use crate::init;

    pub use crate::config::{
        ConfigBuilder, ConfigLoader, ExtractionMode, GeoTextConfig, LogFormat, LogLevel,
    };

    pub use crate::extraction::{AggressiveExtractor, Matches, PlaceExtractor, StrictExtractor};

    pub use crate::gazetteer::{Category, DataLoadError, GazetteerIndex, PlaceRecord};

    pub use crate::mentions::{CountryMentions, MentionCount};

    pub use crate::{GeoTextError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for GeoText operations
#[derive(Debug, thiserror::Error)]
pub enum GeoTextError {
    /// A gazetteer table is missing or malformed
    #[error("Gazetteer load error: {0}")]
    DataLoad(#[from] gazetteer::DataLoadError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] logging::LogError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for GeoText operations
pub type Result<T> = std::result::Result<T, GeoTextError>;

/// Initialize logging and build the gazetteer index from `config`.
///
/// The returned index is immutable; clone the `Arc` to share it across
/// threads.
///
/// # Examples
///
/// ```rust,no_run
/// use geotext::prelude::*;
///
/// fn example() -> Result<()> {
///     let config = ConfigLoader::new().load_default_files().load_env().extract()?;
///     let index = geotext::init(config)?;
///     let places = GeoText::aggressive(&index, "paris? INDIA, 日本");
///     println!("{}", places.to_json()?);
///     Ok(())
/// }
/// ```
pub fn init(config: config::GeoTextConfig) -> Result<std::sync::Arc<gazetteer::GazetteerIndex>> {
    // Ignore errors if tracing is already initialized elsewhere
    let _ = logging::init(&config.logging);

    let index = gazetteer::GazetteerIndex::load(&config.gazetteer)?;
    Ok(std::sync::Arc::new(index))
}
