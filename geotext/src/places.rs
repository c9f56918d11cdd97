//! The public query surface: extract, filter and tabulate in one call.

use serde::Serialize;

use crate::config::{ExtractionConfig, ExtractionMode};
use crate::extraction::{Matches, extractor_for};
use crate::gazetteer::GazetteerIndex;
use crate::mentions::{CountryMentions, tabulate};

/// Options for one extraction call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Matching strategy
    pub mode: ExtractionMode,
    /// Only keep cities, admin divisions and nationalities of this country
    pub country: Option<String>,
}

impl ExtractOptions {
    /// Strict matching, no country filter.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Aggressive matching, no country filter.
    pub fn aggressive() -> Self {
        Self {
            mode: ExtractionMode::Aggressive,
            country: None,
        }
    }

    /// Restrict results to one country code.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }
}

impl From<&ExtractionConfig> for ExtractOptions {
    fn from(config: &ExtractionConfig) -> Self {
        Self {
            mode: config.mode,
            country: config.country.clone(),
        }
    }
}

/// Places found in a text, with a ranked per-country tally.
///
/// ```no_run
/// use geotext::prelude::*;
///
/// # fn main() -> geotext::Result<()> {
/// let index = GazetteerIndex::shared()?;
/// let places = GeoText::new(&index, "New York, Texas, and also China");
/// assert_eq!(places.country_mentions().to_pairs(), vec![("US", 2), ("CN", 1)]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeoText {
    #[serde(flatten)]
    matches: Matches,
    country_mentions: CountryMentions,
}

impl GeoText {
    /// Strict extraction without a country filter.
    pub fn new(index: &GazetteerIndex, text: &str) -> Self {
        Self::with_options(index, text, &ExtractOptions::default())
    }

    /// Aggressive extraction without a country filter.
    pub fn aggressive(index: &GazetteerIndex, text: &str) -> Self {
        Self::with_options(index, text, &ExtractOptions::aggressive())
    }

    /// Extract with explicit options.
    pub fn with_options(index: &GazetteerIndex, text: &str, options: &ExtractOptions) -> Self {
        let extractor = extractor_for(options.mode);
        let mut matches = extractor.extract(index, text);

        if let Some(country) = &options.country {
            matches.retain_country(index, country);
        }

        let country_mentions = tabulate(index, &matches);
        tracing::debug!(
            extractor = extractor.name(),
            country = options.country.as_deref(),
            chars = text.len(),
            matched = matches.len(),
            countries = country_mentions.len(),
            "extracted places"
        );

        Self {
            matches,
            country_mentions,
        }
    }

    /// Extract against the process-wide shared index.
    pub fn extract(text: &str, options: &ExtractOptions) -> crate::Result<Self> {
        let index = GazetteerIndex::shared()?;
        Ok(Self::with_options(&index, text, options))
    }

    /// Matched country names, in order of appearance.
    pub fn countries(&self) -> &[String] {
        &self.matches.countries
    }

    /// Matched admin division names, in order of appearance.
    pub fn admin_divisions(&self) -> &[String] {
        &self.matches.admin_divisions
    }

    /// Matched city names, in order of appearance.
    pub fn cities(&self) -> &[String] {
        &self.matches.cities
    }

    /// Matched nationalities (always empty in strict mode).
    pub fn nationalities(&self) -> &[String] {
        &self.matches.nationalities
    }

    /// Countries ranked by mentions.
    pub fn country_mentions(&self) -> &CountryMentions {
        &self.country_mentions
    }

    /// All four buckets.
    pub fn matches(&self) -> &Matches {
        &self.matches
    }

    /// Serialize the result as JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
