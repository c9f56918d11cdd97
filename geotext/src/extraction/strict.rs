//! Capitalization-driven candidate generation.

use lazy_static::lazy_static;
use regex::Regex;

use super::{Matches, PlaceExtractor};
use crate::config::ExtractionMode;
use crate::gazetteer::GazetteerIndex;

lazy_static! {
    /// Runs of capitalized words, optionally joined by a space or hyphen and a
    /// short lowercase linking article such as "de " or "do ".
    static ref CANDIDATE_REGEX: Regex = Regex::new(
        r"[A-ZÀ-Ú]+[a-zà-ú]+[ \-]?(?:d[a-u].)?(?:[A-ZÀ-Ú]+[a-zà-ú]+)*"
    ).unwrap();
}

/// Extractor for properly capitalized text.
///
/// Nationalities are never reported: capitalized adjectives such as
/// "Spanish" are too often not about a place.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictExtractor;

impl StrictExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl PlaceExtractor for StrictExtractor {
    fn extract(&self, index: &GazetteerIndex, text: &str) -> Matches {
        let mut matches = Matches::default();

        for found in CANDIDATE_REGEX.find_iter(text) {
            let candidate = found.as_str().trim();
            let Some(categories) = index.lookup(candidate) else {
                continue;
            };
            tracing::trace!(candidate, start = found.start(), ?categories, "strict match");
            matches.push(categories, candidate);
        }

        matches.nationalities.clear();
        matches
    }

    fn name(&self) -> &str {
        "strict"
    }

    fn mode(&self) -> ExtractionMode {
        ExtractionMode::Strict
    }
}
