//! Traits for place-name extraction.

use super::Matches;
use crate::config::ExtractionMode;
use crate::gazetteer::GazetteerIndex;

/// Finds gazetteer names in text.
///
/// Implementations are stateless: all per-call state lives inside
/// [`PlaceExtractor::extract`], and the index is only read.
pub trait PlaceExtractor: Send + Sync + std::fmt::Debug {
    /// Scan `text` and bucket every name found in the index's meta index.
    fn extract(&self, index: &GazetteerIndex, text: &str) -> Matches;

    /// Get the name of this extractor for identification purposes.
    fn name(&self) -> &str;

    /// The extraction mode this extractor implements.
    fn mode(&self) -> ExtractionMode;
}
