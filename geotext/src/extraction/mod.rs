//! Place-name extraction from free text.
//!
//! Two strategies share the [`PlaceExtractor`] trait:
//! [`StrictExtractor`] trusts capitalization, [`AggressiveExtractor`] scans
//! every token n-gram.

mod aggressive;
mod strict;
mod traits;
mod types;

pub use aggressive::{AggressiveExtractor, MAX_NGRAM_TOKENS, MIN_MIXED_CASE_CHARS};
pub use strict::StrictExtractor;
pub use traits::PlaceExtractor;
pub use types::Matches;

use crate::config::ExtractionMode;

static STRICT: StrictExtractor = StrictExtractor;
static AGGRESSIVE: AggressiveExtractor = AggressiveExtractor;

/// The extractor implementing `mode`.
pub fn extractor_for(mode: ExtractionMode) -> &'static dyn PlaceExtractor {
    match mode {
        ExtractionMode::Strict => &STRICT,
        ExtractionMode::Aggressive => &AGGRESSIVE,
    }
}
