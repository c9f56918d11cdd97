//! Case-insensitive greedy n-gram matching.

use super::{Matches, PlaceExtractor};
use crate::config::ExtractionMode;
use crate::gazetteer::{GazetteerIndex, normalize};

/// Location names are assumed to be at most this many tokens long.
pub const MAX_NGRAM_TOKENS: usize = 4;

/// Candidates shorter than this (in chars) are skipped when they contain a
/// lowercase letter, so "la" is ignored while "LA" or "日本" are looked up.
pub const MIN_MIXED_CASE_CHARS: usize = 3;

/// Liberal extractor that ignores capitalization and most punctuation.
///
/// Scans the normalized tokens left to right and keeps, at each position, the
/// longest n-gram found in the meta index. A match may not start inside the
/// span of the previous match unless it extends past that span's end.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggressiveExtractor;

impl AggressiveExtractor {
    pub fn new() -> Self {
        Self
    }

    fn is_noise(candidate: &str) -> bool {
        candidate.chars().count() < MIN_MIXED_CASE_CHARS
            && candidate.chars().any(char::is_lowercase)
    }
}

impl PlaceExtractor for AggressiveExtractor {
    fn extract(&self, index: &GazetteerIndex, text: &str) -> Matches {
        let normalized = normalize(text);
        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        let mut matches = Matches::default();

        // Tokens still covered by the previous match, counting the current one
        let mut prev_match_len = 0usize;
        for start in 0..tokens.len() {
            prev_match_len = prev_match_len.saturating_sub(1);
            let longest = MAX_NGRAM_TOKENS.min(tokens.len() - start);

            for length in (prev_match_len + 1..=longest).rev() {
                let candidate = tokens[start..start + length].join(" ");
                if Self::is_noise(&candidate) {
                    continue;
                }
                let Some(categories) = index.meta().get(&candidate.to_lowercase()) else {
                    continue;
                };

                tracing::trace!(
                    candidate = %candidate,
                    start,
                    length,
                    ?categories,
                    "aggressive match"
                );
                matches.push(categories, &candidate);
                prev_match_len = length;
                break;
            }
        }

        matches
    }

    fn name(&self) -> &str {
        "aggressive"
    }

    fn mode(&self) -> ExtractionMode {
        ExtractionMode::Aggressive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_filter() {
        assert!(AggressiveExtractor::is_noise("la"));
        assert!(AggressiveExtractor::is_noise("La"));
        assert!(!AggressiveExtractor::is_noise("LA"));
        assert!(!AggressiveExtractor::is_noise("日本"));
        assert!(!AggressiveExtractor::is_noise("Rio"));
    }

    #[test]
    fn test_empty_text() {
        let index = GazetteerIndex::default();
        assert!(AggressiveExtractor.extract(&index, "").is_empty());
        assert!(AggressiveExtractor.extract(&index, " ,.!? ").is_empty());
    }
}
