//! Punctuation and whitespace folding for place names.
//!
//! The same folding is applied to every index key at build time and to every
//! candidate string at lookup time, so both sides agree on e.g.
//! `"Washington, D.C."` == `"Washington DC"`.

/// Characters replaced by a space before tokenizing.
const SEPARATORS: [char; 5] = ['|', '\\', '/', ',', '-'];

/// Normalize punctuation and whitespace in a name.
///
/// Periods are removed, separator punctuation becomes whitespace, each token
/// loses leading/trailing ASCII punctuation and empty tokens are dropped.
/// Case is preserved.
pub fn normalize(s: &str) -> String {
    let folded: String = s
        .chars()
        .filter(|c| *c != '.')
        .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
        .collect();

    folded
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| c.is_ascii_punctuation()))
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Key used for every index insert and lookup: normalized, then lowercased.
pub fn lookup_key(s: &str) -> String {
    normalize(s).to_lowercase()
}
