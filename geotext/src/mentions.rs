//! Per-country mention tallies.

use std::collections::{HashMap, HashSet};

use serde::ser::{Serialize, Serializer};

use crate::extraction::Matches;
use crate::gazetteer::{Category, GazetteerIndex};

/// Number of mentions attributed to one country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionCount {
    pub country_code: String,
    pub count: usize,
}

/// Country codes ranked by mention count, then by the largest population
/// seen for the country, then by first appearance.
///
/// Serializes as an ordered map `{"US": 2, "GE": 1}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryMentions {
    entries: Vec<MentionCount>,
}

impl CountryMentions {
    /// Count for a country code, if it was mentioned.
    pub fn get(&self, country_code: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.country_code == country_code)
            .map(|entry| entry.count)
    }

    /// Entries in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &MentionCount> {
        self.entries.iter()
    }

    /// Country codes in rank order.
    pub fn codes(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.country_code.as_str())
            .collect()
    }

    /// `(code, count)` pairs in rank order.
    pub fn to_pairs(&self) -> Vec<(&str, usize)> {
        self.entries
            .iter()
            .map(|entry| (entry.country_code.as_str(), entry.count))
            .collect()
    }

    /// The most mentioned country.
    pub fn top(&self) -> Option<&MentionCount> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CountryMentions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.entries
                .iter()
                .map(|entry| (&entry.country_code, entry.count)),
        )
    }
}

#[derive(Debug)]
struct Tally {
    count: usize,
    max_population: u64,
    first_seen: usize,
}

/// Tally the matched strings of every category per country.
///
/// A string mentioned several times in one category counts every time, but a
/// `(country, string)` pair already counted in an earlier category is not
/// counted again, so "New York" found both as a city and as a state of the US
/// is one mention. The counted pairs are only updated once a category is
/// finished.
pub fn tabulate(index: &GazetteerIndex, matches: &Matches) -> CountryMentions {
    let mut tallies: HashMap<&str, Tally> = HashMap::new();
    let mut counted: HashSet<(&str, &str)> = HashSet::new();

    for category in Category::ALL {
        let mut seen = Vec::new();

        for name in matches.bucket(category) {
            let Some(record) = index.record(category, name) else {
                tracing::warn!(%category, name = %name, "matched name missing from its category");
                continue;
            };

            let next_rank = tallies.len();
            let tally = tallies
                .entry(record.country_code.as_str())
                .or_insert(Tally {
                    count: 0,
                    max_population: 0,
                    first_seen: next_rank,
                });
            tally.max_population = tally.max_population.max(record.population);

            let pair = (record.country_code.as_str(), name.as_str());
            if !counted.contains(&pair) {
                tally.count += 1;
            }
            seen.push(pair);
        }

        counted.extend(seen);
    }

    let mut ranked: Vec<(&str, Tally)> = tallies.into_iter().collect();
    ranked.sort_by(|(_, a), (_, b)| {
        b.count
            .cmp(&a.count)
            .then(b.max_population.cmp(&a.max_population))
            .then(a.first_seen.cmp(&b.first_seen))
    });

    CountryMentions {
        entries: ranked
            .into_iter()
            .map(|(code, tally)| MentionCount {
                country_code: code.to_string(),
                count: tally.count,
            })
            .collect(),
    }
}
