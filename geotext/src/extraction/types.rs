//! Matched-string buckets produced by the extractors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::gazetteer::{Category, GazetteerIndex};

/// Verbatim matched strings, one ordered bucket per category.
///
/// Strings appear in order of occurrence in the text and are not
/// deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matches {
    pub countries: Vec<String>,
    pub admin_divisions: Vec<String>,
    pub cities: Vec<String>,
    pub nationalities: Vec<String>,
}

impl Matches {
    /// Bucket for one category.
    pub fn bucket(&self, category: Category) -> &[String] {
        match category {
            Category::Countries => &self.countries,
            Category::AdminDivisions => &self.admin_divisions,
            Category::Cities => &self.cities,
            Category::Nationalities => &self.nationalities,
        }
    }

    /// Mutable bucket for one category.
    pub fn bucket_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Countries => &mut self.countries,
            Category::AdminDivisions => &mut self.admin_divisions,
            Category::Cities => &mut self.cities,
            Category::Nationalities => &mut self.nationalities,
        }
    }

    /// Append `candidate` to the bucket of every category in `categories`.
    pub(crate) fn push(&mut self, categories: &BTreeSet<Category>, candidate: &str) {
        for category in categories {
            self.bucket_mut(*category).push(candidate.to_string());
        }
    }

    /// Keep only cities, admin divisions and nationalities attributed to
    /// `country_code`. Countries are left untouched.
    pub fn retain_country(&mut self, index: &GazetteerIndex, country_code: &str) {
        for category in [
            Category::Cities,
            Category::AdminDivisions,
            Category::Nationalities,
        ] {
            let places = index.category(category);
            self.bucket_mut(category).retain(|name| {
                places
                    .get(name)
                    .is_some_and(|record| record.country_code.eq_ignore_ascii_case(country_code))
            });
        }
    }

    /// Total number of matched strings over all buckets.
    pub fn len(&self) -> usize {
        self.countries.len()
            + self.admin_divisions.len()
            + self.cities.len()
            + self.nationalities.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
