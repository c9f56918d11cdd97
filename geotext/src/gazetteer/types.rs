//! Value types stored in the gazetteer index.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Country attribution of one gazetteer entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaceRecord {
    /// ISO 3166-1 alpha-2 country code
    pub country_code: String,
    /// Number of inhabitants (0 when unknown, always 0 for nationalities)
    pub population: u64,
}

impl PlaceRecord {
    /// Create a new record.
    pub fn new(country_code: impl Into<String>, population: u64) -> Self {
        Self {
            country_code: country_code.into(),
            population,
        }
    }
}

/// The four kinds of place names the index knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Sovereign countries
    Countries,
    /// Cities and towns
    Cities,
    /// First-level (and patched) administrative divisions
    AdminDivisions,
    /// Demonyms such as "French"
    Nationalities,
}

impl Category {
    /// All categories, in the order mentions are tabulated.
    pub const ALL: [Category; 4] = [
        Category::Countries,
        Category::Nationalities,
        Category::Cities,
        Category::AdminDivisions,
    ];

    /// Get a string representation of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Countries => "countries",
            Category::Cities => "cities",
            Category::AdminDivisions => "admin_divisions",
            Category::Nationalities => "nationalities",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record id → alternate names.
pub type AliasMap = HashMap<String, HashSet<String>>;
