//! The immutable gazetteer index: four category maps plus the meta index.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::{Arc, OnceLock};

use serde::Serialize;

use super::error::Result;
use super::normalize::lookup_key;
use super::shapes::{AliasShape, CityPatchShape, CountryShape, NationalityShape, PlaceShape};
use super::table::{DelimitedTable, TableLoader};
use super::types::{AliasMap, Category, PlaceRecord};
use crate::config::{ConfigLoader, GazetteerConfig, TableConfig};

/// Normalized lowercase name → record, for one category.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    entries: HashMap<String, PlaceRecord>,
}

impl CategoryIndex {
    fn from_map(entries: HashMap<String, PlaceRecord>) -> Self {
        Self { entries }
    }

    /// Record for a name; the name is normalized and lowercased first.
    pub fn get(&self, name: &str) -> Option<&PlaceRecord> {
        self.entries.get(&lookup_key(name))
    }

    /// Whether the (already normalized lowercase) key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All normalized keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of keys, including alias and suffix variants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the category has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalized lowercase name → categories containing it.
#[derive(Debug, Clone, Default)]
pub struct MetaIndex {
    entries: HashMap<String, BTreeSet<Category>>,
}

impl MetaIndex {
    /// Categories for an already normalized lowercase key.
    pub fn get(&self, key: &str) -> Option<&BTreeSet<Category>> {
        self.entries.get(key)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no name is categorized.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Entry counts of an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub countries: usize,
    pub cities: usize,
    pub admin_divisions: usize,
    pub nationalities: usize,
    pub names: usize,
}

/// Read-only lookup structures built once from the gazetteer tables.
///
/// The index is `Send + Sync` and never mutated after construction, so a
/// single instance can be shared across threads behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct GazetteerIndex {
    countries: CategoryIndex,
    cities: CategoryIndex,
    admin_divisions: CategoryIndex,
    nationalities: CategoryIndex,
    meta: MetaIndex,
}

static SHARED: OnceLock<Arc<GazetteerIndex>> = OnceLock::new();

impl GazetteerIndex {
    /// Load every table named by the configuration and build the index.
    pub fn load(config: &GazetteerConfig) -> Result<Self> {
        let tables = GazetteerTables::read(config)?;
        IndexBuilder::new(config.blacklist.iter().cloned()).build(&tables)
    }

    /// Process-wide index built from the layered configuration on first use.
    ///
    /// Concurrent first calls may each build an index; only one is kept.
    pub fn shared() -> crate::Result<Arc<GazetteerIndex>> {
        if let Some(index) = SHARED.get() {
            return Ok(Arc::clone(index));
        }

        let config = ConfigLoader::new().load_default_files().load_env().extract()?;
        let index = Arc::new(Self::load(&config.gazetteer)?);
        Ok(Arc::clone(SHARED.get_or_init(|| index)))
    }

    /// Map for one category.
    pub fn category(&self, category: Category) -> &CategoryIndex {
        match category {
            Category::Countries => &self.countries,
            Category::Cities => &self.cities,
            Category::AdminDivisions => &self.admin_divisions,
            Category::Nationalities => &self.nationalities,
        }
    }

    pub fn countries(&self) -> &CategoryIndex {
        &self.countries
    }

    pub fn cities(&self) -> &CategoryIndex {
        &self.cities
    }

    pub fn admin_divisions(&self) -> &CategoryIndex {
        &self.admin_divisions
    }

    pub fn nationalities(&self) -> &CategoryIndex {
        &self.nationalities
    }

    pub fn meta(&self) -> &MetaIndex {
        &self.meta
    }

    /// Categories a name belongs to, after normalization.
    ///
    /// Blacklisted names have no categories even though the category maps
    /// still hold them.
    pub fn lookup(&self, name: &str) -> Option<&BTreeSet<Category>> {
        self.meta.get(&lookup_key(name))
    }

    /// Record of a name within one category.
    pub fn record(&self, category: Category, name: &str) -> Option<&PlaceRecord> {
        self.category(category).get(name)
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            countries: self.countries.len(),
            cities: self.cities.len(),
            admin_divisions: self.admin_divisions.len(),
            nationalities: self.nationalities.len(),
            names: self.meta.len(),
        }
    }
}

/// The six raw tables the index is built from.
#[derive(Debug, Clone, Default)]
pub struct GazetteerTables {
    pub aliases: DelimitedTable,
    pub custom_aliases: DelimitedTable,
    pub countries: DelimitedTable,
    pub cities: DelimitedTable,
    pub admin_divisions: DelimitedTable,
    pub nationalities: DelimitedTable,
    pub city_patches: DelimitedTable,
}

impl GazetteerTables {
    /// Read all tables from the configured data directory.
    pub fn read(config: &GazetteerConfig) -> Result<Self> {
        let read = |table: &TableConfig| {
            DelimitedTable::from_path(config.path_of(table), &table.format())
        };

        Ok(Self {
            aliases: read(&config.aliases)?,
            custom_aliases: read(&config.custom_aliases)?,
            countries: read(&config.countries)?,
            cities: read(&config.cities)?,
            admin_divisions: read(&config.admin_divisions)?,
            nationalities: read(&config.nationalities)?,
            city_patches: match &config.city_patches {
                Some(table) => read(table)?,
                None => DelimitedTable::default(),
            },
        })
    }
}

/// Builds a [`GazetteerIndex`] from parsed tables.
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    blacklist: HashSet<String>,
}

impl IndexBuilder {
    /// Create a builder that keeps `blacklist` names out of the meta index.
    pub fn new<I, S>(blacklist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            blacklist: blacklist
                .into_iter()
                .map(|word| lookup_key(word.as_ref()))
                .collect(),
        }
    }

    /// Build the index.
    pub fn build(&self, tables: &GazetteerTables) -> Result<GazetteerIndex> {
        let aliases = Self::merge_aliases(tables)?;

        let countries = TableLoader::load(&tables.countries, &CountryShape::new(&aliases))?;

        let mut nationalities = TableLoader::load(&tables.nationalities, &NationalityShape)?;
        nationalities.retain(|name, _| !countries.contains_key(name));

        let mut cities = TableLoader::load(&tables.cities, &PlaceShape::new(&aliases))?;
        let patches = TableLoader::load(&tables.city_patches, &CityPatchShape)?;
        tracing::debug!(patches = patches.len(), "applying city patches");
        cities.extend(patches);
        let admin_divisions =
            TableLoader::load(&tables.admin_divisions, &PlaceShape::new(&aliases))?;

        let index = GazetteerIndex {
            countries: CategoryIndex::from_map(countries),
            cities: CategoryIndex::from_map(cities),
            admin_divisions: CategoryIndex::from_map(admin_divisions),
            nationalities: CategoryIndex::from_map(nationalities),
            meta: MetaIndex::default(),
        };
        let meta = self.build_meta(&index);
        let index = GazetteerIndex { meta, ..index };

        let stats = index.stats();
        tracing::info!(
            countries = stats.countries,
            cities = stats.cities,
            admin_divisions = stats.admin_divisions,
            nationalities = stats.nationalities,
            names = stats.names,
            "gazetteer index built"
        );

        Ok(index)
    }

    /// geonames aliases with the custom ones added per id.
    fn merge_aliases(tables: &GazetteerTables) -> Result<AliasMap> {
        let mut aliases = TableLoader::collect(&tables.aliases, &AliasShape::geonames())?;
        let custom = TableLoader::collect(&tables.custom_aliases, &AliasShape::custom())?;

        tracing::debug!(
            ids = aliases.len(),
            custom_ids = custom.len(),
            "merging alias tables"
        );

        for (id, names) in custom {
            aliases.entry(id).or_default().extend(names);
        }
        Ok(aliases)
    }

    fn build_meta(&self, index: &GazetteerIndex) -> MetaIndex {
        let mut entries: HashMap<String, BTreeSet<Category>> = HashMap::new();

        for category in Category::ALL {
            for name in index.category(category).keys() {
                if self.blacklist.contains(name) {
                    continue;
                }
                entries.entry(name.to_string()).or_default().insert(category);
            }
        }

        MetaIndex { entries }
    }
}
