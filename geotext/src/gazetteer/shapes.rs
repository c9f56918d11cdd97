//! Table shapes for the geonames-style gazetteer files.
//!
//! Column offsets follow the geonames dump layouts:
//! `alternateNames`, `countryInfo` and the main `geoname` table (used for both
//! cities and first-level admin divisions).

use std::collections::BTreeSet;

use super::error::{DataLoadError, Result};
use super::normalize::lookup_key;
use super::table::{Row, TableShape};
use super::types::{AliasMap, PlaceRecord};

/// Feature code of top-level administrative records.
pub const TOP_LEVEL_ADMIN_FEATURE: &str = "ADM1";

/// Column offsets in `countryInfo.txt`.
pub mod country_columns {
    pub const ISO: usize = 0;
    pub const NAME: usize = 4;
    pub const POPULATION: usize = 7;
    pub const GEONAME_ID: usize = 16;
}

/// Column offsets in the geoname table (`cities15000.txt`, `admin_divisions1.txt`).
pub mod place_columns {
    pub const GEONAME_ID: usize = 0;
    pub const NAME: usize = 1;
    pub const ASCII_NAME: usize = 2;
    pub const FEATURE_CODE: usize = 7;
    pub const COUNTRY_CODE: usize = 8;
    pub const ADMIN1_CODE: usize = 10;
    pub const POPULATION: usize = 14;
}

/// `id → alternate name` rows, loaded in collect mode.
#[derive(Debug, Clone, Copy)]
pub struct AliasShape {
    id_column: usize,
    name_column: usize,
}

impl AliasShape {
    /// Layout of `alternateNamesFiltered.txt`.
    pub fn geonames() -> Self {
        Self {
            id_column: 1,
            name_column: 3,
        }
    }

    /// Layout of the custom alias table: id, alternate name.
    pub fn custom() -> Self {
        Self {
            id_column: 0,
            name_column: 1,
        }
    }
}

impl TableShape for AliasShape {
    type Value = String;

    fn keys(&self, row: &Row) -> Result<Vec<String>> {
        Ok(vec![row.field(self.id_column)?.to_string()])
    }

    fn value(&self, row: &Row) -> Result<String> {
        Ok(row.field(self.name_column)?.trim().to_string())
    }
}

/// Aliases registered for the record id found in `column`.
fn aliases_for<'a>(aliases: &'a AliasMap, row: &Row, column: usize) -> Result<Vec<&'a str>> {
    let id = row.field(column)?.trim();
    if id.is_empty() {
        return Err(DataLoadError::MissingAliasId {
            table: row.table().to_string(),
            line: row.line(),
            column,
        });
    }

    Ok(aliases
        .get(&lookup_key(id))
        .map(|names| names.iter().map(String::as_str).collect())
        .unwrap_or_default())
}

/// Countries keyed by name plus aliases of the country's geoname id.
#[derive(Debug, Clone, Copy)]
pub struct CountryShape<'a> {
    aliases: &'a AliasMap,
}

impl<'a> CountryShape<'a> {
    pub fn new(aliases: &'a AliasMap) -> Self {
        Self { aliases }
    }
}

impl TableShape for CountryShape<'_> {
    type Value = PlaceRecord;

    fn keys(&self, row: &Row) -> Result<Vec<String>> {
        let mut keys = vec![row.field(country_columns::NAME)?.to_string()];
        keys.extend(
            aliases_for(self.aliases, row, country_columns::GEONAME_ID)?
                .into_iter()
                .map(str::to_string),
        );
        Ok(keys)
    }

    fn value(&self, row: &Row) -> Result<PlaceRecord> {
        Ok(PlaceRecord::new(
            row.field(country_columns::ISO)?.trim(),
            row.population(country_columns::POPULATION)?,
        ))
    }
}

/// `Nationality:CC` rows. Nationalities carry no population.
#[derive(Debug, Clone, Copy, Default)]
pub struct NationalityShape;

impl TableShape for NationalityShape {
    type Value = PlaceRecord;

    fn keys(&self, row: &Row) -> Result<Vec<String>> {
        Ok(vec![row.field(0)?.to_string()])
    }

    fn value(&self, row: &Row) -> Result<PlaceRecord> {
        Ok(PlaceRecord::new(row.field(1)?.trim(), 0))
    }
}

/// Hand-maintained `name, CC[, population]` rows that override or add cities.
///
/// Only the name itself is keyed; suffix variants of a geonames city keep
/// their original record.
#[derive(Debug, Clone, Copy, Default)]
pub struct CityPatchShape;

impl TableShape for CityPatchShape {
    type Value = PlaceRecord;

    fn keys(&self, row: &Row) -> Result<Vec<String>> {
        Ok(vec![row.field(0)?.to_string()])
    }

    fn value(&self, row: &Row) -> Result<PlaceRecord> {
        let population = if row.len() > 2 { row.population(2)? } else { 0 };
        Ok(PlaceRecord::new(row.field(1)?.trim(), population))
    }
}

/// Cities and admin divisions, with disambiguating suffix variants.
///
/// Every name of a row (official, ascii, aliases) is also keyed as
/// `"name CC"`, `"name UK"` for GB rows, and `"name ADMIN1"` for rows that
/// are not themselves top-level admin records.
#[derive(Debug, Clone, Copy)]
pub struct PlaceShape<'a> {
    aliases: &'a AliasMap,
}

impl<'a> PlaceShape<'a> {
    pub fn new(aliases: &'a AliasMap) -> Self {
        Self { aliases }
    }
}

impl TableShape for PlaceShape<'_> {
    type Value = PlaceRecord;

    fn keys(&self, row: &Row) -> Result<Vec<String>> {
        let country_code = row.field(place_columns::COUNTRY_CODE)?.trim();
        let feature_code = row.field(place_columns::FEATURE_CODE)?.trim();
        let admin1 = row.field(place_columns::ADMIN1_CODE)?.trim();

        let mut names: BTreeSet<&str> = BTreeSet::new();
        names.insert(row.field(place_columns::NAME)?);
        names.insert(row.field(place_columns::ASCII_NAME)?);
        names.extend(aliases_for(self.aliases, row, place_columns::GEONAME_ID)?);
        names.retain(|name| !name.trim().is_empty());

        let mut suffixes = vec![country_code];
        if country_code == "GB" {
            suffixes.push("UK");
        }
        if !admin1.is_empty() && feature_code != TOP_LEVEL_ADMIN_FEATURE {
            suffixes.push(admin1);
        }

        let mut keys = Vec::with_capacity(names.len() * (suffixes.len() + 1));
        for name in names {
            keys.push(name.to_string());
            keys.extend(suffixes.iter().map(|suffix| format!("{name} {suffix}")));
        }
        Ok(keys)
    }

    fn value(&self, row: &Row) -> Result<PlaceRecord> {
        Ok(PlaceRecord::new(
            row.field(place_columns::COUNTRY_CODE)?.trim(),
            row.population(place_columns::POPULATION)?,
        ))
    }
}
