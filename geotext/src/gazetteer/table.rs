//! Delimited gazetteer tables and the generic key/value table loader.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::path::Path;

use super::error::{DataLoadError, Result};
use super::normalize::lookup_key;

/// How a delimited table is laid out on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFormat {
    /// Field separator
    pub separator: char,
    /// Lines starting with this character are ignored
    pub comment: char,
    /// Number of leading lines skipped before any parsing
    pub skip: usize,
}

impl TableFormat {
    /// Tab separated, `#` comments, no header.
    pub fn tsv() -> Self {
        Self {
            separator: '\t',
            comment: '#',
            skip: 0,
        }
    }

    /// Set the field separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the number of header lines to skip.
    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }
}

impl Default for TableFormat {
    fn default() -> Self {
        Self::tsv()
    }
}

/// One data row of a gazetteer table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    table: String,
    line: usize,
    fields: Vec<String>,
}

impl Row {
    /// Create a row from its fields. `line` is the 1-based source line.
    pub fn new(table: impl Into<String>, line: usize, fields: Vec<String>) -> Self {
        Self {
            table: table.into(),
            line,
            fields,
        }
    }

    /// Name of the table this row came from.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// 1-based line number in the source.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Number of fields in the row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field at `index`, or a `MissingField` error when the row is too short.
    pub fn field(&self, index: usize) -> Result<&str> {
        self.fields
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| DataLoadError::MissingField {
                table: self.table.clone(),
                line: self.line,
                expected: index + 1,
                found: self.fields.len(),
            })
    }

    /// Field at `index` parsed as a population count.
    ///
    /// An empty field counts as zero inhabitants.
    pub fn population(&self, index: usize) -> Result<u64> {
        let raw = self.field(index)?.trim();
        if raw.is_empty() {
            return Ok(0);
        }
        raw.parse().map_err(|_| DataLoadError::InvalidPopulation {
            table: self.table.clone(),
            line: self.line,
            value: raw.to_string(),
        })
    }
}

/// A parsed delimited table: the row source every loader reads from.
#[derive(Debug, Clone, Default)]
pub struct DelimitedTable {
    name: String,
    rows: Vec<Row>,
}

impl DelimitedTable {
    /// Parse a table from in-memory contents.
    pub fn parse(name: impl Into<String>, contents: &str, format: &TableFormat) -> Self {
        let name = name.into();
        let rows = contents
            .lines()
            .enumerate()
            .skip(format.skip)
            .filter(|(_, line)| !line.trim().is_empty() && !line.starts_with(format.comment))
            .map(|(idx, line)| {
                let fields = line.split(format.separator).map(str::to_string).collect();
                Row::new(name.clone(), idx + 1, fields)
            })
            .collect();

        Self { name, rows }
    }

    /// Read and parse a UTF-8 table file.
    pub fn from_path<P: AsRef<Path>>(path: P, format: &TableFormat) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let table = Self::parse(name, &contents, format);
        tracing::debug!(table = %table.name, rows = table.rows.len(), "parsed gazetteer table");
        Ok(table)
    }

    /// Table name, used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Data rows in source order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// How to turn one row into lookup keys and a value.
///
/// There is one implementation per table layout (aliases, countries,
/// nationalities, places).
pub trait TableShape {
    /// Value stored under every key of a row
    type Value;

    /// Raw (unnormalized) keys for a row.
    fn keys(&self, row: &Row) -> Result<Vec<String>>;

    /// Value derived from a row.
    fn value(&self, row: &Row) -> Result<Self::Value>;
}

/// Builds lookup maps from a table and a shape.
///
/// Keys are always stored as `normalize(key).to_lowercase()`.
pub struct TableLoader;

impl TableLoader {
    /// Map every key to its row's value; later rows overwrite earlier ones.
    pub fn load<S: TableShape>(table: &DelimitedTable, shape: &S) -> Result<HashMap<String, S::Value>>
    where
        S::Value: Clone,
    {
        let mut map = HashMap::new();
        for row in table.rows() {
            let value = shape.value(row)?;
            for key in shape.keys(row)? {
                map.insert(lookup_key(&key), value.clone());
            }
        }
        Ok(map)
    }

    /// Collect the values of every row sharing a key into a set.
    pub fn collect<S: TableShape>(
        table: &DelimitedTable,
        shape: &S,
    ) -> Result<HashMap<String, HashSet<S::Value>>>
    where
        S::Value: Clone + Eq + Hash,
    {
        let mut map: HashMap<String, HashSet<S::Value>> = HashMap::new();
        for row in table.rows() {
            let value = shape.value(row)?;
            for key in shape.keys(row)? {
                map.entry(lookup_key(&key)).or_default().insert(value.clone());
            }
        }
        Ok(map)
    }
}
