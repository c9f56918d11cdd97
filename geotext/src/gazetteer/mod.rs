//! Gazetteer tables and the index built from them.
//!
//! Tables are read once into [`DelimitedTable`]s, turned into lookup maps by
//! [`TableLoader`] with one [`TableShape`] per layout, and assembled by
//! [`IndexBuilder`] into an immutable [`GazetteerIndex`].

mod error;
mod index;
pub mod normalize;
pub mod shapes;
mod table;
mod types;

pub use error::DataLoadError;
pub use index::{CategoryIndex, GazetteerIndex, GazetteerTables, IndexBuilder, IndexStats, MetaIndex};
pub use normalize::{lookup_key, normalize};
pub use table::{DelimitedTable, Row, TableFormat, TableLoader, TableShape};
pub use types::{AliasMap, Category, PlaceRecord};
