//! Sheets type - the ordered, named collection of tables in a document

use std::fmt;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::table::Table;

/// An ordered collection of named tables
///
/// Sheet names are unique and kept in insertion order, which for parsed
/// documents is document order.
#[derive(Debug, Clone, Default)]
pub struct Sheets {
    tables: IndexMap<String, Table>,
}

impl Sheets {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            tables: IndexMap::new(),
        }
    }

    /// Get the number of sheets
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check if there are no sheets
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Check if a sheet name exists
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Get a table by sheet name
    pub fn get(&self, name: &str) -> Result<&Table> {
        self.tables
            .get(name)
            .ok_or_else(|| Error::NoTable(name.to_string()))
    }

    /// Get a mutable table by sheet name
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Table> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| Error::NoTable(name.to_string()))
    }

    /// Get a sheet name and table by position
    pub fn get_index(&self, index: usize) -> Result<(&str, &Table)> {
        self.tables
            .get_index(index)
            .map(|(name, table)| (name.as_str(), table))
            .ok_or(Error::IndexOutOfRange {
                index,
                count: self.tables.len(),
            })
    }

    /// Get a sheet name and mutable table by position
    pub fn get_index_mut(&mut self, index: usize) -> Result<(&str, &mut Table)> {
        let count = self.tables.len();
        self.tables
            .get_index_mut(index)
            .map(|(name, table)| (name.as_str(), table))
            .ok_or(Error::IndexOutOfRange { index, count })
    }

    /// Get the position of a sheet by name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.tables.get_index_of(name)
    }

    /// Add a sheet at the end
    ///
    /// The first sheet with a given name wins: if `name` already exists the
    /// collection is left unchanged and `false` is returned.
    pub fn insert<S: Into<String>>(&mut self, name: S, table: Table) -> bool {
        let name = name.into();
        if self.tables.contains_key(&name) {
            return false;
        }
        self.tables.insert(name, table);
        true
    }

    /// Get a table by name, appending an empty one if it does not exist
    pub fn table_mut<S: Into<String>>(&mut self, name: S) -> &mut Table {
        self.tables.entry(name.into()).or_default()
    }

    /// Remove a sheet, keeping the order of the others
    pub fn remove(&mut self, name: &str) -> Option<Table> {
        self.tables.shift_remove(name)
    }

    /// Sheet names in order
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + DoubleEndedIterator {
        self.tables.keys().map(String::as_str)
    }

    /// Iterate `(name, table)` pairs in order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Table)> + DoubleEndedIterator {
        self.tables.iter().map(|(name, table)| (name.as_str(), table))
    }

    /// Iterate `(name, table)` pairs in order, mutably
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Table)> {
        self.tables
            .iter_mut()
            .map(|(name, table)| (name.as_str(), table))
    }
}

impl PartialEq for Sheets {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<'a> IntoIterator for &'a Sheets {
    type Item = (&'a String, &'a Table);
    type IntoIter = indexmap::map::Iter<'a, String, Table>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}

impl fmt::Display for Sheets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, table) in &self.tables {
            writeln!(f, "===========  {}  ===========", name)?;
            write!(f, "{}", table)?;
            f.write_str("\n\n")?;
        }
        Ok(())
    }
}
