//! Table type - a sparse grid addressed by row and column titles

use std::fmt;

use ahash::AHashMap;
use indexmap::{IndexMap, IndexSet};

use crate::error::{Error, Result};
use crate::row::RowView;

/// A sparse, title-addressed table
///
/// Rows and columns are identified by unique titles, kept in the order they
/// were first added. Every declared (row, column) pair is addressable; a
/// pair that was never written reads back as `None` ("unset"), which is
/// distinct from any stored value, including an empty string.
///
/// # Example
///
/// ```rust
/// use gridbook_core::Table;
///
/// let mut table = Table::new();
/// table.set_value("apples", "price", "1.20".to_string());
/// table.add_column("stock");
///
/// assert_eq!(table.get_value("apples", "price").unwrap().map(String::as_str), Some("1.20"));
/// assert_eq!(table.get_value("apples", "stock").unwrap(), None);
/// assert!(table.get_value("pears", "price").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Table<T = String> {
    /// Row titles (insertion order) and the cells set in each row
    rows: IndexMap<String, AHashMap<String, T>>,
    /// Column titles (insertion order)
    columns: IndexSet<String>,
}

impl<T> Table<T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            rows: IndexMap::new(),
            columns: IndexSet::new(),
        }
    }

    // === Lookup ===

    /// Get the value at (`row`, `column`)
    ///
    /// Fails with [`Error::NoRow`] if the row is not declared, and with
    /// [`Error::NoColumn`] if the row exists but the column does not.
    pub fn get_value(&self, row: &str, column: &str) -> Result<Option<&T>> {
        let cells = self.row_cells(row, column)?;
        Ok(cells.get(column))
    }

    /// Get a mutable reference to the value at (`row`, `column`)
    pub fn get_value_mut(&mut self, row: &str, column: &str) -> Result<Option<&mut T>> {
        if !self.rows.contains_key(row) {
            return Err(Error::NoRow(row.to_string()));
        }
        if !self.columns.contains(column) {
            return Err(Error::NoColumn(column.to_string()));
        }
        Ok(self.rows.get_mut(row).and_then(|cells| cells.get_mut(column)))
    }

    fn row_cells(&self, row: &str, column: &str) -> Result<&AHashMap<String, T>> {
        let cells = self
            .rows
            .get(row)
            .ok_or_else(|| Error::NoRow(row.to_string()))?;
        if !self.columns.contains(column) {
            return Err(Error::NoColumn(column.to_string()));
        }
        Ok(cells)
    }

    /// Check if a row title is declared
    pub fn contains_row(&self, title: &str) -> bool {
        self.rows.contains_key(title)
    }

    /// Check if a column title is declared
    pub fn contains_column(&self, title: &str) -> bool {
        self.columns.contains(title)
    }

    /// Get a view of one row
    pub fn row(&self, title: &str) -> Result<RowView<'_, T>> {
        self.rows
            .get_key_value(title)
            .map(|(title, cells)| RowView::new(title, cells, &self.columns))
            .ok_or_else(|| Error::NoRow(title.to_string()))
    }

    /// Iterate all rows in row order
    pub fn rows(&self) -> impl Iterator<Item = RowView<'_, T>> {
        self.rows
            .iter()
            .map(move |(title, cells)| RowView::new(title, cells, &self.columns))
    }

    /// Row titles in insertion order
    pub fn row_titles(&self) -> impl ExactSizeIterator<Item = &str> + DoubleEndedIterator {
        self.rows.keys().map(String::as_str)
    }

    /// Column titles in insertion order
    pub fn column_titles(&self) -> impl ExactSizeIterator<Item = &str> + DoubleEndedIterator {
        self.columns.iter().map(String::as_str)
    }

    /// Number of declared rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of declared columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Check if the table has neither rows nor columns
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.columns.is_empty()
    }

    // === Modification ===

    /// Set the value at (`row`, `column`), declaring the row and the column
    /// first if needed
    ///
    /// Returns the previous value of the cell.
    pub fn set_value<R, C>(&mut self, row: R, column: C, value: T) -> Option<T>
    where
        R: Into<String>,
        C: Into<String>,
    {
        let column = column.into();
        if !self.columns.contains(&column) {
            self.columns.insert(column.clone());
        }
        self.rows.entry(row.into()).or_default().insert(column, value)
    }

    /// Reset the cell at (`row`, `column`) to unset
    ///
    /// Returns the value that was stored, if any.
    pub fn clear_value(&mut self, row: &str, column: &str) -> Result<Option<T>> {
        if !self.columns.contains(column) && self.rows.contains_key(row) {
            return Err(Error::NoColumn(column.to_string()));
        }
        let cells = self
            .rows
            .get_mut(row)
            .ok_or_else(|| Error::NoRow(row.to_string()))?;
        Ok(cells.remove(column))
    }

    /// Declare a row; no effect if it already exists
    ///
    /// Returns `true` if the row was added.
    pub fn add_row<S: Into<String>>(&mut self, title: S) -> bool {
        let title = title.into();
        if self.rows.contains_key(&title) {
            return false;
        }
        self.rows.insert(title, AHashMap::new());
        true
    }

    /// Declare a column; no effect if it already exists
    ///
    /// Returns `true` if the column was added.
    pub fn add_column<S: Into<String>>(&mut self, title: S) -> bool {
        self.columns.insert(title.into())
    }

    /// Remove a row and all its cells; no effect if it does not exist
    pub fn remove_row(&mut self, title: &str) -> bool {
        self.rows.shift_remove(title).is_some()
    }

    /// Remove a column and all its cells; no effect if it does not exist
    pub fn remove_column(&mut self, title: &str) -> bool {
        if !self.columns.shift_remove(title) {
            return false;
        }
        for cells in self.rows.values_mut() {
            cells.remove(title);
        }
        true
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Table<T> {
    /// Tables are equal when titles match in order and every cell matches
    fn eq(&self, other: &Self) -> bool {
        self.columns.iter().eq(other.columns.iter())
            && self.rows.len() == other.rows.len()
            && self
                .rows
                .iter()
                .zip(other.rows.iter())
                .all(|((a_title, a_cells), (b_title, b_cells))| {
                    a_title == b_title
                        && a_cells.len() == b_cells.len()
                        && a_cells
                            .iter()
                            .all(|(column, value)| b_cells.get(column) == Some(value))
                })
    }
}

impl<T: fmt::Display> fmt::Display for Table<T> {
    /// Tab-separated grid: column titles on the first line (after an empty
    /// corner cell), one line per row, unset cells as a single space
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in &self.columns {
            write!(f, "\t{}", column)?;
        }
        for row in self.rows() {
            write!(f, "\n{}", row.title())?;
            for value in row.values() {
                match value {
                    Some(value) => write!(f, "\t{}", value)?,
                    None => f.write_str("\t ")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn sample() -> Table {
        let mut table = Table::new();
        table.add_row("a");
        table.add_row("b");
        table.set_value("a", "x", "1".to_string());
        table
    }

    #[test]
    fn test_get_value() {
        let table = sample();
        assert_eq!(table.get_value("a", "x").unwrap(), Some(&"1".to_string()));
        assert_eq!(table.get_value("b", "x").unwrap(), None);
    }

    #[test]
    fn test_error_kinds() {
        let table = sample();
        assert_eq!(
            table.get_value("missingRow", "anyCol").unwrap_err(),
            Error::NoRow("missingRow".into())
        );
        assert_eq!(
            table.get_value("a", "missingCol").unwrap_err().kind(),
            ErrorKind::NoColumn
        );
        // Row is checked before column
        assert_eq!(
            table.get_value("missingRow", "missingCol").unwrap_err().kind(),
            ErrorKind::NoRow
        );
    }

    #[test]
    fn test_set_value_creates_titles() {
        let mut table: Table = Table::new();
        assert_eq!(table.set_value("r", "c", "v".to_string()), None);
        assert_eq!(table.row_titles().collect::<Vec<_>>(), vec!["r"]);
        assert_eq!(table.column_titles().collect::<Vec<_>>(), vec!["c"]);

        let previous = table.set_value("r", "c", "w".to_string());
        assert_eq!(previous.as_deref(), Some("v"));
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_count(), 1);
    }

    #[test]
    fn test_empty_string_is_not_unset() {
        let mut table: Table = Table::new();
        table.set_value("r", "c", String::new());
        table.add_column("d");
        assert_eq!(table.get_value("r", "c").unwrap(), Some(&String::new()));
        assert_eq!(table.get_value("r", "d").unwrap(), None);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut table: Table = Table::new();
        assert!(table.add_row("a"));
        table.set_value("a", "x", "1".to_string());
        assert!(!table.add_row("a"));
        assert!(table.add_column("y"));
        assert!(!table.add_column("x"));

        assert_eq!(table.row_titles().collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(table.column_titles().collect::<Vec<_>>(), vec!["x", "y"]);
        // Re-adding the row kept its cells
        assert_eq!(table.get_value("a", "x").unwrap().map(String::as_str), Some("1"));
    }

    #[test]
    fn test_backfill() {
        let mut table: Table = Table::new();
        table.add_row("a");
        table.add_row("b");
        table.add_column("X");
        assert_eq!(table.get_value("a", "X").unwrap(), None);
        assert_eq!(table.get_value("b", "X").unwrap(), None);

        table.add_row("c");
        assert_eq!(table.get_value("c", "X").unwrap(), None);
    }

    #[test]
    fn test_remove_row() {
        let mut table = sample();
        table.add_row("c");
        assert!(table.remove_row("b"));
        assert!(!table.remove_row("b"));
        assert_eq!(table.row_titles().collect::<Vec<_>>(), vec!["a", "c"]);
        assert_eq!(
            table.get_value("b", "x").unwrap_err().kind(),
            ErrorKind::NoRow
        );
    }

    #[test]
    fn test_remove_column() {
        let mut table = sample();
        table.set_value("a", "y", "2".to_string());
        table.set_value("b", "z", "3".to_string());
        assert!(table.remove_column("y"));
        assert!(!table.remove_column("y"));
        assert_eq!(table.column_titles().collect::<Vec<_>>(), vec!["x", "z"]);
        assert_eq!(
            table.get_value("a", "y").unwrap_err().kind(),
            ErrorKind::NoColumn
        );

        // Re-adding the column does not resurrect old values
        table.add_column("y");
        assert_eq!(table.get_value("a", "y").unwrap(), None);
    }

    #[test]
    fn test_clear_value() {
        let mut table = sample();
        assert_eq!(table.clear_value("a", "x").unwrap().as_deref(), Some("1"));
        assert_eq!(table.get_value("a", "x").unwrap(), None);
        assert_eq!(
            table.clear_value("a", "nope").unwrap_err().kind(),
            ErrorKind::NoColumn
        );
        assert_eq!(
            table.clear_value("nope", "x").unwrap_err().kind(),
            ErrorKind::NoRow
        );
    }

    #[test]
    fn test_get_value_mut() {
        let mut table = sample();
        if let Some(value) = table.get_value_mut("a", "x").unwrap() {
            value.push('0');
        }
        assert_eq!(table.get_value("a", "x").unwrap().map(String::as_str), Some("10"));
        assert!(table.get_value_mut("b", "x").unwrap().is_none());
    }

    #[test]
    fn test_row_view() {
        let mut table = sample();
        table.add_column("y");
        let row = table.row("a").unwrap();
        assert_eq!(row.title(), "a");
        assert_eq!(
            row.cells().collect::<Vec<_>>(),
            vec![("x", Some(&"1".to_string())), ("y", None)]
        );
        assert_eq!(row.set_count(), 1);
        assert!(table.row("b").unwrap().is_empty());
        assert!(table.row("zz").is_err());
    }

    #[test]
    fn test_display() {
        let mut table = sample();
        table.add_column("y");
        assert_eq!(table.to_string(), "\tx\ty\na\t1\t \nb\t \t ");
    }

    #[test]
    fn test_equality_respects_order() {
        let mut a: Table = Table::new();
        a.add_row("r1");
        a.add_row("r2");
        let mut b: Table = Table::new();
        b.add_row("r2");
        b.add_row("r1");
        assert_ne!(a, b);

        b.remove_row("r2");
        b.add_row("r2");
        assert_eq!(a, b);
    }
}
