//! Row views

use ahash::AHashMap;
use indexmap::IndexSet;

/// A borrowed view of one row of a [`Table`](crate::Table)
///
/// Cells are visited in column order; unset cells yield `None`.
#[derive(Debug)]
pub struct RowView<'a, T> {
    title: &'a str,
    cells: &'a AHashMap<String, T>,
    columns: &'a IndexSet<String>,
}

impl<'a, T> RowView<'a, T> {
    pub(crate) fn new(
        title: &'a str,
        cells: &'a AHashMap<String, T>,
        columns: &'a IndexSet<String>,
    ) -> Self {
        Self {
            title,
            cells,
            columns,
        }
    }

    /// Row title
    pub fn title(&self) -> &'a str {
        self.title
    }

    /// Get a cell by column title
    ///
    /// Returns `None` both for unset cells and for undeclared columns; use
    /// [`Table::get_value`](crate::Table::get_value) to tell them apart.
    pub fn get(&self, column: &str) -> Option<&'a T> {
        self.cells.get(column)
    }

    /// Iterate `(column title, value)` pairs in column order
    pub fn cells(&self) -> impl Iterator<Item = (&'a str, Option<&'a T>)> + 'a {
        let cells = self.cells;
        self.columns
            .iter()
            .map(move |column| (column.as_str(), cells.get(column)))
    }

    /// Iterate values in column order
    pub fn values(&self) -> impl Iterator<Item = Option<&'a T>> + 'a {
        self.cells().map(|(_, value)| value)
    }

    /// Number of cells holding a value
    pub fn set_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cell in this row holds a value
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<T> Clone for RowView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RowView<'_, T> {}
