//! Error types for gridbook-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Lookup failures raised by [`Table`](crate::Table) and [`Sheets`](crate::Sheets)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Sheet not found by name
    #[error("Sheet not found: {0}")]
    NoTable(String),

    /// Row title not declared in the table
    #[error("Row not found: {0}")]
    NoRow(String),

    /// Row exists, but the column title is not declared
    #[error("Column not found: {0}")]
    NoColumn(String),

    /// Sheet index out of bounds
    #[error("Sheet index {index} out of bounds (count: {count})")]
    IndexOutOfRange { index: usize, count: usize },
}

impl Error {
    /// The kind of lookup that failed
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NoTable(_) => ErrorKind::NoTable,
            Error::NoRow(_) => ErrorKind::NoRow,
            Error::NoColumn(_) => ErrorKind::NoColumn,
            Error::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
        }
    }
}

/// Discriminant of an [`Error`], for callers that only care about *why*
/// a lookup failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NoTable,
    NoRow,
    NoColumn,
    IndexOutOfRange,
}

impl ErrorKind {
    /// Short name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NoTable => "NoTable",
            ErrorKind::NoRow => "NoRow",
            ErrorKind::NoColumn => "NoColumn",
            ErrorKind::IndexOutOfRange => "IndexOutOfRange",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(Error::NoTable("x".into()).kind(), ErrorKind::NoTable);
        assert_eq!(Error::NoRow("x".into()).kind(), ErrorKind::NoRow);
        assert_eq!(Error::NoColumn("x".into()).kind(), ErrorKind::NoColumn);
        assert_eq!(
            Error::IndexOutOfRange { index: 3, count: 1 }.kind(),
            ErrorKind::IndexOutOfRange
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(Error::NoRow("a".into()).to_string(), "Row not found: a");
        assert_eq!(
            Error::IndexOutOfRange { index: 3, count: 1 }.to_string(),
            "Sheet index 3 out of bounds (count: 1)"
        );
        assert_eq!(ErrorKind::NoColumn.to_string(), "NoColumn");
    }
}
