//! Common utilities for E2E tests.

use std::path::{Path, PathBuf};

use gridbook_core::{Sheets, Table};
use gridbook_xml::XmlReader;

/// Get the path to a fixture file in `tests/fixtures/`.
pub fn fixture_path(filename: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(filename)
}

/// Read a fixture, panicking with the file name on failure.
pub fn read_fixture(filename: &str) -> Sheets {
    let path = fixture_path(filename);
    XmlReader::read_file(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}

/// Get a cell value as `&str`, panicking on lookup errors.
pub fn value<'a>(table: &'a Table, row: &str, column: &str) -> Option<&'a str> {
    table
        .get_value(row, column)
        .unwrap_or_else(|e| panic!("lookup ({}, {}) failed: {}", row, column, e))
        .map(String::as_str)
}
