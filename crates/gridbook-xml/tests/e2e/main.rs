//! End-to-end tests for gridbook-xml.
//!
//! Fixtures live in `tests/fixtures/` and are SpreadsheetML documents as
//! spreadsheet applications export them: document properties, styles,
//! column definitions and worksheet options around the cell data.

mod common;
mod reading;
mod writing;

// Re-export common utilities for submodules
pub use common::*;
