//! # gridbook-core
//!
//! Core data structures for the gridbook library.
//!
//! This crate provides the in-memory side of a workbook:
//! - [`Table`] - A sparse grid addressed by row and column *titles*
//! - [`Sheets`] - The ordered, named collection of tables in a document
//! - [`Error`] - Typed lookup failures (`NoTable`, `NoRow`, `NoColumn`, ...)
//!
//! ## Example
//!
//! ```rust
//! use gridbook_core::{ErrorKind, Sheets};
//!
//! let mut sheets = Sheets::new();
//! let prices = sheets.table_mut("Prices");
//! prices.set_value("apples", "EUR", "1.20".to_string());
//! prices.set_value("pears", "USD", "0.95".to_string());
//!
//! let table = sheets.get("Prices").unwrap();
//! assert_eq!(table.get_value("pears", "USD").unwrap().map(String::as_str), Some("0.95"));
//! assert_eq!(table.get_value("apples", "USD").unwrap(), None);
//!
//! let err = table.get_value("plums", "EUR").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::NoRow);
//! ```

pub mod error;
pub mod row;
pub mod sheets;
pub mod table;

// Re-exports for convenience
pub use error::{Error, ErrorKind, Result};
pub use row::RowView;
pub use sheets::Sheets;
pub use table::Table;
