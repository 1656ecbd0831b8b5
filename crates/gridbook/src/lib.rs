//! # gridbook
//!
//! Read, edit and write Excel 2003 SpreadsheetML workbooks as a set of
//! named two-dimensional tables addressed by row and column title.
//!
//! The first row of every worksheet holds the column titles and the first
//! column holds the row titles; every other cell is a string value at the
//! intersection of a row title and a column title.
//!
//! ## Example
//!
//! ```rust
//! use gridbook::prelude::*;
//!
//! let mut sheets = Sheets::new();
//! sheets
//!     .table_mut("Prices")
//!     .set_value("apples", "EUR", "1.20".to_string());
//!
//! let xml = serialize(&sheets);
//! let back = parse(&xml).unwrap();
//!
//! let value = back.get("Prices").unwrap().get_value("apples", "EUR").unwrap();
//! assert_eq!(value.map(String::as_str), Some("1.20"));
//!
//! // back.save("prices.xml").unwrap();
//! ```

pub mod error;
pub mod prelude;

pub use error::{Error, Result};

// Re-export core types
pub use gridbook_core::{Error as CoreError, ErrorKind, RowView, Sheets, Table};

// Re-export I/O types
pub use gridbook_xml::{
    ReadOptions, WriteOptions, XmlError, XmlReader, XmlResult, XmlWriter, DEFAULT_PLACEHOLDER,
};

use std::path::Path;

/// Parse a SpreadsheetML document with default options
pub fn parse(text: &str) -> XmlResult<Sheets> {
    XmlReader::read_str(text)
}

/// Serialize sheets to a SpreadsheetML document with default options
pub fn serialize(sheets: &Sheets) -> String {
    XmlWriter::write_string(sheets)
}

/// Extension trait for Sheets to add file I/O
pub trait SheetsExt {
    /// Open a document from a file
    fn open<P: AsRef<Path>>(path: P) -> Result<Sheets>;

    /// Save the document to a file
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl SheetsExt for Sheets {
    fn open<P: AsRef<Path>>(path: P) -> Result<Sheets> {
        let path = path.as_ref();
        check_extension(path)?;
        Ok(XmlReader::read_file(path)?)
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        check_extension(path)?;
        Ok(XmlWriter::write_file(self, path)?)
    }
}

fn check_extension(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        Some("xml") => Ok(()),
        _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
    }
}
