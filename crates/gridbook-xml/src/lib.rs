//! # gridbook-xml
//!
//! XML Spreadsheet 2003 ("SpreadsheetML") reader and writer for gridbook.
//!
//! Only cell text is read; styles, formulas and formatting are dropped. The
//! writer emits every cell as a string and is the structural inverse of the
//! reader, so `read(write(sheets))` gives back the same sheets, titles and
//! values.
//!
//! ## Example
//!
//! ```rust
//! use gridbook_core::Sheets;
//! use gridbook_xml::{XmlReader, XmlWriter};
//!
//! let mut sheets = Sheets::new();
//! sheets.table_mut("Stock").set_value("bolts", "count", "120".to_string());
//!
//! let xml = XmlWriter::write_string(&sheets);
//! let back = XmlReader::read_str(&xml).unwrap();
//! assert_eq!(back, sheets);
//! ```

pub mod error;
pub mod options;
pub mod reader;
pub mod writer;

pub use error::{XmlError, XmlResult};
pub use options::{ReadOptions, WriteOptions, DEFAULT_PLACEHOLDER};
pub use reader::XmlReader;
pub use writer::XmlWriter;
