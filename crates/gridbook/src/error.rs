//! Error type for the file helpers

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from opening, saving or querying documents
#[derive(Debug, Error)]
pub enum Error {
    /// Lookup failure
    #[error(transparent)]
    Core(#[from] gridbook_core::Error),

    /// Reading or writing the document failed
    #[error(transparent)]
    Xml(#[from] gridbook_xml::XmlError),

    /// File extension is not a SpreadsheetML one
    #[error("Unsupported file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}
