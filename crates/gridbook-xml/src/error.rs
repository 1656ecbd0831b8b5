//! SpreadsheetML error types

use thiserror::Error;

/// Result type for SpreadsheetML operations
pub type XmlResult<T> = std::result::Result<T, XmlError>;

/// Errors that can occur during reading/writing
#[derive(Debug, Error)]
pub enum XmlError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The text is not well-formed XML
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Well-formed enough to tokenize, but not a document
    #[error("Malformed document: {0}")]
    Malformed(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] gridbook_core::Error),
}

impl XmlError {
    /// Check if this error means the input could not be parsed
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, XmlError::Xml(_) | XmlError::Malformed(_))
    }
}

impl From<quick_xml::events::attributes::AttrError> for XmlError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        XmlError::Xml(err.into())
    }
}
