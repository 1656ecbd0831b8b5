//! Reader and writer options

/// Placeholder text written for the corner cell and for unset cells
pub const DEFAULT_PLACEHOLDER: &str = "-";

/// Options for reading documents
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Data cells whose text equals this value are read as unset
    /// (default: `Some("-")`). `None` keeps such cells as literal text.
    pub placeholder: Option<String>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            placeholder: Some(DEFAULT_PLACEHOLDER.to_string()),
        }
    }
}

impl ReadOptions {
    /// Read every cell literally, including placeholders
    pub fn literal() -> Self {
        Self { placeholder: None }
    }

    pub(crate) fn is_placeholder(&self, text: &str) -> bool {
        self.placeholder.as_deref() == Some(text)
    }
}

/// Options for writing documents
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Text written for the corner cell and for unset cells (default: `-`)
    pub placeholder: String,
    /// Put each element on its own indented line (default: true)
    pub indent: bool,
    /// Emit the XML declaration and the `mso-application` processing
    /// instruction (default: true)
    pub declaration: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            indent: true,
            declaration: true,
        }
    }
}

impl WriteOptions {
    /// Single-line output without declaration, for embedding
    pub fn compact() -> Self {
        Self {
            indent: false,
            declaration: false,
            ..Self::default()
        }
    }
}
