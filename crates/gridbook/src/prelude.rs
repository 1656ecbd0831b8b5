//! Prelude module - common imports for gridbook users
//!
//! ```rust
//! use gridbook::prelude::*;
//! ```

pub use crate::{
    // Functions
    parse,
    serialize,
    // Constants
    DEFAULT_PLACEHOLDER,
    // Error types
    CoreError,
    Error,
    ErrorKind,
    // I/O types
    ReadOptions,
    Result,
    // Main types
    Sheets,
    // Extension traits
    SheetsExt,
    Table,
    WriteOptions,
    XmlError,
    XmlReader,
    XmlWriter,
};
