//! SpreadsheetML writer

use std::fmt::Display;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::XmlResult;
use crate::options::WriteOptions;
use gridbook_core::{Sheets, Table};

/// Root element with the spreadsheet namespaces Excel expects
const WORKBOOK_OPEN: &str = concat!(
    r#"<Workbook xmlns="urn:schemas-microsoft-com:office:spreadsheet""#,
    r#" xmlns:o="urn:schemas-microsoft-com:office:office""#,
    r#" xmlns:x="urn:schemas-microsoft-com:office:excel""#,
    r#" xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet""#,
    r#" xmlns:html="http://www.w3.org/TR/REC-html40">"#,
);

/// SpreadsheetML document writer
///
/// Cells are always written densely, left to right, so documents produced
/// here never need `ss:Index` to be read back.
pub struct XmlWriter;

impl XmlWriter {
    /// Write a document to a file path
    pub fn write_file<P: AsRef<Path>>(sheets: &Sheets, path: P) -> XmlResult<()> {
        let file = File::create(path)?;
        Self::write(sheets, file)
    }

    /// Write a document to a writer
    pub fn write<W: Write>(sheets: &Sheets, writer: W) -> XmlResult<()> {
        Self::write_with(sheets, writer, &WriteOptions::default())
    }

    /// Write a document to a writer with options
    pub fn write_with<W: Write>(
        sheets: &Sheets,
        mut writer: W,
        options: &WriteOptions,
    ) -> XmlResult<()> {
        let content = Self::write_string_with(sheets, options);
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write a document to a string
    pub fn write_string(sheets: &Sheets) -> String {
        Self::write_string_with(sheets, &WriteOptions::default())
    }

    /// Write a document to a string with options
    pub fn write_string_with(sheets: &Sheets, options: &WriteOptions) -> String {
        let mut out = Output::new(options);

        if options.declaration {
            out.line(0, r#"<?xml version="1.0"?>"#);
            out.line(0, r#"<?mso-application progid="Excel.Sheet"?>"#);
        }

        out.line(0, WORKBOOK_OPEN);
        for (name, table) in sheets.iter() {
            out.line(
                1,
                &format!(r#"<Worksheet ss:Name="{}">"#, escape_attr(name)),
            );
            Self::write_table(&mut out, table, 2);
            out.line(1, "</Worksheet>");
        }
        out.line(0, "</Workbook>");

        out.finish()
    }

    /// Write a single `<Table>` element
    pub fn table_to_string<T: Display>(table: &Table<T>, options: &WriteOptions) -> String {
        let mut out = Output::new(options);
        Self::write_table(&mut out, table, 0);
        out.finish()
    }

    fn write_table<T: Display>(out: &mut Output<'_>, table: &Table<T>, depth: usize) {
        out.line(depth, "<Table>");

        // Header: reserved corner cell, then the column titles
        out.line(depth + 1, "<Row>");
        out.cell(depth + 2, None::<&str>);
        for column in table.column_titles() {
            out.cell(depth + 2, Some(column));
        }
        out.line(depth + 1, "</Row>");

        for row in table.rows() {
            out.line(depth + 1, "<Row>");
            out.cell(depth + 2, Some(row.title()));
            for value in row.values() {
                out.cell(depth + 2, value);
            }
            out.line(depth + 1, "</Row>");
        }

        out.line(depth, "</Table>");
    }
}

/// Output buffer that knows about indentation and placeholders
struct Output<'o> {
    content: String,
    options: &'o WriteOptions,
}

impl<'o> Output<'o> {
    fn new(options: &'o WriteOptions) -> Self {
        Self {
            content: String::new(),
            options,
        }
    }

    fn line(&mut self, depth: usize, text: &str) {
        if self.options.indent {
            if !self.content.is_empty() {
                self.content.push('\n');
            }
            for _ in 0..depth {
                self.content.push(' ');
            }
        }
        self.content.push_str(text);
    }

    /// Write one string cell; `None` writes the placeholder
    fn cell<V: Display>(&mut self, depth: usize, value: Option<V>) {
        let text = match value {
            Some(value) => escape_text(&value.to_string()),
            None => escape_text(&self.options.placeholder),
        };
        self.line(
            depth,
            &format!(r#"<Cell><Data ss:Type="String">{}</Data></Cell>"#, text),
        );
    }

    fn finish(mut self) -> String {
        if self.options.indent {
            self.content.push('\n');
        }
        self.content
    }
}

/// Escape text content
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\r', "&#13;")
}

/// Escape an attribute value
fn escape_attr(s: &str) -> String {
    escape_text(s)
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
        .replace('\n', "&#10;")
        .replace('\t', "&#9;")
}
