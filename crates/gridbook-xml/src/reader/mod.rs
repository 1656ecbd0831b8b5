//! SpreadsheetML reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{XmlError, XmlResult};
use crate::options::ReadOptions;
use gridbook_core::{Sheets, Table};


/// Worksheet name attribute, preferred spelling first
const NAME_KEYS: &[&[u8]] = &[b"ss:Name", b"Name"];

/// Cell position attribute, preferred spelling first
const INDEX_KEYS: &[&[u8]] = &[b"ss:Index", b"Index"];

/// SpreadsheetML document reader
///
/// The first row of every worksheet holds the column titles (its first cell
/// is a reserved corner cell), and the first cell of every later row holds
/// that row's title. Rows without a usable title are skipped.
pub struct XmlReader;

impl XmlReader {
    /// Read a document from a file path
    pub fn read_file<P: AsRef<Path>>(path: P) -> XmlResult<Sheets> {
        let file = File::open(path)?;
        Self::read(file)
    }

    /// Read a document from a reader
    pub fn read<R: Read>(reader: R) -> XmlResult<Sheets> {
        Self::read_with(reader, &ReadOptions::default())
    }

    /// Read a document from a reader with options
    pub fn read_with<R: Read>(mut reader: R, options: &ReadOptions) -> XmlResult<Sheets> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = std::str::from_utf8(&bytes)
            .map_err(|err| XmlError::Malformed(format!("document is not UTF-8: {}", err)))?;
        Self::read_str_with(text, options)
    }

    /// Read a document from a string
    pub fn read_str(text: &str) -> XmlResult<Sheets> {
        Self::read_str_with(text, &ReadOptions::default())
    }

    /// Read a document from a string with options
    pub fn read_str_with(text: &str, options: &ReadOptions) -> XmlResult<Sheets> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut xml_reader = Reader::from_str(text);
        xml_reader.trim_text(false);
        xml_reader.check_end_names(true);

        let mut parser = DocumentParser::new(options);

        loop {
            match xml_reader.read_event()? {
                Event::Start(e) => {
                    let frame = parser.open(&e)?;
                    parser.stack.push(frame);
                }
                Event::Empty(e) => {
                    let frame = parser.open(&e)?;
                    parser.close(frame);
                }
                Event::End(e) => {
                    let frame = parser.stack.pop().ok_or_else(|| {
                        XmlError::Malformed(format!(
                            "unexpected closing tag </{}>",
                            String::from_utf8_lossy(e.name().as_ref())
                        ))
                    })?;
                    parser.close(frame);
                }
                Event::Text(e) => {
                    // Entities are checked everywhere, not only in captured text
                    let text = e.unescape()?;
                    if parser.stack.is_empty() && !text.trim().is_empty() {
                        return Err(outside_root("text"));
                    }
                    if parser.is_capturing() {
                        parser.push_text(&text);
                    }
                }
                Event::CData(e) => {
                    if parser.stack.is_empty() {
                        return Err(outside_root("CDATA"));
                    }
                    if parser.is_capturing() {
                        let bytes = e.into_inner();
                        parser.push_text(&String::from_utf8_lossy(&bytes));
                    }
                }
                Event::Eof => break,
                // Declarations, processing instructions, comments, doctype
                _ => {}
            }
        }

        parser.finish()
    }
}

/// Where the reader currently is in the document tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Workbook,
    Worksheet,
    Table,
    Row,
    Cell,
    Data,
    /// Any element the reader does not look into
    Other,
}

impl Frame {
    fn tag(&self) -> &'static str {
        match self {
            Frame::Workbook => "Workbook",
            Frame::Worksheet => "Worksheet",
            Frame::Table => "Table",
            Frame::Row => "Row",
            Frame::Cell => "Cell",
            Frame::Data => "Data",
            Frame::Other => "element",
        }
    }
}

/// Parser state for a whole document
struct DocumentParser<'o> {
    options: &'o ReadOptions,
    sheets: Sheets,
    /// Counts every recognized worksheet, named or not
    sheet_counter: usize,
    stack: Vec<Frame>,
    root_seen: bool,
    sheet: Option<SheetBuilder>,
}

impl<'o> DocumentParser<'o> {
    fn new(options: &'o ReadOptions) -> Self {
        Self {
            options,
            sheets: Sheets::new(),
            sheet_counter: 0,
            stack: Vec::new(),
            root_seen: false,
            sheet: None,
        }
    }

    /// Classify an opening tag against its parent and update state
    fn open(&mut self, e: &BytesStart<'_>) -> XmlResult<Frame> {
        let name = e.name();
        let name = name.as_ref();

        let frame = match self.stack.last().copied() {
            None => {
                if self.root_seen {
                    return Err(XmlError::Malformed(
                        "more than one root element".to_string(),
                    ));
                }
                if !name.eq_ignore_ascii_case(b"workbook") {
                    return Err(XmlError::Malformed(format!(
                        "expected Workbook root element, found <{}>",
                        String::from_utf8_lossy(name)
                    )));
                }
                self.root_seen = true;
                Frame::Workbook
            }
            Some(Frame::Workbook) if name.eq_ignore_ascii_case(b"worksheet") => {
                let sheet_name = match attribute(e, NAME_KEYS)? {
                    Some(sheet_name) => sheet_name,
                    None => self.sheet_counter.to_string(),
                };
                self.sheet_counter += 1;
                log::trace!("Reading worksheet '{}'", sheet_name);
                self.sheet = Some(SheetBuilder::new(sheet_name));
                Frame::Worksheet
            }
            Some(Frame::Worksheet) if name == b"Table" => match self.sheet.as_mut() {
                Some(sheet) if !sheet.table_seen => {
                    sheet.table_seen = true;
                    Frame::Table
                }
                _ => Frame::Other,
            },
            Some(Frame::Table) if name.eq_ignore_ascii_case(b"row") => {
                if let Some(sheet) = self.sheet.as_mut() {
                    sheet.begin_row();
                }
                Frame::Row
            }
            Some(Frame::Row) if name.eq_ignore_ascii_case(b"cell") => {
                let index = attribute(e, INDEX_KEYS)?;
                if let Some(row) = self.sheet.as_mut().and_then(|s| s.row.as_mut()) {
                    row.cell = Some(CellBuilder::new(index));
                }
                Frame::Cell
            }
            Some(Frame::Cell) => match self.current_cell() {
                Some(cell) if cell.capture.is_none() => {
                    let slot = match name {
                        b"Data" if cell.primary.is_none() => Some(Slot::Primary),
                        b"ss:Data" if cell.fallback.is_none() => Some(Slot::Fallback),
                        _ => None,
                    };
                    match slot {
                        Some(slot) => {
                            cell.begin_capture(slot);
                            Frame::Data
                        }
                        None => Frame::Other,
                    }
                }
                _ => Frame::Other,
            },
            Some(_) => Frame::Other,
        };

        Ok(frame)
    }

    /// Finish an element
    fn close(&mut self, frame: Frame) {
        match frame {
            Frame::Worksheet => self.finish_sheet(),
            Frame::Row => {
                if let Some(sheet) = self.sheet.as_mut() {
                    sheet.row = None;
                }
            }
            Frame::Cell => {
                if let Some(sheet) = self.sheet.as_mut() {
                    sheet.finish_cell(self.options);
                }
            }
            Frame::Data => {
                if let Some(cell) = self.current_cell() {
                    cell.capture = None;
                }
            }
            Frame::Workbook | Frame::Table | Frame::Other => {}
        }
    }

    fn current_cell(&mut self) -> Option<&mut CellBuilder> {
        self.sheet
            .as_mut()
            .and_then(|s| s.row.as_mut())
            .and_then(|r| r.cell.as_mut())
    }

    fn is_capturing(&self) -> bool {
        self.sheet
            .as_ref()
            .and_then(|s| s.row.as_ref())
            .and_then(|r| r.cell.as_ref())
            .map_or(false, |c| c.capture.is_some())
    }

    fn push_text(&mut self, text: &str) {
        if let Some(cell) = self.current_cell() {
            cell.push_text(text);
        }
    }

    fn finish_sheet(&mut self) {
        if let Some(sheet) = self.sheet.take() {
            let SheetBuilder { name, table, .. } = sheet;
            if !self.sheets.insert(name.clone(), table) {
                log::debug!("Dropping worksheet with duplicate name '{}'", name);
            }
        }
    }

    fn finish(self) -> XmlResult<Sheets> {
        if let Some(open) = self.stack.last() {
            return Err(XmlError::Malformed(format!(
                "unexpected end of document inside <{}>",
                open.tag()
            )));
        }
        if !self.root_seen {
            return Err(XmlError::Malformed(
                "missing Workbook root element".to_string(),
            ));
        }
        Ok(self.sheets)
    }
}

/// Builds the table of one worksheet
struct SheetBuilder {
    name: String,
    table: Table,
    /// Only the first `Table` element of a worksheet is read
    table_seen: bool,
    /// Header titles by position; may repeat a title
    columns: Vec<String>,
    header_seen: bool,
    row: Option<RowBuilder>,
}

impl SheetBuilder {
    fn new(name: String) -> Self {
        Self {
            name,
            table: Table::new(),
            table_seen: false,
            columns: Vec::new(),
            header_seen: false,
            row: None,
        }
    }

    fn begin_row(&mut self) {
        let header = !self.header_seen;
        self.header_seen = true;
        self.row = Some(RowBuilder {
            header,
            cells_seen: 0,
            title: None,
            cursor: 0,
            cell: None,
        });
    }

    /// Place the text of a finished cell
    ///
    /// The first cell of every row is the corner or title cell whatever its
    /// `ss:Index`. A later cell's `ss:Index` moves the cursor to that header
    /// position even once the cursor has run past the last column, so an
    /// index can bring a row back into range.
    fn finish_cell(&mut self, options: &ReadOptions) {
        let Some(row) = self.row.as_mut() else {
            return;
        };
        let Some(mut cell) = row.cell.take() else {
            return;
        };

        let position = row.cells_seen;
        row.cells_seen += 1;
        let text = cell.text();
        let index = cell.index.as_deref().and_then(parse_index);

        if row.header {
            // The corner cell is reserved; content-less cells reserve no slot
            if position > 0 {
                if let Some(title) = text {
                    self.table.add_column(title.clone());
                    self.columns.push(title);
                }
            }
            return;
        }

        if position == 0 {
            match text {
                Some(title) if !title.trim().is_empty() => {
                    if self.table.add_row(title.clone()) {
                        log::trace!("Reading row '{}'", title);
                        row.title = Some(title);
                    } else {
                        log::debug!("Skipping row with duplicate title '{}'", title);
                    }
                }
                _ => log::debug!("Skipping row without a title in sheet '{}'", self.name),
            }
            return;
        }

        let Some(title) = row.title.as_ref() else {
            return;
        };

        // Position 2 is the first column
        if let Some(index) = index {
            match index.checked_sub(2) {
                Some(position) if position < self.columns.len() => row.cursor = position,
                _ => log::debug!("Ignoring out-of-range cell index {}", index),
            }
        }

        if row.cursor < self.columns.len() {
            if let Some(text) = text {
                if !options.is_placeholder(&text) {
                    let column = self.columns[row.cursor].clone();
                    self.table.set_value(title.clone(), column, text);
                }
            }
            row.cursor += 1;
        }
    }
}

/// State of the row being read
struct RowBuilder {
    /// The first row of a table holds the column titles
    header: bool,
    cells_seen: usize,
    /// Title of an accepted data row; `None` while skipping
    title: Option<String>,
    /// Header position the next data cell lands in
    cursor: usize,
    cell: Option<CellBuilder>,
}

/// Which text payload of a cell is being collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Primary,
    Fallback,
}

/// State of the cell being read
struct CellBuilder {
    index: Option<String>,
    /// Text of the first `Data` child
    primary: Option<String>,
    /// Text of the first `ss:Data` child
    fallback: Option<String>,
    capture: Option<Slot>,
}

impl CellBuilder {
    fn new(index: Option<String>) -> Self {
        Self {
            index,
            primary: None,
            fallback: None,
            capture: None,
        }
    }

    fn begin_capture(&mut self, slot: Slot) {
        match slot {
            Slot::Primary => self.primary = Some(String::new()),
            Slot::Fallback => self.fallback = Some(String::new()),
        }
        self.capture = Some(slot);
    }

    fn push_text(&mut self, text: &str) {
        let target = match self.capture {
            Some(Slot::Primary) => self.primary.as_mut(),
            Some(Slot::Fallback) => self.fallback.as_mut(),
            None => None,
        };
        if let Some(target) = target {
            target.push_str(text);
        }
    }

    /// Textual content of the cell: the `Data` payload, else the `ss:Data`
    /// payload, else nothing
    fn text(&mut self) -> Option<String> {
        self.primary.take().or_else(|| self.fallback.take())
    }
}

fn outside_root(what: &str) -> XmlError {
    XmlError::Malformed(format!("{} outside the root element", what))
}

/// Get the first present attribute among `keys`
fn attribute(e: &BytesStart<'_>, keys: &[&[u8]]) -> XmlResult<Option<String>> {
    let mut found: Option<(usize, String)> = None;
    for attr in e.attributes() {
        let attr = attr?;
        if let Some(rank) = keys.iter().position(|k| *k == attr.key.as_ref()) {
            if found.as_ref().map_or(true, |(best, _)| rank < *best) {
                found = Some((rank, attr.unescape_value()?.into_owned()));
            }
        }
    }
    Ok(found.map(|(_, value)| value))
}

/// Parse a 1-based `ss:Index` value
fn parse_index(value: &str) -> Option<usize> {
    match value.trim().parse::<usize>() {
        Ok(index) => Some(index),
        Err(_) => {
            log::debug!("Ignoring unparsable cell index '{}'", value);
            None
        }
    }
}
