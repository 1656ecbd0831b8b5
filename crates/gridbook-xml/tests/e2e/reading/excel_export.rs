//! Reading a document exported by a spreadsheet application.

use crate::common::*;
use pretty_assertions::assert_eq;

#[test]
fn test_sheet_names_in_document_order() {
    let sheets = read_fixture("inventory.xml");
    assert_eq!(sheets.names().collect::<Vec<_>>(), vec!["Stock", "Empty"]);
    assert!(sheets.get("Empty").unwrap().is_empty());
}

#[test]
fn test_header_from_styled_cells() {
    let sheets = read_fixture("inventory.xml");
    let stock = sheets.get("Stock").unwrap();
    assert_eq!(
        stock.column_titles().collect::<Vec<_>>(),
        vec!["Count", "Shelf", "Note"]
    );
}

#[test]
fn test_rows_and_values() {
    let sheets = read_fixture("inventory.xml");
    let stock = sheets.get("Stock").unwrap();

    // The row whose title cell was left blank is skipped
    assert_eq!(
        stock.row_titles().collect::<Vec<_>>(),
        vec!["bolts", "nuts", "washers"]
    );

    assert_eq!(value(stock, "bolts", "Count"), Some("120"));
    assert_eq!(value(stock, "bolts", "Shelf"), Some("A1"));
    assert_eq!(value(stock, "washers", "Count"), Some("3000"));
    assert_eq!(value(stock, "washers", "Shelf"), Some("C&D"));
    assert_eq!(value(stock, "washers", "Note"), None);
}

#[test]
fn test_sparse_row_uses_index() {
    let sheets = read_fixture("inventory.xml");
    let stock = sheets.get("Stock").unwrap();
    assert_eq!(value(stock, "nuts", "Count"), None);
    assert_eq!(value(stock, "nuts", "Shelf"), None);
    assert_eq!(value(stock, "nuts", "Note"), Some("reorder"));
}

#[test]
fn test_rich_text_payload() {
    let sheets = read_fixture("inventory.xml");
    let stock = sheets.get("Stock").unwrap();
    assert_eq!(value(stock, "bolts", "Note"), Some("check weekly"));
}
