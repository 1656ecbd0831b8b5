//! Re-writing fixtures and reading them back.

use gridbook_xml::{ReadOptions, WriteOptions, XmlReader, XmlWriter};

use crate::common::*;

#[test]
fn test_fixture_survives_rewrite() {
    let sheets = read_fixture("inventory.xml");
    let xml = XmlWriter::write_string(&sheets);
    let back = XmlReader::read_str(&xml).unwrap();
    assert_eq!(back, sheets);
}

#[test]
fn test_rewrite_is_stable() {
    let sheets = read_fixture("inventory.xml");
    let once = XmlWriter::write_string(&sheets);
    let twice = XmlWriter::write_string(&XmlReader::read_str(&once).unwrap());
    assert_eq!(once, twice);
}

#[test]
fn test_matching_placeholders() {
    let sheets = read_fixture("inventory.xml");
    let write = WriteOptions {
        placeholder: "(none)".to_string(),
        ..WriteOptions::default()
    };
    let read = ReadOptions {
        placeholder: Some("(none)".to_string()),
    };

    let xml = XmlWriter::write_string_with(&sheets, &write);
    let back = XmlReader::read_str_with(&xml, &read).unwrap();
    assert_eq!(back, sheets);

    // Mismatched options turn the placeholder into text
    let literal = XmlReader::read_str(&xml).unwrap();
    let stock = literal.get("Stock").unwrap();
    assert_eq!(value(stock, "nuts", "Count"), Some("(none)"));
}
