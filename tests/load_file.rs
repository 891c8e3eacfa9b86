//! Tests for loading stylesheets from disk.

use std::io::Write;

use csskeys_rs::{
    CsskeysError, ParseError, ParseOptions, StateFlags, load_file, load_stylesheet,
    load_stylesheet_with, print_table,
};

fn write_css(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_and_parse_file() {
    let file = write_css(b".polygon hidden {\n  border-width: 3px;\n  fill-color: #00FFFF;\n}\n");
    let (source, table) = load_stylesheet(file.path()).unwrap();

    assert_eq!(table.len(), 5);
    assert_eq!(table.records()[0].flags(), StateFlags::HIDDEN);
    assert_eq!(
        print_table(&source, &table),
        ".polygon hidden {\n  border-width: 3px;\n  fill-color: #00FFFF;\n}\n"
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let result = load_file("/definitely/not/here.css");
    assert!(matches!(result, Err(CsskeysError::Io(_))));
}

#[test]
fn test_invalid_utf8_is_parse_error() {
    let file = write_css(&[b'.', b'a', 0xFE, b'{', b'}']);
    let result = load_file(file.path());
    assert!(matches!(
        result,
        Err(CsskeysError::Parse(ParseError::InvalidEncoding(_)))
    ));
}

#[test]
fn test_options_are_applied() {
    let file = write_css(b".a { x: 1; y: 2; }");
    let options = ParseOptions::default().with_max_records(3);
    let result = load_stylesheet_with(file.path(), options);
    assert!(matches!(
        result,
        Err(CsskeysError::Parse(ParseError::CapacityExceeded { .. }))
    ));
}

#[test]
fn test_malformed_file_is_reported() {
    let file = write_css(b".a { x: 1;");
    let result = load_stylesheet(file.path());
    assert!(matches!(
        result,
        Err(CsskeysError::Parse(ParseError::MalformedBlock { offset: 3 }))
    ));
}
