//! Tests for map catalog parsing

use super::cursor;
use crate::constants::MAX_MAPS;
use crate::cursor::Cursor;
use crate::grammar::{MapField, RowFailure, parse_map_definitions, parse_map_row};

fn failure_code(text: &str) -> i32 {
    parse_map_definitions(&mut cursor(text), MAX_MAPS)
        .unwrap_err()
        .code()
}

#[test]
fn test_parse_single_row() {
    let maps = parse_map_definitions(&mut cursor("47.6,-122.3,MAP1.TXT\n"), MAX_MAPS).unwrap();

    assert_eq!(maps.len(), 1);
    assert!((maps[0].position.latitude - 47.6).abs() < 1e-9);
    assert!((maps[0].position.longitude + 122.3).abs() < 1e-9);
    assert_eq!(maps[0].filename, "MAP1.TXT");
}

#[test]
fn test_semicolon_instead_of_comma() {
    assert_eq!(failure_code("47.6;-122.3,MAP1.TXT\n"), 2);
}

#[test]
fn test_rows_in_order_with_mixed_line_endings() {
    let text = "1.5, 2.5, A.TXT\r\n  -3 ,\t4 , B.TXT \r5,6,C.TXT\n";
    let maps = parse_map_definitions(&mut cursor(text), MAX_MAPS).unwrap();

    let names: Vec<&str> = maps.iter().map(|m| m.filename.as_str()).collect();
    assert_eq!(names, vec!["A.TXT", "B.TXT", "C.TXT"]);
    assert_eq!(maps[1].position.latitude, -3.0);
    assert_eq!(maps[1].position.longitude, 4.0);
    assert_eq!(maps[2].position.latitude, 5.0);
}

#[test]
fn test_empty_input_is_success() {
    let maps = parse_map_definitions(&mut cursor(""), MAX_MAPS).unwrap();
    assert!(maps.is_empty());

    // Trailing blanks after the last row are not a new row
    let maps = parse_map_definitions(&mut cursor("1,2,A\n   "), MAX_MAPS).unwrap();
    assert_eq!(maps.len(), 1);
}

#[test]
fn test_field_codes() {
    assert_eq!(failure_code("x,2,A\n"), 1);
    assert_eq!(failure_code("1 2,A\n"), 2);
    assert_eq!(failure_code("1,,A\n"), 3);
    assert_eq!(failure_code("1,2;A\n"), 4);
    assert_eq!(failure_code("1,2,/A\n"), 5);
    assert_eq!(failure_code("1,2,A B\n"), 6);
}

#[test]
fn test_missing_final_newline() {
    assert_eq!(failure_code("1,2,A"), 6);
}

#[test]
fn test_blank_line_is_bad_latitude() {
    // Blank lines are not part of the grammar
    assert_eq!(failure_code("1,2,A\n\n3,4,B\n"), 101);
}

#[test]
fn test_failure_row_index() {
    let text = "1,2,A\n3,4,B\n5,6,C\n7,8;D\n";
    let failure = parse_map_definitions(&mut cursor(text), MAX_MAPS).unwrap_err();

    assert_eq!(failure, RowFailure::new(3, 4));
    assert_eq!(failure.code(), 304);
    assert_eq!(failure.code() / 100, 3);
    assert_eq!(failure.code() % 100, 4);
}

#[test]
fn test_capacity_limits_rows() {
    let text: String = (0..12).map(|i| format!("{i},{i},M{i}.TXT\n")).collect();
    let mut c = cursor(&text);
    let maps = parse_map_definitions(&mut c, MAX_MAPS).unwrap();

    assert_eq!(maps.len(), MAX_MAPS);
    assert_eq!(maps[9].filename, "M9.TXT");
    assert!(!c.at_end());
}

#[test]
fn test_parse_map_row_reports_field() {
    assert_eq!(
        parse_map_row(&mut cursor("1,2,\n")).unwrap_err(),
        MapField::Filename
    );
}

#[test]
fn test_map_field_codes_round_trip() {
    for code in 1..=6u8 {
        assert_eq!(MapField::from_code(code).map(MapField::code), Some(code));
    }
    assert_eq!(MapField::from_code(0), None);
    assert_eq!(MapField::from_code(7), None);
}
