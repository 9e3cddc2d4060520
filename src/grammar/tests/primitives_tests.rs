//! Tests for token-level primitives

use super::cursor;
use crate::cursor::Cursor;
use crate::grammar::primitives::*;

#[test]
fn test_spaces_consumes_blanks_only() {
    let mut c = cursor(" \t \tx");
    spaces(&mut c);
    assert_eq!(c.peek(), Some(b'x'));

    let mut c = cursor("x");
    spaces(&mut c);
    assert_eq!(c.position(), 0);
}

#[test]
fn test_newline_variants() {
    let mut c = cursor("\r\nx");
    assert!(newline(&mut c));
    assert_eq!(c.peek(), Some(b'x'));

    let mut c = cursor("\rx");
    assert!(newline(&mut c));
    assert_eq!(c.peek(), Some(b'x'));

    let mut c = cursor("\nx");
    assert!(newline(&mut c));
    assert_eq!(c.peek(), Some(b'x'));

    // A bare "\n\r" is one newline followed by another
    let mut c = cursor("\n\r");
    assert!(newline(&mut c));
    assert_eq!(c.peek(), Some(b'\r'));
}

#[test]
fn test_newline_failure_consumes_nothing() {
    let mut c = cursor("x\n");
    assert!(!newline(&mut c));
    assert_eq!(c.position(), 0);

    let mut c = cursor("");
    assert!(!newline(&mut c));
}

#[test]
fn test_number() {
    let mut c = cursor("01234,");
    assert_eq!(number(&mut c), Some(1234));
    assert_eq!(c.peek(), Some(b','));

    let mut c = cursor("-5");
    assert_eq!(number(&mut c), None);
    assert_eq!(c.position(), 0);
}

#[test]
fn test_number_starts_from_zero_each_call() {
    let mut c = cursor("12 34");
    assert_eq!(number(&mut c), Some(12));
    spaces(&mut c);
    assert_eq!(number(&mut c), Some(34));
}

#[test]
fn test_number_overflow_wraps() {
    // 2^64 + 5 wraps to 5
    let mut c = cursor("18446744073709551621");
    assert_eq!(number(&mut c), Some(5));
    assert!(c.at_end());
}

#[test]
fn test_signed_number() {
    assert_eq!(signed_number(&mut cursor("42")), Some(42));
    assert_eq!(signed_number(&mut cursor("-42")), Some(-42));
    assert_eq!(signed_number(&mut cursor("-0")), Some(0));
}

#[test]
fn test_signed_number_lone_minus_is_consumed() {
    let mut c = cursor("-,");
    assert_eq!(signed_number(&mut c), None);
    assert_eq!(c.peek(), Some(b','));
}

#[test]
fn test_number_floating() {
    let value = number_floating(&mut cursor("47.6")).unwrap();
    assert!((value - 47.6).abs() < 1e-9);

    let value = number_floating(&mut cursor("-122.3")).unwrap();
    assert!((value + 122.3).abs() < 1e-9);

    let value = number_floating(&mut cursor("7")).unwrap();
    assert_eq!(value, 7.0);

    let value = number_floating(&mut cursor("0.05")).unwrap();
    assert!((value - 0.05).abs() < 1e-12);
}

#[test]
fn test_number_floating_trailing_dot() {
    let mut c = cursor("12.,");
    let value = number_floating(&mut c).unwrap();
    assert_eq!(value, 12.0);
    assert_eq!(c.peek(), Some(b','));
}

#[test]
fn test_number_floating_requires_integer_digits() {
    let mut c = cursor(".5");
    assert_eq!(number_floating(&mut c), None);
    assert_eq!(c.position(), 0);

    let mut c = cursor("-x");
    assert_eq!(number_floating(&mut c), None);
    assert_eq!(c.position(), 1);
}

#[test]
fn test_number_or_end() {
    assert_eq!(
        number_or_end(&mut cursor("END,")),
        Some(NumberOrEnd::End)
    );
    assert_eq!(
        number_or_end(&mut cursor("17,")),
        Some(NumberOrEnd::Number(17))
    );
    assert_eq!(number_or_end(&mut cursor("end")), None);
}

#[test]
fn test_number_or_end_partial_literal_consumes() {
    let mut c = cursor("EN,");
    assert_eq!(number_or_end(&mut c), None);
    assert_eq!(c.position(), 2);

    let mut c = cursor("EX");
    assert_eq!(number_or_end(&mut c), None);
    assert_eq!(c.position(), 1);

    let mut c = cursor("E");
    assert_eq!(number_or_end(&mut c), None);
    assert!(c.at_end());
}

#[test]
fn test_filename() {
    let mut c = cursor("Map_1-b.TXT \n");
    assert_eq!(filename(&mut c).as_deref(), Some("Map_1-b.TXT"));
    assert_eq!(c.peek(), Some(b' '));
}

#[test]
fn test_filename_at_end_of_input() {
    let mut c = cursor("MAP1.TXT");
    assert_eq!(filename(&mut c).as_deref(), Some("MAP1.TXT"));
    assert!(c.at_end());
}

#[test]
fn test_filename_rejects_empty() {
    let mut c = cursor("/etc/passwd");
    assert_eq!(filename(&mut c), None);
    assert_eq!(c.position(), 0);
}

#[test]
fn test_filename_stops_at_foreign_byte() {
    let mut c = cursor("a b");
    assert_eq!(filename(&mut c).as_deref(), Some("a"));
    assert_eq!(c.position(), 1);
}

#[test]
fn test_comma() {
    let mut c = cursor(",x");
    assert!(comma(&mut c));
    assert!(!comma(&mut c));
    assert_eq!(c.peek(), Some(b'x'));
}
