//! Token-level parsing primitives
//!
//! Every primitive reads from a [`Cursor`] without backtracking: bytes
//! consumed on the way to a failed token stay consumed. The one exception is
//! [`filename`], which measures the token and then seeks back to copy it.
//!
//! Numeric accumulators are created zeroed inside each primitive. Integer
//! accumulation wraps modulo 2^64 instead of checking for overflow, so an
//! absurdly long digit run still parses (to a wrapped value) and never
//! panics.

use crate::constants::END_LITERAL;
use crate::cursor::Cursor;

/// A destination slot token: a node number or the END sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberOrEnd {
    Number(u64),
    End,
}

fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

fn is_filename_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'.' | b'-')
}

/// Consume zero or more spaces and tabs
pub fn spaces<C: Cursor + ?Sized>(cursor: &mut C) {
    while matches!(cursor.peek(), Some(b' ' | b'\t')) {
        cursor.advance();
    }
}

/// Consume `\r\n`, `\r` or `\n`. Nothing is consumed on failure.
pub fn newline<C: Cursor + ?Sized>(cursor: &mut C) -> bool {
    match cursor.peek() {
        Some(b'\r') => {
            cursor.advance();
            if cursor.peek() == Some(b'\n') {
                cursor.advance();
            }
            true
        }
        Some(b'\n') => {
            cursor.advance();
            true
        }
        _ => false,
    }
}

/// Consume a single comma. Nothing is consumed on failure.
pub fn comma<C: Cursor + ?Sized>(cursor: &mut C) -> bool {
    if cursor.peek() == Some(b',') {
        cursor.advance();
        true
    } else {
        false
    }
}

/// Unsigned decimal integer `[0-9]+`
pub fn number<C: Cursor + ?Sized>(cursor: &mut C) -> Option<u64> {
    if !cursor.peek().is_some_and(is_digit) {
        return None;
    }

    let mut acc: u64 = 0;
    while let Some(byte) = cursor.peek().filter(|b| is_digit(*b)) {
        acc = acc.wrapping_mul(10).wrapping_add(u64::from(byte - b'0'));
        cursor.advance();
    }
    Some(acc)
}

/// Signed decimal integer `-?[0-9]+`.
///
/// A lone `-` is consumed before the failure is reported.
pub fn signed_number<C: Cursor + ?Sized>(cursor: &mut C) -> Option<i64> {
    let negative = cursor.peek() == Some(b'-');
    if negative {
        cursor.advance();
    }

    // Reinterpreting the wrapped magnitude keeps overflow consistent with `number`
    let magnitude = number(cursor)? as i64;
    Some(if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    })
}

/// Floating number `-?[0-9]+(.[0-9]*)?`
///
/// Fractional digits are added with a running scale of 0.1 per digit, and
/// the sign is applied once at the end.
pub fn number_floating<C: Cursor + ?Sized>(cursor: &mut C) -> Option<f64> {
    let mut sign = 1.0;
    if cursor.peek() == Some(b'-') {
        sign = -1.0;
        cursor.advance();
    }

    if !cursor.peek().is_some_and(is_digit) {
        return None;
    }

    let mut acc = 0.0_f64;
    while let Some(byte) = cursor.peek().filter(|b| is_digit(*b)) {
        acc = acc * 10.0 + f64::from(byte - b'0');
        cursor.advance();
    }

    if cursor.peek() == Some(b'.') {
        cursor.advance();
        let mut scale = 1.0_f64;
        while let Some(byte) = cursor.peek().filter(|b| is_digit(*b)) {
            scale *= 0.1;
            acc += f64::from(byte - b'0') * scale;
            cursor.advance();
        }
    }

    Some(acc * sign)
}

/// Either the literal `END` or an unsigned [`number`].
///
/// A partial literal (`E`, `EN`) is consumed and then fails; this decides
/// where a malformed row reports its error, so it must not be "fixed".
pub fn number_or_end<C: Cursor + ?Sized>(cursor: &mut C) -> Option<NumberOrEnd> {
    if cursor.peek() != END_LITERAL.first().copied() {
        return number(cursor).map(NumberOrEnd::Number);
    }

    for &expected in END_LITERAL {
        if cursor.peek() != Some(expected) {
            return None;
        }
        cursor.advance();
    }
    Some(NumberOrEnd::End)
}

/// File name `[0-9A-Za-z_.-]+`.
///
/// Scans to the end of the token, seeks back to its start and copies it.
pub fn filename<C: Cursor + ?Sized>(cursor: &mut C) -> Option<String> {
    let start = cursor.position();
    while cursor.peek().is_some_and(is_filename_byte) {
        cursor.advance();
    }
    let end = cursor.position();
    if end == start {
        return None;
    }

    let mut name = String::with_capacity(end - start);
    cursor.seek(start);
    while cursor.position() < end {
        let Some(byte) = cursor.peek() else {
            break;
        };
        name.push(char::from(byte));
        cursor.advance();
    }
    Some(name)
}
