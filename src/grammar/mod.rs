//! Character-level grammar for map catalogs and junction files
//!
//! Both file formats are line oriented and parsed without backtracking:
//!
//! ```text
//! catalog  <- (flt _ ',' _ flt _ ',' _ name _ nl)*
//! junction <- ('-'? num _ ',' _)^2 (('END' / num) _ ',' _)^4 (num _ ',' _)^3 num _ nl
//! flt      <- '-'? num ('.' [0-9]*)?
//! num      <- [0-9]+
//! name     <- [0-9A-Za-z_.-]+
//! nl       <- '\r' '\n'? / '\n'
//! _        <- [ \t]*
//! ```
//!
//! A parse either yields every row or a [`RowFailure`] naming the row and
//! field where it stopped.

use crate::constants::codes::ROW_STRIDE;
use crate::cursor::Cursor;
use std::fmt;

pub mod junction_entry;
pub mod map_definition;
pub mod primitives;

#[cfg(test)]
pub mod tests;

pub use junction_entry::{JunctionField, parse_junction_row, parse_junctions};
pub use map_definition::{MapField, parse_map_definitions, parse_map_row};

/// Location of a grammar failure: zero-based row and field code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowFailure {
    pub row: usize,
    pub field: u8,
}

impl RowFailure {
    pub fn new(row: usize, field: u8) -> Self {
        Self { row, field }
    }

    /// Encoded failure code `row*100 + field`
    pub fn code(&self) -> i32 {
        self.row as i32 * ROW_STRIDE + i32::from(self.field)
    }

    /// Decode `row*100 + field`; `None` for codes below 1
    pub fn from_code(code: i32) -> Option<Self> {
        if code < 1 {
            return None;
        }
        Some(Self {
            row: (code / ROW_STRIDE) as usize,
            field: (code % ROW_STRIDE) as u8,
        })
    }

    /// One-based line number as shown to humans
    pub fn line(&self) -> usize {
        self.row + 1
    }
}

impl fmt::Display for RowFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, field {}", self.line(), self.field)
    }
}

/// Drive a row parser over the input.
///
/// Leading spaces are skipped before each row, and end of input at that
/// point ends the parse successfully. At most `max_rows` rows are read; any
/// input after them is left unconsumed.
pub(crate) fn parse_rows<C, T>(
    cursor: &mut C,
    max_rows: usize,
    mut parse_row: impl FnMut(&mut C) -> Result<T, u8>,
) -> Result<Vec<T>, RowFailure>
where
    C: Cursor + ?Sized,
{
    let mut rows = Vec::new();
    for row in 0..max_rows {
        primitives::spaces(cursor);
        if cursor.at_end() {
            break;
        }
        let parsed = parse_row(cursor).map_err(|field| RowFailure::new(row, field))?;
        rows.push(parsed);
    }
    Ok(rows)
}
