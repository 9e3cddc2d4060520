//! Junction row parsing
//!
//! Row grammar:
//!
//! ```text
//! row <- ('-'? num _ ',' _)^2 (('END' / num) _ ',' _)^4 (num _ ',' _)^3 num _ nl
//! ```
//!
//! Field codes interleave values and the comma after each value: odd codes
//! are values, even codes are commas, and 20 is the line ending.

use super::primitives::{NumberOrEnd, comma, newline, number, number_or_end, signed_number, spaces};
use super::{RowFailure, parse_rows};
use crate::constants::EDGE_SLOTS;
use crate::cursor::Cursor;
use crate::models::{Junction, Position2D};

/// Field of a junction row that failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JunctionField {
    East,
    North,
    /// Comma by ordinal within the row, 0..=8
    Comma(usize),
    /// Destination slot, 0..=3
    Destination(usize),
    /// Distance slot, 0..=3
    Distance(usize),
    EndOfLine,
}

impl JunctionField {
    pub fn code(self) -> u8 {
        let code = match self {
            Self::East => 1,
            Self::North => 3,
            Self::Comma(ordinal) => 2 + 2 * ordinal,
            Self::Destination(slot) => 5 + 2 * slot,
            Self::Distance(slot) => 13 + 2 * slot,
            Self::EndOfLine => 20,
        };
        code as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        let code = usize::from(code);
        match code {
            1 => Some(Self::East),
            3 => Some(Self::North),
            2..=18 if code % 2 == 0 => Some(Self::Comma((code - 2) / 2)),
            5..=11 => Some(Self::Destination((code - 5) / 2)),
            13..=19 => Some(Self::Distance((code - 13) / 2)),
            20 => Some(Self::EndOfLine),
            _ => None,
        }
    }

    /// Diagnostic text for this field
    pub fn description(self) -> &'static str {
        match self {
            Self::Comma(_) => "bad comma",
            Self::East | Self::North => "bad signed number (-?[0-9]+)",
            Self::Destination(_) => "bad number or end ([0-9]+ / 'END')",
            Self::Distance(_) => "bad number ([0-9]+)",
            Self::EndOfLine => "bad end of line (\\r \\n? / \\n)",
        }
    }
}

fn expect_comma<C: Cursor + ?Sized>(cursor: &mut C, ordinal: usize) -> Result<(), JunctionField> {
    spaces(cursor);
    if !comma(cursor) {
        return Err(JunctionField::Comma(ordinal));
    }
    spaces(cursor);
    Ok(())
}

/// Parse one junction row, stopping at the first bad field
pub fn parse_junction_row<C: Cursor + ?Sized>(cursor: &mut C) -> Result<Junction, JunctionField> {
    let east_mm = signed_number(cursor).ok_or(JunctionField::East)?;
    expect_comma(cursor, 0)?;
    let north_mm = signed_number(cursor).ok_or(JunctionField::North)?;
    expect_comma(cursor, 1)?;

    let mut destinations = [None; EDGE_SLOTS];
    for (slot, destination) in destinations.iter_mut().enumerate() {
        *destination = match number_or_end(cursor).ok_or(JunctionField::Destination(slot))? {
            // Out-of-range targets are rejected when the graph is assembled
            NumberOrEnd::Number(n) => Some(usize::try_from(n).unwrap_or(usize::MAX)),
            NumberOrEnd::End => None,
        };
        expect_comma(cursor, 2 + slot)?;
    }

    let mut distances_mm = [0u64; EDGE_SLOTS];
    for (slot, distance) in distances_mm.iter_mut().enumerate() {
        *distance = number(cursor).ok_or(JunctionField::Distance(slot))?;
        if slot + 1 < EDGE_SLOTS {
            expect_comma(cursor, 2 + EDGE_SLOTS + slot)?;
        }
    }

    spaces(cursor);
    if !newline(cursor) {
        return Err(JunctionField::EndOfLine);
    }

    Ok(Junction::new(
        Position2D::new(east_mm, north_mm),
        destinations,
        distances_mm,
    ))
}

/// Parse up to `max_rows` junction rows.
///
/// Row indices in the returned failure are zero-based and unshifted; the
/// loader adds the junction-file offset.
pub fn parse_junctions<C: Cursor + ?Sized>(
    cursor: &mut C,
    max_rows: usize,
) -> Result<Vec<Junction>, RowFailure> {
    parse_rows(cursor, max_rows, |cursor| {
        parse_junction_row(cursor).map_err(JunctionField::code)
    })
}
