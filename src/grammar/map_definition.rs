//! Map catalog row parsing
//!
//! Row grammar:
//!
//! ```text
//! row <- flt _ ',' _ flt _ ',' _ name _ nl
//! flt <- '-'? [0-9]+ ('.' [0-9]*)?
//! ```

use super::primitives::{comma, filename, newline, number_floating, spaces};
use super::{RowFailure, parse_rows};
use crate::cursor::Cursor;
use crate::models::{GeoCoordinate, MapDefinition};

/// Field of a catalog row that failed to parse, numbered as in the
/// failure code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapField {
    Latitude = 1,
    LatitudeComma = 2,
    Longitude = 3,
    LongitudeComma = 4,
    Filename = 5,
    EndOfLine = 6,
}

impl MapField {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Latitude),
            2 => Some(Self::LatitudeComma),
            3 => Some(Self::Longitude),
            4 => Some(Self::LongitudeComma),
            5 => Some(Self::Filename),
            6 => Some(Self::EndOfLine),
            _ => None,
        }
    }

    /// Diagnostic text for this field
    pub fn description(self) -> &'static str {
        match self {
            Self::LatitudeComma | Self::LongitudeComma => "bad comma",
            Self::Latitude | Self::Longitude => "bad floating number (-?[0-9]+(.[0-9]+)?)",
            Self::Filename => "bad file name",
            Self::EndOfLine => "bad end of line (\\r \\n? / \\n)",
        }
    }
}

/// Parse one catalog row, stopping at the first bad field
pub fn parse_map_row<C: Cursor + ?Sized>(cursor: &mut C) -> Result<MapDefinition, MapField> {
    let latitude = number_floating(cursor).ok_or(MapField::Latitude)?;
    spaces(cursor);
    if !comma(cursor) {
        return Err(MapField::LatitudeComma);
    }
    spaces(cursor);

    let longitude = number_floating(cursor).ok_or(MapField::Longitude)?;
    spaces(cursor);
    if !comma(cursor) {
        return Err(MapField::LongitudeComma);
    }
    spaces(cursor);

    let name = filename(cursor).ok_or(MapField::Filename)?;
    spaces(cursor);
    if !newline(cursor) {
        return Err(MapField::EndOfLine);
    }

    Ok(MapDefinition::new(
        GeoCoordinate::new(latitude, longitude),
        name,
    ))
}

/// Parse up to `max_rows` catalog rows.
///
/// End of input before a row starts ends the catalog successfully. A bad
/// field fails the whole parse with its row and field code.
pub fn parse_map_definitions<C: Cursor + ?Sized>(
    cursor: &mut C,
    max_rows: usize,
) -> Result<Vec<MapDefinition>, RowFailure> {
    parse_rows(cursor, max_rows, |cursor| {
        parse_map_row(cursor).map_err(MapField::code)
    })
}
