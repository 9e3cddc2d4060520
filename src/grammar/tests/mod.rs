//! Shared fixtures for grammar tests

use crate::cursor::ByteCursor;

pub mod map_definition_tests;
pub mod primitives_tests;

/// Cursor over a string literal
pub fn cursor(text: &str) -> ByteCursor<'_> {
    ByteCursor::from(text)
}

/// A well-formed junction row with the given position and destinations
pub fn junction_row(east: i64, north: i64, destinations: [&str; 4]) -> String {
    format!(
        "{}, {}, {}, {}, {}, {}, 100, 200, 300, 400\n",
        east, north, destinations[0], destinations[1], destinations[2], destinations[3]
    )
}
