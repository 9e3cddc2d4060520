//! Human-readable diagnostics for load failure codes.
//!
//! A failure code is decoded into a [`Diagnostic`], whose `Display` output
//! is the multi-line text written by [`ErrorReporter`]:
//!
//! ```text
//! Waypoint Definition Error!
//!     file: MAP1.TXT
//!     line: 3
//!     error: bad comma
//! ```
//!
//! (lines after the first are indented with a single tab). Codes outside
//! every range produce no diagnostic.

use crate::constants::codes::{
    CATALOG_OPEN, INVALID_GRAPH, JUNCTION_FILE_OPEN, JUNCTION_OFFSET, MAX_JUNCTION_FIELD,
    MAX_MAP_FIELD, NO_MAP_FOUND, ROW_STRIDE,
};
use crate::constants::{MAX_JUNCTIONS, MAX_MAPS};
use crate::error::LoadError;
use crate::grammar::{JunctionField, MapField, RowFailure};
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

const UNKNOWN: &str = "unknown";

/// Decoded failure code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Grammar failure in a junction file
    WaypointDefinition {
        file: Option<String>,
        line: usize,
        field: u8,
        message: &'static str,
    },
    /// Grammar failure in the map catalog
    MapDefinition {
        line: usize,
        field: u8,
        message: &'static str,
    },
    /// Resource-level failure (negative code)
    File { code: i32, message: &'static str },
}

impl Diagnostic {
    /// Decode `code`; `junction_file` names the file for junction failures.
    ///
    /// Returns `None` for 0 and for positive codes outside both grammar
    /// ranges.
    pub fn from_code(code: i32, junction_file: Option<&str>) -> Option<Self> {
        let max_junction_code = JUNCTION_OFFSET + MAX_JUNCTION_FIELD + ROW_STRIDE * MAX_JUNCTIONS as i32;
        let max_map_code = MAX_MAP_FIELD + ROW_STRIDE * MAX_MAPS as i32;

        if (JUNCTION_OFFSET + 1..=max_junction_code).contains(&code) {
            let failure = RowFailure::from_code(code - JUNCTION_OFFSET)?;
            let message = JunctionField::from_code(failure.field).map_or(UNKNOWN, |f| f.description());
            Some(Self::WaypointDefinition {
                file: junction_file.map(str::to_string),
                line: failure.line(),
                field: failure.field,
                message,
            })
        } else if (1..=max_map_code).contains(&code) {
            let failure = RowFailure::from_code(code)?;
            let message = MapField::from_code(failure.field).map_or(UNKNOWN, |f| f.description());
            Some(Self::MapDefinition {
                line: failure.line(),
                field: failure.field,
                message,
            })
        } else if code < 0 {
            let message = match code {
                CATALOG_OPEN => "bad map def file name",
                JUNCTION_FILE_OPEN => "bad waypoint def file name",
                NO_MAP_FOUND => "unable to load map defs",
                INVALID_GRAPH => "waypoint destination out of range",
                _ => UNKNOWN,
            };
            Some(Self::File { code, message })
        } else {
            None
        }
    }

    /// Diagnostic for a loader error
    pub fn from_load_error(error: &LoadError) -> Option<Self> {
        Self::from_code(error.code(), error.junction_file())
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::WaypointDefinition { message, .. }
            | Self::MapDefinition { message, .. }
            | Self::File { message, .. } => *message,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WaypointDefinition {
                file,
                line,
                message,
                ..
            } => {
                writeln!(f, "Waypoint Definition Error!")?;
                writeln!(f, "\tfile: {}", file.as_deref().unwrap_or(UNKNOWN))?;
                writeln!(f, "\tline: {}", line)?;
                writeln!(f, "\terror: {}", message)
            }
            Self::MapDefinition { line, message, .. } => {
                writeln!(f, "Map Definition Error!")?;
                writeln!(f, "\tline: {}", line)?;
                writeln!(f, "\terror: {}", message)
            }
            Self::File { message, .. } => {
                writeln!(f, "File Error!")?;
                writeln!(f, "\terror: {}", message)
            }
        }
    }
}

/// Writes diagnostics to a caller-owned sink
#[derive(Debug)]
pub struct ErrorReporter<W: Write> {
    sink: W,
}

impl<W: Write> ErrorReporter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Write the diagnostic for `code`. Nothing is written for codes
    /// without one.
    pub fn report(&mut self, code: i32, junction_file: Option<&str>) -> io::Result<()> {
        match Diagnostic::from_code(code, junction_file) {
            Some(diagnostic) => write!(self.sink, "{}", diagnostic),
            None => Ok(()),
        }
    }

    pub fn report_load_error(&mut self, error: &LoadError) -> io::Result<()> {
        self.report(error.code(), error.junction_file())
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}
