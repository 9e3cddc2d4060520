//! Shared test utilities and fixtures for catalog loading tests

use crate::catalog::MemoryStore;
use std::fs;
use std::path::Path;


/// Catalog name used by the fixtures
pub const CATALOG: &str = "MAP_DEFS.TXT";

/// Three junctions on a line, each linked to the next
pub const LINE_JUNCTIONS: &str = "\
0, 0, 1, END, END, END, 100, 0, 0, 0
100, 0, 2, 0, END, END, 100, 100, 0, 0
200, 0, END, 1, END, END, 0, 100, 0, 0
";

/// Two junctions linked to each other
pub const PAIR_JUNCTIONS: &str = "\
-50, -50, 1, END, END, END, 200, 0, 0, 0
50, 50, 0, END, END, END, 200, 0, 0, 0
";

/// Catalog with two maps, Seattle and Portland
pub fn two_map_catalog() -> String {
    "47.6, -122.3, SEATTLE.TXT\n45.5, -122.7, PORTLAND.TXT\n".to_string()
}

/// In-memory store holding the two-map catalog and both junction files
pub fn create_test_store() -> MemoryStore {
    MemoryStore::new()
        .with_source(CATALOG, two_map_catalog())
        .with_source("SEATTLE.TXT", LINE_JUNCTIONS)
        .with_source("PORTLAND.TXT", PAIR_JUNCTIONS)
}

/// Write the same fixture set into a directory
pub fn create_test_directory(dir: &Path) -> std::io::Result<()> {
    fs::write(dir.join(CATALOG), two_map_catalog())?;
    fs::write(dir.join("SEATTLE.TXT"), LINE_JUNCTIONS)?;
    fs::write(dir.join("PORTLAND.TXT"), PAIR_JUNCTIONS)?;
    Ok(())
}
