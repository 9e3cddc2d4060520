//! Map catalog loading
//!
//! Reads the catalog of regional maps, picks the one nearest to the
//! vehicle, and loads that map's junction file into a [`JunctionGraph`].
//! Loading is all-or-nothing: every failure path returns a [`LoadError`]
//! and drops whatever had been read so far.

use crate::constants::{MAX_JUNCTIONS, MAX_MAPS};
use crate::cursor::{ByteCursor, Cursor};
use crate::error::LoadError;
use crate::grammar::{parse_junctions, parse_map_definitions, primitives};
use crate::models::{GeoCoordinate, JunctionGraph, MapDefinition};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub mod selection;
pub mod store;

#[cfg(test)]
pub mod tests;

pub use selection::select_nearest;
pub use store::{DirectoryStore, MapStore, MemoryStore};

/// Result of a successful load: the graph and the map it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadedMap {
    pub graph: JunctionGraph,
    pub selected: MapDefinition,
}

/// Loads junction graphs through a [`MapStore`]
#[derive(Debug, Clone)]
pub struct MapCatalogLoader<S> {
    store: S,
}

impl<S: MapStore> MapCatalogLoader<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the junction graph of the map nearest to `here`.
    ///
    /// # Errors
    /// * `CatalogOpen` (-1) if the catalog cannot be read
    /// * `CatalogGrammar` (`row*100 + field`) for a malformed catalog row
    /// * `NoMapFound` (-3) if the catalog lists no maps
    /// * `JunctionFileOpen` (-2) if the selected junction file cannot be read
    /// * `JunctionGrammar` (`10000 + row*100 + field`) for a malformed junction row
    /// * `InvalidGraph` (-4) if a destination names a junction that does not exist
    pub fn load(&self, catalog: &str, here: &GeoCoordinate) -> Result<LoadedMap, LoadError> {
        info!(
            "Loading map catalog '{}' for position ({}, {})",
            catalog, here.latitude, here.longitude
        );

        let mut maps = self.load_catalog(catalog)?;
        let index = select_nearest(&maps, here).ok_or_else(|| LoadError::NoMapFound {
            catalog: catalog.to_string(),
        })?;

        let selected = maps.swap_remove(index);
        info!(
            "Selected map {} '{}' at ({}, {})",
            index, selected.filename, selected.position.latitude, selected.position.longitude
        );

        let graph = self.load_junctions(&selected.filename)?;

        info!(
            "Loaded {} junctions from '{}'",
            graph.len(),
            selected.filename
        );
        Ok(LoadedMap { graph, selected })
    }

    /// Read and parse the catalog without selecting a map.
    ///
    /// An empty catalog is returned as an empty list; only [`Self::load`]
    /// turns that into `NoMapFound`.
    pub fn load_catalog(&self, catalog: &str) -> Result<Vec<MapDefinition>, LoadError> {
        let bytes = self
            .store
            .open(catalog)
            .map_err(|source| LoadError::CatalogOpen {
                catalog: catalog.to_string(),
                source,
            })?;

        let mut cursor = ByteCursor::new(&bytes);
        let maps = parse_map_definitions(&mut cursor, MAX_MAPS).map_err(|failure| {
            LoadError::CatalogGrammar {
                catalog: catalog.to_string(),
                failure,
            }
        })?;
        warn_if_truncated(&mut cursor, catalog, MAX_MAPS);

        debug!("Parsed {} map definitions from '{}'", maps.len(), catalog);
        Ok(maps)
    }

    /// Read, parse and validate one junction file
    pub fn load_junctions(&self, file: &str) -> Result<JunctionGraph, LoadError> {
        let bytes = self
            .store
            .open(file)
            .map_err(|source| LoadError::JunctionFileOpen {
                file: file.to_string(),
                source,
            })?;

        let mut cursor = ByteCursor::new(&bytes);
        let junctions = parse_junctions(&mut cursor, MAX_JUNCTIONS).map_err(|failure| {
            LoadError::JunctionGrammar {
                file: file.to_string(),
                failure,
            }
        })?;
        warn_if_truncated(&mut cursor, file, MAX_JUNCTIONS);

        debug!("Parsed {} junctions from '{}'", junctions.len(), file);
        JunctionGraph::new(junctions).map_err(|source| LoadError::InvalidGraph {
            file: file.to_string(),
            source,
        })
    }
}

/// Rows past the capacity are never parsed; say so rather than drop them
/// silently
fn warn_if_truncated(cursor: &mut ByteCursor<'_>, source: &str, capacity: usize) {
    primitives::spaces(cursor);
    if !cursor.at_end() {
        warn!(
            "'{}' has more than {} rows; {} trailing bytes ignored",
            source,
            capacity,
            cursor.remaining().len()
        );
    }
}
