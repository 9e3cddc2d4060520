//! Storage access for catalogs and junction files
//!
//! The loader only needs "give me the bytes of this named source". Opening
//! and closing the medium is the store's business; the loader never holds a
//! handle across a failure.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Named byte sources the loader reads catalogs and junction files from
pub trait MapStore {
    /// Read the complete contents of `name`
    fn open(&self, name: &str) -> io::Result<Vec<u8>>;
}

impl<T: MapStore + ?Sized> MapStore for &T {
    fn open(&self, name: &str) -> io::Result<Vec<u8>> {
        (**self).open(name)
    }
}

/// Files resolved relative to a single directory (the SD card root on the
/// vehicle)
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl MapStore for DirectoryStore {
    fn open(&self, name: &str) -> io::Result<Vec<u8>> {
        let path = self.root.join(name);
        debug!("Reading map source {}", path.display());
        std::fs::read(path)
    }
}

/// In-memory sources, keyed by name
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    sources: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a source
    pub fn insert(&mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) {
        self.sources.insert(name.into(), contents.into());
    }

    /// Builder form of [`MemoryStore::insert`]
    pub fn with_source(mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(name, contents);
        self
    }
}

impl MapStore for MemoryStore {
    fn open(&self, name: &str) -> io::Result<Vec<u8>> {
        self.sources.get(name).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no source named '{}'", name))
        })
    }
}
