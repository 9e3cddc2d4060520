//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional JSON config
//! file, then `ELCANO_*` environment variables, then command-line flags
//! (applied by the CLI).

use crate::catalog::DirectoryStore;
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CATALOG_NAME, EDGE_SLOTS, env};
use crate::error::{PlannerError, Result};
use crate::planner::{EdgeWeight, SearchConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Planner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Directory holding the catalog and the junction files it names
    pub map_dir: PathBuf,

    /// Catalog file name, relative to `map_dir`
    pub catalog: String,

    /// A* search settings
    pub search: SearchConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            map_dir: PathBuf::from("."),
            catalog: DEFAULT_CATALOG_NAME.to_string(),
            search: SearchConfig::default(),
        }
    }
}

impl PlannerConfig {
    pub fn with_map_dir(mut self, map_dir: impl Into<PathBuf>) -> Self {
        self.map_dir = map_dir.into();
        self
    }

    pub fn with_catalog(mut self, catalog: impl Into<String>) -> Self {
        self.catalog = catalog.into();
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Platform config file location, e.g. `~/.config/elcano-planner/config.json`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlannerError::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|source| PlannerError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, then `config_file` if given, then the process environment
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Reading config file {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `ELCANO_*` overrides from `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(map_dir) = lookup(env::MAP_DIR) {
            debug!("{} overrides map_dir", env::MAP_DIR);
            self.map_dir = PathBuf::from(map_dir);
        }
        if let Some(catalog) = lookup(env::CATALOG) {
            debug!("{} overrides catalog", env::CATALOG);
            self.catalog = catalog;
        }
        if let Some(edge_slots) = lookup(env::EDGE_SLOTS) {
            self.search.edge_slots = edge_slots.trim().parse().map_err(|_| {
                PlannerError::configuration(format!(
                    "{} must be a number, got '{}'",
                    env::EDGE_SLOTS,
                    edge_slots
                ))
            })?;
        }
        if let Some(edge_weight) = lookup(env::EDGE_WEIGHT) {
            self.search.edge_weight = edge_weight
                .trim()
                .parse::<EdgeWeight>()
                .map_err(PlannerError::configuration)?;
        }
        Ok(())
    }

    /// Check settings that would otherwise surface as confusing load errors
    pub fn validate(&self) -> Result<()> {
        if self.catalog.trim().is_empty() {
            return Err(PlannerError::configuration("catalog name cannot be empty"));
        }
        if !(1..=EDGE_SLOTS).contains(&self.search.edge_slots) {
            return Err(PlannerError::configuration(format!(
                "edge_slots must be between 1 and {}, got {}",
                EDGE_SLOTS, self.search.edge_slots
            )));
        }
        Ok(())
    }

    /// Store reading from `map_dir`
    pub fn store(&self) -> DirectoryStore {
        DirectoryStore::new(&self.map_dir)
    }
}
