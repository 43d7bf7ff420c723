//! Store configuration, read from TOML.
//!
//! ```toml
//! backend = "json"     # or "memory"
//! directory = "saves"  # used by the json backend
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{GameRepository, JsonFileRepository, MemoryRepository, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Memory,
    #[default]
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub backend: Backend,
    pub directory: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            directory: PathBuf::from("saves"),
        }
    }
}

impl StoreConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, StorageError> {
        toml::from_str(s).map_err(|e| StorageError::Config(e.to_string()))
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, StorageError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(StorageError::io(path, e)),
        }
    }

    /// Build the repository this configuration describes.
    pub fn open(&self) -> Result<Box<dyn GameRepository>, StorageError> {
        Ok(match self.backend {
            Backend::Memory => Box::new(MemoryRepository::new()),
            Backend::Json => Box::new(JsonFileRepository::open(&self.directory)?),
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
