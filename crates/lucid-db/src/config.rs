//! RON configuration for opening a store

use crate::error::Result;
use crate::store::Store;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the dream store lives
///
/// ```text
/// (path: Some("dreams.db"))
/// ```
///
/// Leaving `path` out opens an in-memory store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Database file
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    /// Configuration for a database file at `path`
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Parse a configuration from RON text
    pub fn from_ron_str(content: &str) -> Result<Self> {
        Ok(ron::from_str(content)?)
    }

    /// Read a configuration from a RON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    /// Open the configured store
    pub fn open(&self) -> Result<Store> {
        match &self.path {
            Some(path) => Store::open(path),
            None => Store::in_memory(),
        }
    }
}
