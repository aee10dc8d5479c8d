//! Key-value stores for the persisted data blob
//!
//! The whole dataset is saved as one blob under a fixed key. Loading a key
//! that was never written yields empty data.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{FinanceError, FinanceResult};

use super::file_io::{read_json, write_json_atomic};
use super::FinanceData;

/// A synchronous key-value store holding [`FinanceData`] blobs
pub trait FinanceStore {
    /// Load the blob stored under `key`, or empty data if there is none
    fn load(&self, key: &str) -> FinanceResult<FinanceData>;

    /// Replace the blob stored under `key`
    fn save(&self, key: &str, data: &FinanceData) -> FinanceResult<()>;
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> FinanceResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(FinanceError::Config(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl FinanceStore for JsonFileStore {
    fn load(&self, key: &str) -> FinanceResult<FinanceData> {
        let path = self.path_for(key)?;
        let data: Option<FinanceData> = read_json(&path)?;
        Ok(data.unwrap_or_default())
    }

    fn save(&self, key: &str, data: &FinanceData) -> FinanceResult<()> {
        let path = self.path_for(key)?;
        write_json_atomic(&path, data)
    }
}

/// In-memory store, used by tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RwLock<HashMap<String, FinanceData>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `data` already stored under `key`
    pub fn with_data(key: &str, data: FinanceData) -> Self {
        let mut blobs = HashMap::new();
        blobs.insert(key.to_string(), data);
        Self {
            blobs: RwLock::new(blobs),
        }
    }
}

impl FinanceStore for MemoryStore {
    fn load(&self, key: &str) -> FinanceResult<FinanceData> {
        let blobs = self
            .blobs
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(blobs.get(key).cloned().unwrap_or_default())
    }

    fn save(&self, key: &str, data: &FinanceData) -> FinanceResult<()> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        blobs.insert(key.to_string(), data.clone());
        Ok(())
    }
}
