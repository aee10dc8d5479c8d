//! Storage layer
//!
//! All state is one [`FinanceData`] blob kept in memory by [`Storage`] and
//! written back through a [`FinanceStore`] after every change.

pub mod file_io;
pub mod init;
pub mod store;

pub use file_io::{read_json, write_json_atomic};
pub use store::{FinanceStore, JsonFileStore, MemoryStore};

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::config::{FinancePaths, Settings};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, CategoryId, Transaction, TransactionId};

/// Key the data blob is stored under unless settings say otherwise
pub const DEFAULT_STORAGE_KEY: &str = "finance-tracker-data";

/// The persisted dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceData {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// In-memory dataset backed by a [`FinanceStore`]
pub struct Storage {
    store: Box<dyn FinanceStore>,
    key: String,
    data: RwLock<FinanceData>,
}

impl Storage {
    /// Create an empty storage; call [`Storage::load`] to read persisted data
    pub fn new(store: Box<dyn FinanceStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            data: RwLock::new(FinanceData::default()),
        }
    }

    /// Open the JSON file store under the configured data directory
    pub fn open(paths: &FinancePaths, settings: &Settings) -> FinanceResult<Self> {
        paths.ensure_directories()?;
        let store = JsonFileStore::new(paths.data_dir());
        let storage = Self::new(Box::new(store), settings.storage_key.clone());
        storage.load()?;
        Ok(storage)
    }

    /// Storage over a fresh [`MemoryStore`]
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()), DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> FinanceResult<RwLockReadGuard<'_, FinanceData>> {
        self.data
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> FinanceResult<RwLockWriteGuard<'_, FinanceData>> {
        self.data
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Replace the in-memory dataset with the persisted one
    pub fn load(&self) -> FinanceResult<()> {
        let loaded = self.store.load(&self.key)?;
        tracing::debug!(
            key = %self.key,
            transactions = loaded.transactions.len(),
            categories = loaded.categories.len(),
            "loaded finance data"
        );
        *self.write()? = loaded;
        Ok(())
    }

    /// Persist the in-memory dataset
    pub fn save(&self) -> FinanceResult<()> {
        let data = self.read()?;
        self.store.save(&self.key, &data)?;
        tracing::debug!(key = %self.key, "saved finance data");
        Ok(())
    }

    /// A copy of the whole dataset
    pub fn snapshot(&self) -> FinanceResult<FinanceData> {
        Ok(self.read()?.clone())
    }

    // Transaction operations

    /// All transactions in insertion order
    pub fn transactions(&self) -> FinanceResult<Vec<Transaction>> {
        Ok(self.read()?.transactions.clone())
    }

    pub fn get_transaction(&self, id: TransactionId) -> FinanceResult<Option<Transaction>> {
        Ok(self.read()?.transactions.iter().find(|t| t.id == id).cloned())
    }

    pub fn insert_transaction(&self, txn: Transaction) -> FinanceResult<()> {
        self.write()?.transactions.push(txn);
        Ok(())
    }

    /// Remove a transaction, returning it if it existed
    pub fn remove_transaction(&self, id: TransactionId) -> FinanceResult<Option<Transaction>> {
        let mut data = self.write()?;
        let position = data.transactions.iter().position(|t| t.id == id);
        Ok(position.map(|i| data.transactions.remove(i)))
    }

    /// Number of transactions referencing a category
    pub fn count_transactions_in_category(&self, id: CategoryId) -> FinanceResult<usize> {
        Ok(self
            .read()?
            .transactions
            .iter()
            .filter(|t| t.category_id == id)
            .count())
    }

    // Category operations

    /// All categories in insertion order
    pub fn categories(&self) -> FinanceResult<Vec<Category>> {
        Ok(self.read()?.categories.clone())
    }

    pub fn get_category(&self, id: CategoryId) -> FinanceResult<Option<Category>> {
        Ok(self.read()?.categories.iter().find(|c| c.id == id).cloned())
    }

    /// Find a category by name (case-insensitive)
    pub fn get_category_by_name(&self, name: &str) -> FinanceResult<Option<Category>> {
        let name_lower = name.trim().to_lowercase();
        Ok(self
            .read()?
            .categories
            .iter()
            .find(|c| c.name.to_lowercase() == name_lower)
            .cloned())
    }

    pub fn insert_category(&self, category: Category) -> FinanceResult<()> {
        self.write()?.categories.push(category);
        Ok(())
    }

    /// Remove a category, returning it if it existed
    pub fn remove_category(&self, id: CategoryId) -> FinanceResult<Option<Category>> {
        let mut data = self.write()?;
        let position = data.categories.iter().position(|c| c.id == id);
        Ok(position.map(|i| data.categories.remove(i)))
    }
}
