//! Storage port for the ordering session
//!
//! The manager only needs a tiny key-value capability: read a key, and write
//! or delete a set of keys atomically. [`StateStore`] is that capability;
//! [`RedbStore`] backs it with a redb file, [`MemoryStore`] with a map.
//!
//! # Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | `current-order` | JSON array of `OrderLineItem` |
//! | `table-number` | JSON string |
//! | `restaurant-orders` | JSON array of `Order`, newest first |
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate`: once [`StateStore::commit`]
//! returns, the batch is on disk, and a crash mid-commit leaves the previous
//! state intact.

use parking_lot::RwLock;
use redb::{Database, ReadableDatabase, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table holding session state: key = state key, value = JSON bytes
const STATE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("session_state");

/// In-progress cart
pub const CART_KEY: &str = "current-order";
/// Selected table
pub const TABLE_KEY: &str = "table-number";
/// Submitted orders
pub const ORDERS_KEY: &str = "restaurant-orders";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Backend error: {0}")]
    Backend(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Writes applied together by [`StateStore::commit`]
///
/// `Some(bytes)` stores a value, `None` deletes the key.
#[derive(Debug, Clone, Default)]
pub struct WriteBatch {
    ops: Vec<(String, Option<Vec<u8>>)>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: Vec<u8>) -> &mut Self {
        self.ops.push((key.into(), Some(value)));
        self
    }

    pub fn delete(&mut self, key: impl Into<String>) -> &mut Self {
        self.ops.push((key.into(), None));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Keys touched by this batch, in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().map(|(key, _)| key.as_str())
    }

    fn into_ops(self) -> Vec<(String, Option<Vec<u8>>)> {
        self.ops
    }
}

/// Key-value capability the order session persists through
///
/// `commit` must be all-or-nothing: either every write in the batch is
/// visible afterwards or none is.
pub trait StateStore: Send + Sync {
    /// Read the raw value stored under `key`
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Apply a batch of writes atomically
    fn commit(&self, batch: WriteBatch) -> StorageResult<()>;

    /// Store a single value
    fn set(&self, key: &str, value: Vec<u8>) -> StorageResult<()> {
        let mut batch = WriteBatch::new();
        batch.set(key, value);
        self.commit(batch)
    }

    /// Remove a single key (absent keys are fine)
    fn delete(&self, key: &str) -> StorageResult<()> {
        let mut batch = WriteBatch::new();
        batch.delete(key);
        self.commit(batch)
    }
}

/// Read and decode a JSON value, falling back to `T::default()` when absent
pub fn load_json<T>(store: &dyn StateStore, key: &str) -> StorageResult<T>
where
    T: DeserializeOwned + Default,
{
    match store.get(key)? {
        Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
        None => Ok(T::default()),
    }
}

/// Encode a value for [`WriteBatch::set`]
pub fn encode_json<T: Serialize + ?Sized>(value: &T) -> StorageResult<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

// ========== redb ==========

/// Session store backed by redb
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl std::fmt::Debug for RedbStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbStore").finish_non_exhaustive()
    }
}

impl RedbStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        // Create the table up front so read transactions never miss it
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(STATE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl StateStore for RedbStore {
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(STATE_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_vec()))
    }

    fn commit(&self, batch: WriteBatch) -> StorageResult<()> {
        if batch.is_empty() {
            return Ok(());
        }

        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(STATE_TABLE)?;
            for (key, value) in batch.into_ops() {
                match value {
                    Some(bytes) => {
                        table.insert(key.as_str(), bytes.as_slice())?;
                    }
                    None => {
                        table.remove(key.as_str())?;
                    }
                }
            }
        }
        txn.commit()?;
        Ok(())
    }
}

// ========== In-process ==========

/// Session store kept in a map
///
/// Survives as long as the value (or a clone) is alive; nothing is written
/// to disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn commit(&self, batch: WriteBatch) -> StorageResult<()> {
        let mut entries = self.entries.write();
        for (key, value) in batch.into_ops() {
            match value {
                Some(bytes) => {
                    entries.insert(key, bytes);
                }
                None => {
                    entries.remove(&key);
                }
            }
        }
        Ok(())
    }
}
