//! Key-value capability used to persist and restore sequence snapshots.
//!
//! The core only ever needs `get` and `set` on string values, so the trait is
//! kept that narrow. `MemoryStore` is the in-process implementation used by
//! tests and by anything that wants persistence without an external cache.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

/// Error type for snapshot store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The backing store answered with an error.
    #[error("store error: {0}")]
    Backend(String),

    /// The operation did not finish in time.
    #[error("store operation timed out after {0:?}")]
    Timeout(Duration),

    /// A stored value is not a valid snapshot.
    #[error("invalid snapshot {0:?}")]
    InvalidSnapshot(String),
}

/// Minimal get/set capability over a string key-value store.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Fetch the value stored under `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key` with no expiry.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory snapshot store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.lock().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Current value under `key`, read synchronously.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
