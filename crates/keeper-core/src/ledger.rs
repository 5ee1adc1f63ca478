//! Key-value ledger abstraction
//!
//! The registry never talks to a concrete store: every operation goes
//! through [`Ledger`], and hosts inject whichever backend they run on.
//! [`MemoryLedger`] is the in-process implementation used by tests and
//! embedders.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Opaque failure reported by a ledger backend.
///
/// The registry does not interpret backend failures; it only classifies
/// them by the operation that failed (read, write, or delete).
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// External key-value collaborator: three primitives, no transactions,
/// no range queries, no versioning.
pub trait Ledger {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &[u8]) -> Result<(), BackendError>;

    /// Remove `key` from the store. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), BackendError>;
}

/// In-process ledger over a shared map.
///
/// Clones share the same underlying state, so a test can keep a handle
/// while the registry owns another.
#[derive(Clone, Default)]
pub struct MemoryLedger {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `key` currently holds a value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }
}

impl Ledger for MemoryLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), BackendError> {
        self.entries.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), BackendError> {
        self.entries.write().remove(key);
        Ok(())
    }
}
