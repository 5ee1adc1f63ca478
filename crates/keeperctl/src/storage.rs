//! Persistent ledger backend using sled

use keeper_core::ledger::{BackendError, Ledger};
use sled::Db;
use std::path::Path;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("sled error: {0}")]
    Sled(#[from] sled::Error),
}

/// Durable ledger for keeperctl
///
/// Registry state lives in a single named tree; clones share the same
/// underlying database handle.
#[derive(Clone)]
pub struct SledLedger {
    db: Db,
    /// State tree: store key -> record bytes
    state: sled::Tree,
}

impl SledLedger {
    /// Open the ledger at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db = sled::open(path)?;
        let state = db.open_tree("state")?;

        Ok(Self { db, state })
    }

    /// Flush all pending writes
    pub fn flush(&self) -> Result<(), StorageError> {
        self.db.flush()?;
        Ok(())
    }
}

impl Ledger for SledLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError> {
        Ok(self.state.get(key)?.map(|v| v.to_vec()))
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), BackendError> {
        self.state.insert(key, value)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), BackendError> {
        self.state.remove(key)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keeper_core::{MembershipRegistry, RegistryError, REGISTRY_KEY};
    use tempfile::tempdir;

    #[test]
    fn test_ledger_roundtrip() {
        let dir = tempdir().unwrap();
        let ledger = SledLedger::open(dir.path()).unwrap();

        assert_eq!(ledger.get("k").unwrap(), None);

        ledger.put("k", b"value").unwrap();
        assert_eq!(ledger.get("k").unwrap(), Some(b"value".to_vec()));

        ledger.delete("k").unwrap();
        assert_eq!(ledger.get("k").unwrap(), None);
    }

    #[test]
    fn test_registry_scenario_over_sled() {
        let dir = tempdir().unwrap();
        let ledger = SledLedger::open(dir.path()).unwrap();
        let registry = MembershipRegistry::new(ledger.clone());

        registry.init("init", &[]).unwrap();

        let two = |a: &str, b: &str| vec![a.to_string(), b.to_string()];

        assert_eq!(registry.invoke("invoke", &two("h1", "alice")).unwrap(), [1]);
        assert_eq!(registry.invoke("invoke", &two("h1", "alice")).unwrap(), [0]);
        assert_eq!(registry.invoke("invoke", &two("h1", "bob")).unwrap(), [1]);
        assert_eq!(registry.query("query", &two("h1", "alice")).unwrap(), [1]);
        assert_eq!(registry.query("query", &two("h1", "carol")).unwrap(), [0]);

        ledger.flush().unwrap();
    }

    #[test]
    fn test_query_after_delete_fails_over_sled() {
        let dir = tempdir().unwrap();
        let ledger = SledLedger::open(dir.path()).unwrap();
        let registry = MembershipRegistry::new(ledger);

        registry.init("init", &[]).unwrap();
        registry
            .invoke("delete", &[REGISTRY_KEY.to_string()])
            .unwrap();

        let two = vec!["h1".to_string(), "alice".to_string()];
        assert!(matches!(
            registry.query("query", &two),
            Err(RegistryError::Deserialize(_))
        ));
    }
}
