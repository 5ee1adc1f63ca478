//! The persisted witness record and its membership operations

use crate::error::{RegistryError, Result};
use crate::ledger::Ledger;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed store key the registry record lives under.
pub const REGISTRY_KEY: &str = "keeper";

/// The single persisted record: content hash -> ordered witness list.
///
/// Serializes as a JSON object of string arrays (`{"h1":["alice","bob"]}`),
/// the compatibility format for stores populated by earlier deployments.
/// The map is ordered so encoding is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    entries: BTreeMap<String, Vec<String>>,
}

impl Registry {
    /// Check whether `user` has been recorded for `hash`.
    pub fn contains(&self, hash: &str, user: &str) -> bool {
        self.entries
            .get(hash)
            .map(|members| members.iter().any(|m| m == user))
            .unwrap_or(false)
    }

    /// Append `user` to `hash`'s member list unless already present.
    ///
    /// Duplicates are prevented by a linear equality scan, so insertion
    /// order is preserved. Returns whether a new member was appended.
    pub fn record(&mut self, hash: &str, user: &str) -> bool {
        let members = self.entries.entry(hash.to_string()).or_default();
        if members.iter().any(|m| m == user) {
            return false;
        }
        members.push(user.to_string());
        true
    }

    /// Member list recorded for `hash`, if any.
    pub fn members(&self, hash: &str) -> Option<&[String]> {
        self.entries.get(hash).map(|m| m.as_slice())
    }
}

/// Outcome of a membership operation.
///
/// Operations report a tagged outcome; the single-byte wire encoding is
/// applied only at the dispatch boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipResult {
    /// A new member was appended and the record written back
    Added,
    /// The member was already recorded; nothing was written
    NoOp,
    /// The member is recorded for the hash
    Found,
    /// The member is not recorded for the hash
    NotFound,
}

/// Membership registry over an injected ledger handle.
///
/// Each operation is a single sequential unit of work: one wholesale read
/// of the record and, for mutations, one wholesale write back. The
/// read-modify-write in [`record_membership`] is not atomic from this
/// component's view; serializing conflicting writes to the registry key is
/// the hosting store's concern, and interleaved cycles can lose an update.
///
/// [`record_membership`]: MembershipRegistry::record_membership
pub struct MembershipRegistry<L> {
    ledger: L,
}

impl<L: Ledger> MembershipRegistry<L> {
    /// Create a registry over the given ledger handle.
    pub fn new(ledger: L) -> Self {
        Self { ledger }
    }

    /// Write an empty record under [`REGISTRY_KEY`].
    ///
    /// Idempotent overwrite: prior registry content is discarded.
    pub fn initialize(&self) -> Result<()> {
        self.store(&Registry::default())
    }

    /// Record that `user` has witnessed `hash`.
    ///
    /// Returns [`MembershipResult::NoOp`] without writing back when the
    /// user is already recorded, [`MembershipResult::Added`] after the
    /// full record has been written otherwise.
    pub fn record_membership(&self, hash: &str, user: &str) -> Result<MembershipResult> {
        let mut registry = self.load()?;
        if !registry.record(hash, user) {
            return Ok(MembershipResult::NoOp);
        }
        self.store(&registry)?;
        Ok(MembershipResult::Added)
    }

    /// Check whether `user` has witnessed `hash`. Read-only.
    pub fn query_membership(&self, hash: &str, user: &str) -> Result<MembershipResult> {
        let registry = self.load()?;
        Ok(if registry.contains(hash, user) {
            MembershipResult::Found
        } else {
            MembershipResult::NotFound
        })
    }

    /// Delete an arbitrary top-level store key.
    ///
    /// The key named by the caller is removed as-is; it may or may not be
    /// the registry key itself.
    pub fn delete_key(&self, key: &str) -> Result<()> {
        self.ledger.delete(key).map_err(RegistryError::Delete)
    }

    /// Read and decode the record.
    ///
    /// Decodes exactly the bytes the store returned: an absent key yields
    /// zero bytes and fails with [`RegistryError::Deserialize`], so reading
    /// a deleted or never-initialized registry is an error.
    fn load(&self) -> Result<Registry> {
        let bytes = self
            .ledger
            .get(REGISTRY_KEY)
            .map_err(RegistryError::Read)?
            .unwrap_or_default();
        serde_json::from_slice(&bytes).map_err(RegistryError::Deserialize)
    }

    /// Encode and write the full record.
    fn store(&self, registry: &Registry) -> Result<()> {
        let bytes = serde_json::to_vec(registry).map_err(RegistryError::Serialize)?;
        self.ledger.put(REGISTRY_KEY, &bytes).map_err(RegistryError::Write)
    }
}
