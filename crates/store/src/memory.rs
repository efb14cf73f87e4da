//! In-memory Value Store backend.
//!
//! DashMap-backed reference implementation of the [`ValueStore`]
//! capability, used by tests and the CLI.
//!
//! # Thread Safety
//!
//! All operations are thread-safe:
//! - get()/exists(): lock-free reads via DashMap
//! - insert(): entry-based, so two concurrent inserts of the same key
//!   resolve atomically — exactly one wins, the loser gets the
//!   `DuplicateKey` hint
//! - Different keys never contend outside DashMap's internal sharding

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use vault_core::{BackendError, Deadline, Record};

use crate::{StoreResult, ValueStore};

/// In-process reference backend over a `DashMap`.
///
/// Never times out on its own; it only honors deadlines that were already
/// expired on arrival, which keeps the timeout path deterministic for
/// callers and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_deadline(&self, deadline: Deadline, call: &str) -> StoreResult<()> {
        if deadline.expired() {
            tracing::warn!(call, "deadline expired before reaching the store");
            return Err(BackendError::timeout(format!(
                "deadline expired before {}",
                call
            )));
        }
        Ok(())
    }
}

impl ValueStore for MemoryStore {
    fn insert(&self, record: Record, deadline: Deadline) -> StoreResult<()> {
        self.check_deadline(deadline, "insert")?;
        match self.entries.entry(record.key) {
            Entry::Occupied(slot) => Err(BackendError::duplicate_key(slot.key())),
            Entry::Vacant(slot) => {
                slot.insert(record.value);
                Ok(())
            }
        }
    }

    fn get(&self, key: &str, deadline: Deadline) -> StoreResult<Option<Record>> {
        self.check_deadline(deadline, "get")?;
        Ok(self
            .entries
            .get(key)
            .map(|entry| Record::new(key, entry.value().clone())))
    }

    fn update(&self, key: &str, value: &str, deadline: Deadline) -> StoreResult<()> {
        self.check_deadline(deadline, "update")?;
        // No-op on a missing key, matching typical backend update
        // semantics; callers existence-gate this path.
        if let Some(mut entry) = self.entries.get_mut(key) {
            *entry.value_mut() = value.to_string();
        }
        Ok(())
    }

    fn delete(&self, key: &str, deadline: Deadline) -> StoreResult<()> {
        self.check_deadline(deadline, "delete")?;
        self.entries.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str, deadline: Deadline) -> StoreResult<bool> {
        self.check_deadline(deadline, "exists")?;
        Ok(self.entries.contains_key(key))
    }

    fn scan(&self, deadline: Deadline) -> StoreResult<Vec<Record>> {
        self.check_deadline(deadline, "scan")?;
        Ok(self
            .entries
            .iter()
            .map(|entry| Record::new(entry.key().clone(), entry.value().clone()))
            .collect())
    }
}
