//! Orchestration engine for the Vault key-value service.
//!
//! [`KvEngine`] sits between the request/response boundary and the
//! [`ValueStore`] capability. It enforces input validity and existence
//! invariants before any mutation reaches the backend, and classifies
//! every backend failure into the canonical error taxonomy.
//!
//! ## Existence gating
//!
//! Backend mutation primitives have backend-specific semantics on
//! missing or present keys, so the engine imposes a uniform
//! existence-gated contract instead of trusting backend error codes:
//! existence is always verified before mutation, and a failure of the
//! existence check itself is never conflated with "key does not exist".
//!
//! The pre-check is an early exit, not a correctness guarantee. A create
//! race that slips past a stale pre-check is resolved by the backend's
//! primary-key uniqueness enforcement and classified as `AlreadyExists`
//! via the `DuplicateKey` hint.
//!
//! ## State machine per key
//!
//! ```text
//! Absent --create--> Present --delete--> Absent
//!                    Present --update--> Present
//! ```
//!
//! Any operation attempted from the wrong state fails with the named
//! error and leaves state unchanged.

mod config;

pub use config::{EngineConfig, OP_TIMEOUT_ENV};

use std::sync::Arc;

use vault_core::{BackendError, Deadline, Error, Record, Result};
use vault_store::ValueStore;

/// The validation and invariant-enforcing layer between the boundary and
/// the storage backend.
///
/// Stateless per request: holds no in-process mutable state, performs no
/// locking and no internal retries. Serialization of concurrent
/// mutations to one key is delegated to the store.
pub struct KvEngine {
    store: Arc<dyn ValueStore>,
    config: EngineConfig,
}

impl KvEngine {
    /// Create an engine over the given store with default configuration.
    pub fn new(store: Arc<dyn ValueStore>) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    /// Create an engine with explicit configuration.
    pub fn with_config(store: Arc<dyn ValueStore>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// The store capability this engine was constructed with.
    pub fn store(&self) -> &Arc<dyn ValueStore> {
        &self.store
    }

    /// Create a new record.
    ///
    /// Fails with `InvalidInput` if key or value is empty (the store is
    /// never invoked), `AlreadyExists` if the key is present, and
    /// `BackendUnavailable` if the store cannot answer.
    pub fn create(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        validate_value(value)?;

        let deadline = self.deadline();
        if self.check_exists("create", key, deadline)? {
            return Err(Error::AlreadyExists(key.to_string()));
        }

        match self.store.insert(Record::new(key, value), deadline) {
            Ok(()) => {
                tracing::info!(operation = "create", key, "record created");
                Ok(())
            }
            // Lost a create race: the pre-check was stale and the
            // backend's uniqueness enforcement is authoritative.
            Err(e) if e.is_duplicate_key() => {
                tracing::info!(operation = "create", key, "duplicate insert rejected by backend");
                Err(Error::AlreadyExists(key.to_string()))
            }
            Err(e) => Err(classify("create", key, e)),
        }
    }

    /// Fetch the record stored under `key`.
    ///
    /// Fails with `InvalidInput` on an empty key, `NotFound` if the key
    /// is absent, and `BackendUnavailable` on any backend failure along
    /// the path.
    pub fn get(&self, key: &str) -> Result<Record> {
        validate_key(key)?;

        let deadline = self.deadline();
        if !self.check_exists("get", key, deadline)? {
            return Err(Error::NotFound(key.to_string()));
        }

        match self.store.get(key, deadline) {
            Ok(Some(record)) => Ok(record),
            // Deleted between the existence check and the read.
            Ok(None) => Err(Error::NotFound(key.to_string())),
            Err(e) => Err(classify("get", key, e)),
        }
    }

    /// Replace the value stored under `key` wholesale.
    ///
    /// Fails with `InvalidInput` if key or value is empty (the store is
    /// never invoked), `NotFound` if the key is absent, and
    /// `BackendUnavailable` on backend failure. No other record is
    /// touched.
    pub fn update(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        validate_value(value)?;

        let deadline = self.deadline();
        if !self.check_exists("update", key, deadline)? {
            return Err(Error::NotFound(key.to_string()));
        }

        match self.store.update(key, value, deadline) {
            Ok(()) => {
                tracing::info!(operation = "update", key, "record updated");
                Ok(())
            }
            Err(e) => Err(classify("update", key, e)),
        }
    }

    /// Remove the record stored under `key`.
    ///
    /// Deletion is final: a second delete of the same key
    /// deterministically yields `NotFound`, never a silent success, and
    /// the key becomes available for reinsertion.
    pub fn delete(&self, key: &str) -> Result<()> {
        validate_key(key)?;

        let deadline = self.deadline();
        if !self.check_exists("delete", key, deadline)? {
            return Err(Error::NotFound(key.to_string()));
        }

        match self.store.delete(key, deadline) {
            Ok(()) => {
                tracing::info!(operation = "delete", key, "record deleted");
                Ok(())
            }
            Err(e) => Err(classify("delete", key, e)),
        }
    }

    /// All records currently stored, in unspecified order.
    pub fn list(&self) -> Result<Vec<Record>> {
        match self.store.scan(self.deadline()) {
            Ok(records) => Ok(records),
            Err(e) => Err(classify("list", "*", e)),
        }
    }

    fn deadline(&self) -> Deadline {
        Deadline::within(self.config.op_timeout)
    }

    /// Existence pre-check. A failure here is a backend failure, never
    /// "key does not exist".
    fn check_exists(&self, operation: &'static str, key: &str, deadline: Deadline) -> Result<bool> {
        self.store
            .exists(key, deadline)
            .map_err(|e| classify(operation, key, e))
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::InvalidInput("key cannot be empty".to_string()));
    }
    Ok(())
}

fn validate_value(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidInput("value cannot be empty".to_string()));
    }
    Ok(())
}

/// Log a backend failure with its operation and key context, then
/// classify it for the boundary. The backend reason travels on the error
/// for logging but is never surfaced to callers verbatim.
fn classify(operation: &'static str, key: &str, err: BackendError) -> Error {
    tracing::error!(operation, key, reason = %err, "backend call failed");
    Error::BackendUnavailable {
        operation,
        key: key.to_string(),
        reason: err.reason,
    }
}
