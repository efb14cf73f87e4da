//! Value Store capability for the Vault service.
//!
//! The engine never talks to a concrete backend directly; it is handed a
//! [`ValueStore`] capability at construction. This crate defines that
//! contract and ships [`MemoryStore`], the in-process reference backend.
//!
//! ## Contract
//!
//! - Backends report failure as an opaque [`BackendError`]; callers must
//!   not assume structured error codes beyond succeeded vs failed. The
//!   one optional hint is `DuplicateKey` on insert.
//! - Every call is bounded by the caller-supplied [`Deadline`]. A backend
//!   must fail with a timeout once the deadline has passed.
//! - Backends must enforce primary-key uniqueness on insert and provide
//!   read-after-write consistency for a single key within a session.
//! - Mutation semantics on a missing key are backend-specific; callers
//!   existence-gate update and delete rather than trusting them.

mod memory;

pub use memory::MemoryStore;

use vault_core::{BackendError, Deadline, Record};

/// Result type for backend calls.
pub type StoreResult<T> = std::result::Result<T, BackendError>;

/// Primary-key-indexed storage consumed by the engine.
///
/// Object safe: the engine holds an `Arc<dyn ValueStore>` with explicit
/// lifecycle — built at process start, shared by concurrent callers,
/// dropped at shutdown. Never a process-global singleton.
pub trait ValueStore: Send + Sync {
    /// Insert a new record. Fails with a `DuplicateKey` hint if the key
    /// is already present.
    fn insert(&self, record: Record, deadline: Deadline) -> StoreResult<()>;

    /// Point lookup by key.
    fn get(&self, key: &str, deadline: Deadline) -> StoreResult<Option<Record>>;

    /// Replace the value stored under `key` wholesale.
    fn update(&self, key: &str, value: &str, deadline: Deadline) -> StoreResult<()>;

    /// Remove the record stored under `key`.
    fn delete(&self, key: &str, deadline: Deadline) -> StoreResult<()>;

    /// Existence check for `key`.
    fn exists(&self, key: &str, deadline: Deadline) -> StoreResult<bool>;

    /// All records currently stored, in unspecified order.
    fn scan(&self, deadline: Deadline) -> StoreResult<Vec<Record>>;
}
