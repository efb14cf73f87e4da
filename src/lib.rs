//! # VaultDB
//!
//! Existence-gated key-value service core with an HTTP-shaped boundary.
//!
//! VaultDB is the orchestration layer between a network edge and a
//! storage backend: it validates input, enforces existence invariants
//! before any mutation, and carries a small, frozen error taxonomy from
//! the backend all the way to the caller.
//!
//! ## Quick Start
//!
//! ```
//! use vaultdb::prelude::*;
//! use std::sync::Arc;
//!
//! let engine = KvEngine::new(Arc::new(MemoryStore::new()));
//! let router = Router::new(engine);
//!
//! let response = router.dispatch(&ApiRequest::with_body(
//!     Method::Post,
//!     "/kv",
//!     r#"{"key":"user:1","value":{"name":"Alice"}}"#,
//! ));
//! assert!(response.status.is_success());
//! ```
//!
//! ## Layers
//!
//! - [`Record`], [`Error`], [`Deadline`] — shared vocabulary (`vault-core`)
//! - [`ValueStore`], [`MemoryStore`] — the storage capability (`vault-store`)
//! - [`KvEngine`] — validation and existence gating (`vault-engine`)
//! - [`Router`] — the request/response boundary (`vault-api`)
//!
//! The engine never trusts backend-specific error codes: existence is
//! verified before every mutation, and a failing existence check is a
//! backend failure, never "key does not exist".

#![warn(missing_docs)]

pub mod prelude;

pub use vault_api::{ApiRequest, ApiResponse, Method, Router, StatusCode};
pub use vault_core::{BackendError, BackendErrorKind, Deadline, Error, Record, Result};
pub use vault_engine::{EngineConfig, KvEngine};
pub use vault_store::{MemoryStore, StoreResult, ValueStore};
