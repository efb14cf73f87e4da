//! Convenient imports for VaultDB.
//!
//! Re-exports the most commonly used types so you can get started with a
//! single import:
//!
//! ```
//! use vaultdb::prelude::*;
//! use std::sync::Arc;
//!
//! let engine = KvEngine::new(Arc::new(MemoryStore::new()));
//! assert!(engine.create("key", "1").is_ok());
//! ```

// Engine and configuration
pub use crate::{EngineConfig, KvEngine};

// Storage capability
pub use crate::{MemoryStore, ValueStore};

// Boundary
pub use crate::{ApiRequest, ApiResponse, Method, Router, StatusCode};

// Core types and errors
pub use crate::{Deadline, Error, Record, Result};

// Re-export serde_json for convenience
pub use serde_json::json;
