//! Core types for the Vault key-value service.
//!
//! This crate defines the vocabulary shared by every layer:
//! - [`Record`]: the sole persisted entity, a (key, value) pair
//! - [`Error`]: the canonical error taxonomy crossing layer boundaries
//! - [`BackendError`]: the opaque failure shape a storage backend reports
//! - [`Deadline`]: the time bound every backend call must respect

pub mod deadline;
pub mod error;
pub mod types;

pub use deadline::Deadline;
pub use error::{BackendError, BackendErrorKind, Error, Result};
pub use types::Record;
