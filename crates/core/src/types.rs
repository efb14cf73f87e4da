//! Core types for the key-value service.
//!
//! This module defines [`Record`], the sole entity the service persists.

use serde::{Deserialize, Serialize};

/// A (key, value) pair persisted in the store.
///
/// - `key` is non-empty past the boundary layer, immutable once created,
///   and unique across the store (primary identity).
/// - `value` is the raw text of a syntactically valid JSON document.
///   Validity is checked at the boundary; every layer below treats it as
///   an opaque string and never parses or interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Primary identity of the record
    pub key: String,
    /// Opaque JSON payload, replaced wholesale on update
    pub value: String,
}

impl Record {
    /// Create a new record.
    ///
    /// # Examples
    ///
    /// ```
    /// use vault_core::Record;
    ///
    /// let record = Record::new("user:1", r#"{"name":"Alice"}"#);
    /// assert_eq!(record.key, "user:1");
    /// ```
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
