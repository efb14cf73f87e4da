//! Error taxonomy for the key-value service.
//!
//! Two error shapes live here:
//!
//! - [`Error`]: the canonical taxonomy that crosses into the boundary
//!   layer. Downstream code matches on the variant, never on message text.
//! - [`BackendError`]: the opaque failure a storage backend reports. The
//!   engine assumes nothing about it beyond succeeded vs failed, with one
//!   exception: a [`BackendErrorKind::DuplicateKey`] hint lets a lost
//!   create race be classified as `AlreadyExists` instead of a generic
//!   backend failure.
//!
//! ## Error Codes (Canonical)
//!
//! These codes are frozen and must not change:
//!
//! | Code | Description |
//! |------|-------------|
//! | InvalidInput | Caller-supplied key or value failed a structural precondition |
//! | AlreadyExists | Create attempted on a key already present |
//! | NotFound | Get/Update/Delete attempted on a key not present |
//! | BackendUnavailable | The store could not complete the operation |

use thiserror::Error;

/// All service errors.
///
/// The first three variants are domain failures: deterministic functions
/// of current state and input, safe to surface verbatim to the caller.
/// `BackendUnavailable` is an infrastructure failure; it carries the
/// operation and key for logging and is never downgraded to `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Caller-supplied key or value failed a structural precondition
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Create attempted on a key already present
    #[error("key '{0}' already exists")]
    AlreadyExists(String),

    /// Get/Update/Delete attempted on a key not present
    #[error("key '{0}' not found")]
    NotFound(String),

    /// The store could not complete the requested operation
    #[error("backend unavailable during {operation} on '{key}': {reason}")]
    BackendUnavailable {
        /// The engine operation that was in flight
        operation: &'static str,
        /// The key the operation targeted
        key: String,
        /// Backend-reported reason, for logs only; never shown to callers
        reason: String,
    },
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the canonical error code.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) => "InvalidInput",
            Error::AlreadyExists(_) => "AlreadyExists",
            Error::NotFound(_) => "NotFound",
            Error::BackendUnavailable { .. } => "BackendUnavailable",
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is a caller error (deterministic domain failure).
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, Error::BackendUnavailable { .. })
    }

    /// Check if this error is retryable.
    ///
    /// A backend failure leaves the outcome unknown; the caller may retry
    /// with fresh state. Domain failures are deterministic and will not
    /// change on retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::BackendUnavailable { .. })
    }
}

/// Coarse classification of a backend failure.
///
/// Backends are not trusted to report structured error codes; these kinds
/// are the only distinctions the engine ever acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendErrorKind {
    /// Connectivity loss, malformed response, or any unclassified failure
    Unavailable,
    /// The call's deadline expired before the backend answered
    Timeout,
    /// Primary-key uniqueness rejected an insert
    DuplicateKey,
}

/// Opaque failure reported by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct BackendError {
    /// Coarse failure classification
    pub kind: BackendErrorKind,
    /// Backend-specific reason text, for logging only
    pub reason: String,
}

impl BackendError {
    /// An unclassified backend failure.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            kind: BackendErrorKind::Unavailable,
            reason: reason.into(),
        }
    }

    /// A deadline-expiry failure.
    pub fn timeout(reason: impl Into<String>) -> Self {
        Self {
            kind: BackendErrorKind::Timeout,
            reason: reason.into(),
        }
    }

    /// A primary-key uniqueness rejection.
    pub fn duplicate_key(key: &str) -> Self {
        Self {
            kind: BackendErrorKind::DuplicateKey,
            reason: format!("duplicate key '{}'", key),
        }
    }

    /// Check if this failure is a primary-key uniqueness rejection.
    pub fn is_duplicate_key(&self) -> bool {
        self.kind == BackendErrorKind::DuplicateKey
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::InvalidInput("x".into()).code(), "InvalidInput");
        assert_eq!(Error::AlreadyExists("k".into()).code(), "AlreadyExists");
        assert_eq!(Error::NotFound("k".into()).code(), "NotFound");
        assert_eq!(
            Error::BackendUnavailable {
                operation: "get",
                key: "k".into(),
                reason: "down".into(),
            }
            .code(),
            "BackendUnavailable"
        );
    }

    #[test]
    fn test_not_found_predicate() {
        assert!(Error::NotFound("k".into()).is_not_found());
        assert!(!Error::AlreadyExists("k".into()).is_not_found());
    }

    #[test]
    fn test_caller_error_split() {
        assert!(Error::InvalidInput("empty key".into()).is_caller_error());
        assert!(Error::AlreadyExists("k".into()).is_caller_error());
        assert!(Error::NotFound("k".into()).is_caller_error());

        let backend = Error::BackendUnavailable {
            operation: "create",
            key: "k".into(),
            reason: "connection refused".into(),
        };
        assert!(!backend.is_caller_error());
        assert!(backend.is_retryable());
    }

    #[test]
    fn test_backend_error_display_carries_reason() {
        let err = BackendError::unavailable("connection reset");
        assert_eq!(format!("{}", err), "connection reset");
    }

    #[test]
    fn test_duplicate_key_detection() {
        assert!(BackendError::duplicate_key("k").is_duplicate_key());
        assert!(!BackendError::timeout("deadline expired").is_duplicate_key());
        assert!(!BackendError::unavailable("down").is_duplicate_key());
    }
}
