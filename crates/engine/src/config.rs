//! Engine configuration.
//!
//! A plain builder-style config struct; process-level configuration
//! loading stays outside the engine, which only sees the resolved values.

use std::time::Duration;

/// Environment variable overriding the per-operation timeout, in ms.
pub const OP_TIMEOUT_ENV: &str = "VAULT_OP_TIMEOUT_MS";

const DEFAULT_OP_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for [`KvEngine`](crate::KvEngine).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use vault_engine::EngineConfig;
///
/// let config = EngineConfig::new().op_timeout(Duration::from_millis(500));
/// assert_eq!(config.op_timeout, Duration::from_millis(500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Budget for one engine operation, covering every backend call on
    /// its path. On expiry the operation fails as `BackendUnavailable`.
    pub op_timeout: Duration,
}

impl EngineConfig {
    /// Create a config with defaults (5s operation timeout).
    pub fn new() -> Self {
        Self {
            op_timeout: DEFAULT_OP_TIMEOUT,
        }
    }

    /// Set the per-operation timeout.
    pub fn op_timeout(mut self, timeout: Duration) -> Self {
        self.op_timeout = timeout;
        self
    }

    /// Build a config from the environment.
    ///
    /// Reads `VAULT_OP_TIMEOUT_MS`; unset or unparseable values fall back
    /// to the default.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(raw) = std::env::var(OP_TIMEOUT_ENV) {
            match raw.parse::<u64>() {
                Ok(ms) => config.op_timeout = Duration::from_millis(ms),
                Err(_) => {
                    tracing::warn!(value = %raw, "ignoring unparseable {}", OP_TIMEOUT_ENV);
                }
            }
        }
        config
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
