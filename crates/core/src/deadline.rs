//! Deadlines bounding backend calls.
//!
//! Every call into a storage backend carries a [`Deadline`]. When it
//! expires the call fails as a backend timeout and the outcome must be
//! treated as unknown-and-retryable, never as success or a domain failure.

use std::time::{Duration, Instant};

/// A monotonic-clock point in time after which a backend call must fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deadline(Instant);

impl Deadline {
    /// Deadline `budget` from now.
    pub fn within(budget: Duration) -> Self {
        Deadline(Instant::now() + budget)
    }

    /// Deadline at an explicit instant.
    pub fn at(instant: Instant) -> Self {
        Deadline(instant)
    }

    /// A deadline that has already passed.
    ///
    /// Useful in tests to force the timeout path deterministically.
    pub fn already_expired() -> Self {
        Deadline(Instant::now() - Duration::from_secs(1))
    }

    /// Check whether the deadline has passed.
    pub fn expired(&self) -> bool {
        Instant::now() >= self.0
    }

    /// Time left before expiry, zero if already expired.
    pub fn remaining(&self) -> Duration {
        self.0.saturating_duration_since(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_future_deadline_not_expired() {
        let deadline = Deadline::within(Duration::from_secs(60));
        assert!(!deadline.expired());
        assert!(deadline.remaining() > Duration::from_secs(59));
    }

    #[test]
    fn test_already_expired() {
        let deadline = Deadline::already_expired();
        assert!(deadline.expired());
        assert_eq!(deadline.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_deadline_at_instant() {
        let instant = Instant::now() + Duration::from_secs(5);
        let deadline = Deadline::at(instant);
        assert!(!deadline.expired());
    }
}
