//! Operation deadline shared by the connect and query phases

use std::time::Duration;
use tokio::time::Instant;

/// Default operation timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Longest timeout a deadline is clamped to (roughly 30 years)
pub const MAX_TIMEOUT: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Absolute point in time bounding a whole invocation.
///
/// Computed once when the invocation starts; every phase derives its budget
/// from [`Deadline::remaining`] instead of arming a fresh timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// Deadline `timeout` from now, or `None` if that instant is not representable
    pub fn checked_after(timeout: Duration) -> Option<Self> {
        Instant::now().checked_add(timeout).map(|at| Self { at })
    }

    /// Deadline `timeout` from now.
    ///
    /// Timeouts past the clock's range are clamped to [`MAX_TIMEOUT`].
    pub fn after(timeout: Duration) -> Self {
        Self::checked_after(timeout)
            .or_else(|| Self::checked_after(MAX_TIMEOUT))
            .unwrap_or_else(|| Self { at: Instant::now() })
    }

    /// The absolute instant
    pub fn instant(&self) -> Instant {
        self.at
    }

    /// Time left until the deadline, zero once it has passed
    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }
}
