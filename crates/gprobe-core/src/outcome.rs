//! Outcome decision and exit statuses

use crate::error::Result;
use crate::status::HealthStatus;

/// Message written to stderr when a status fails the health threshold
pub const HEALTH_CHECK_FAILED: &str = "health-check failed";

/// Process exit status, the contract surface for automation consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Status retrieved and considered healthy
    Healthy,
    /// Bad arguments or flags
    Usage,
    /// Status retrieved but negative
    Unhealthy,
    /// Any other failure
    Failure,
}

impl ExitStatus {
    /// Numeric process exit code
    pub fn code(&self) -> u8 {
        match self {
            ExitStatus::Healthy => 0,
            ExitStatus::Usage => 1,
            ExitStatus::Unhealthy => 2,
            ExitStatus::Failure => 127,
        }
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        std::process::ExitCode::from(status.code())
    }
}

/// Decision for a successfully retrieved status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// SERVING, or any status with the no-fail override
    Healthy(HealthStatus),
    /// Not SERVING and no override requested
    Unhealthy(HealthStatus),
}

impl Verdict {
    /// Apply the threshold to a status
    pub fn decide(status: HealthStatus, no_fail: bool) -> Self {
        if status.is_serving() || no_fail {
            Verdict::Healthy(status)
        } else {
            Verdict::Unhealthy(status)
        }
    }

    /// The status the verdict was made on
    pub fn status(&self) -> HealthStatus {
        match self {
            Verdict::Healthy(status) | Verdict::Unhealthy(status) => *status,
        }
    }

    /// Exit status for this verdict
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            Verdict::Healthy(_) => ExitStatus::Healthy,
            Verdict::Unhealthy(_) => ExitStatus::Unhealthy,
        }
    }
}

/// Fold a probe result into a verdict.
///
/// Errors pass through untouched: the no-fail override never masks a
/// transport or protocol failure.
pub fn decide(result: Result<HealthStatus>, no_fail: bool) -> Result<Verdict> {
    result.map(|status| Verdict::decide(status, no_fail))
}
