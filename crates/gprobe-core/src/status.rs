//! Serving status reported by a health endpoint

use std::fmt;

/// Serving status as defined by `grpc.health.v1.HealthCheckResponse.ServingStatus`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthStatus {
    /// Status is not known
    Unknown,
    /// Process or service is serving traffic
    Serving,
    /// Process or service is not serving traffic
    NotServing,
    /// The named service has no registered health status (Watch only)
    ServiceUnknown,
}

impl HealthStatus {
    /// Canonical upper-case name, as printed on stdout
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Unknown => "UNKNOWN",
            HealthStatus::Serving => "SERVING",
            HealthStatus::NotServing => "NOT_SERVING",
            HealthStatus::ServiceUnknown => "SERVICE_UNKNOWN",
        }
    }

    /// Whether the status passes the health threshold
    pub fn is_serving(&self) -> bool {
        matches!(self, HealthStatus::Serving)
    }
}

impl From<i32> for HealthStatus {
    /// Decode the wire value; values outside the enum decode to `Unknown`.
    fn from(value: i32) -> Self {
        match value {
            1 => HealthStatus::Serving,
            2 => HealthStatus::NotServing,
            3 => HealthStatus::ServiceUnknown,
            _ => HealthStatus::Unknown,
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
