//! Health query engine

use crate::classify::{classify, DEADLINE_EXCEEDED};
use crate::connector::Session;
use gprobe_core::{Deadline, Error, HealthStatus, Result};
use std::time::Instant;
use tokio::time::timeout_at;
use tonic::Request;
use tonic_health::pb::health_client::HealthClient;
use tonic_health::pb::HealthCheckRequest;
use tracing::{debug, warn};

/// Issues `grpc.health.v1.Health/Check` for one service
#[derive(Debug, Clone, Default)]
pub struct HealthChecker {
    service: String,
}

impl HealthChecker {
    /// Checker for `service`; an empty name checks the process as a whole
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    /// Service name sent in the request
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Perform exactly one check over `session`, bounded by what is left of `deadline`
    pub async fn check(&self, session: &Session, deadline: Deadline) -> Result<HealthStatus> {
        let remaining = deadline.remaining();
        if remaining.is_zero() {
            warn!(service = %self.service, "Deadline elapsed before health check");
            return Err(Error::Rpc(DEADLINE_EXCEEDED.to_string()));
        }

        let mut client = HealthClient::new(session.channel());
        let mut request = Request::new(HealthCheckRequest {
            service: self.service.clone(),
        });
        request.set_timeout(remaining);

        let start = Instant::now();
        debug!(
            target = %session.target(),
            service = %self.service,
            budget_ms = remaining.as_millis() as u64,
            "Performing gRPC health check"
        );

        match timeout_at(deadline.instant(), client.check(request)).await {
            Ok(Ok(response)) => {
                let status = HealthStatus::from(response.into_inner().status);
                debug!(
                    service = %self.service,
                    status = %status,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Health check completed"
                );
                Ok(status)
            }
            Ok(Err(status)) => {
                warn!(
                    service = %self.service,
                    code = ?status.code(),
                    grpc_message = status.message(),
                    "Health check failed"
                );
                Err(classify(&status, &self.service))
            }
            Err(_) => {
                warn!(service = %self.service, "Health check failed: timeout");
                Err(Error::Rpc(DEADLINE_EXCEEDED.to_string()))
            }
        }
    }
}
