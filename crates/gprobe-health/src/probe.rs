//! One-shot probe: connect, check, decide

use crate::checker::HealthChecker;
use crate::connector::Connector;
use gprobe_config::ProbeConfig;
use gprobe_core::{decide, HealthStatus, Result, Verdict};
use tracing::debug;

/// Connect to the configured target and retrieve its serving status.
///
/// One deadline is computed up front and shared by both phases. The session
/// is dropped before returning, whatever the outcome.
pub async fn probe(config: &ProbeConfig) -> Result<HealthStatus> {
    let deadline = config.deadline();

    let connector = Connector::new(config.target.clone(), &config.tls)?;
    let session = connector.connect(deadline).await?;

    HealthChecker::new(config.service.as_str())
        .check(&session, deadline)
        .await
}

/// [`probe`] followed by the outcome decision
pub async fn run(config: &ProbeConfig) -> Result<Verdict> {
    debug!(
        target = %config.target,
        service = %config.service,
        tls = config.tls.name(),
        timeout_ms = config.timeout.as_millis() as u64,
        "Starting probe"
    );

    decide(probe(config).await, config.no_fail)
}
