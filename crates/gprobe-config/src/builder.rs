//! Configuration builder

use crate::types::{ProbeConfig, TlsFlags};
use crate::validator::{resolve_tls_mode, validate_args, validate_timeout};
use gprobe_core::{Error, Result, Target, DEFAULT_TIMEOUT};
use std::time::Duration;

/// Builder for constructing a [`ProbeConfig`] from raw command-line values
#[derive(Debug, Default)]
pub struct ProbeConfigBuilder {
    target: Option<String>,
    service: Option<String>,
    timeout: Option<Duration>,
    no_fail: bool,
    tls: TlsFlags,
}

impl ProbeConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set target and service from positional arguments
    pub fn args(mut self, args: &[String]) -> Result<Self> {
        let (target, service) = validate_args(args)?;
        self.target = Some(target.to_string());
        self.service = Some(service.to_string());
        Ok(self)
    }

    /// Set target address
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set service name
    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Set operation timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Do not fail on non-SERVING status
    pub fn no_fail(mut self, no_fail: bool) -> Self {
        self.no_fail = no_fail;
        self
    }

    /// Set raw TLS selections
    pub fn tls_flags(mut self, flags: TlsFlags) -> Self {
        self.tls = flags;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<ProbeConfig> {
        let target = self
            .target
            .ok_or_else(|| Error::usage("target address is required"))?;
        let target = Target::parse(&target)?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        validate_timeout(timeout)?;

        let tls = resolve_tls_mode(&self.tls)?;

        Ok(ProbeConfig {
            target,
            service: self.service.unwrap_or_default(),
            timeout,
            no_fail: self.no_fail,
            tls,
        })
    }
}
