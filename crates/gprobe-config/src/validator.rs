//! Configuration validation

use crate::types::{TlsFlags, TlsMode};
use gprobe_core::{Deadline, Error, Result};
use std::time::Duration;

/// Message for conflicting TLS selections
pub const TLS_CONFLICT: &str =
    "at most one of --tls, --tls-insecure, --tls-cafile and --tls-capath is allowed";

/// Resolve the raw TLS flags into a single mode.
///
/// Runs before any network activity; more than one selection is a usage error.
pub fn resolve_tls_mode(flags: &TlsFlags) -> Result<TlsMode> {
    if flags.count() > 1 {
        return Err(Error::usage(TLS_CONFLICT));
    }

    let mode = if flags.tls {
        TlsMode::SystemRoots
    } else if flags.insecure {
        tracing::warn!("TLS certificate verification is disabled");
        TlsMode::Insecure
    } else if let Some(path) = flags.ca_file() {
        TlsMode::CaFile(path.clone())
    } else if let Some(path) = flags.ca_path() {
        TlsMode::CaPath(path.clone())
    } else {
        TlsMode::Plaintext
    };

    Ok(mode)
}

/// Validate the operation timeout
pub fn validate_timeout(timeout: Duration) -> Result<()> {
    if timeout.is_zero() {
        return Err(Error::usage("timeout must be > 0"));
    }

    if Deadline::checked_after(timeout).is_none() {
        return Err(Error::usage(format!("timeout {timeout:?} is too large")));
    }

    if timeout > Duration::from_secs(300) {
        tracing::warn!("timeout is very high (>5 minutes)");
    }

    Ok(())
}

/// Validate positional arguments: exactly a target and an optional service
pub fn validate_args(args: &[String]) -> Result<(&str, &str)> {
    match args {
        [target] => Ok((target.as_str(), "")),
        [target, service] => Ok((target.as_str(), service.as_str())),
        _ => Err(Error::usage("exactly 1 to 2 arguments are required")),
    }
}
