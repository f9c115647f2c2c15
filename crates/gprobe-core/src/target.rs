//! Probe target address

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Network address of the process being probed, in `host:port` form.
///
/// IPv6 literals must be bracketed (`[::1]:50051`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    host: String,
    port: u16,
}

impl Target {
    /// Parse a `host:port` address
    pub fn parse(address: &str) -> Result<Self> {
        let address = address.trim();
        if address.is_empty() {
            return Err(Error::usage("target address cannot be empty"));
        }

        let (host, port) = if let Some(rest) = address.strip_prefix('[') {
            let (host, port) = rest
                .split_once("]:")
                .ok_or_else(|| invalid(address, "missing port in address"))?;
            (host, port)
        } else {
            let (host, port) = address
                .rsplit_once(':')
                .ok_or_else(|| invalid(address, "missing port in address"))?;
            if host.contains(':') {
                return Err(invalid(address, "IPv6 hosts must be enclosed in brackets"));
            }
            (host, port)
        };

        if host.is_empty() {
            return Err(invalid(address, "missing host in address"));
        }

        let port = port
            .parse::<u16>()
            .map_err(|_| invalid(address, "invalid port"))?;

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }

    /// Host part, without IPv6 brackets
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port part
    pub fn port(&self) -> u16 {
        self.port
    }

    /// `host:port` authority, bracketing IPv6 hosts
    pub fn authority(&self) -> String {
        self.to_string()
    }
}

fn invalid(address: &str, reason: &str) -> Error {
    Error::usage(format!("invalid target address {address:?}: {reason}"))
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}
