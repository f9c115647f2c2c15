//! Configuration types

use gprobe_core::{Deadline, Target};
use std::path::PathBuf;
use std::time::Duration;

/// Validated configuration for one probe invocation
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeConfig {
    /// Address of the process being probed
    pub target: Target,

    /// Service to check; empty means the process as a whole
    pub service: String,

    /// Budget covering connect and query
    pub timeout: Duration,

    /// Treat any retrieved status as healthy
    pub no_fail: bool,

    /// Transport security
    pub tls: TlsMode,
}

impl ProbeConfig {
    /// Start the invocation clock
    pub fn deadline(&self) -> Deadline {
        Deadline::after(self.timeout)
    }
}

/// Transport security mode. Exactly one is active per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TlsMode {
    /// No TLS
    #[default]
    Plaintext,
    /// TLS verified against the system's native roots
    SystemRoots,
    /// TLS verified against the certificates in a PEM file
    CaFile(PathBuf),
    /// TLS verified against the PEM files found under a directory
    CaPath(PathBuf),
    /// TLS accepting any server certificate
    Insecure,
}

impl TlsMode {
    /// Whether the mode negotiates TLS at all
    pub fn is_tls(&self) -> bool {
        !matches!(self, TlsMode::Plaintext)
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            TlsMode::Plaintext => "plaintext",
            TlsMode::SystemRoots => "tls",
            TlsMode::CaFile(_) => "tls-cafile",
            TlsMode::CaPath(_) => "tls-capath",
            TlsMode::Insecure => "tls-insecure",
        }
    }
}

/// Raw TLS selections as given on the command line.
///
/// Empty paths count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsFlags {
    /// `--tls`
    pub tls: bool,
    /// `--tls-insecure`
    pub insecure: bool,
    /// `--tls-cafile`
    pub ca_file: Option<PathBuf>,
    /// `--tls-capath`
    pub ca_path: Option<PathBuf>,
}

impl TlsFlags {
    pub(crate) fn ca_file(&self) -> Option<&PathBuf> {
        self.ca_file.as_ref().filter(|p| !p.as_os_str().is_empty())
    }

    pub(crate) fn ca_path(&self) -> Option<&PathBuf> {
        self.ca_path.as_ref().filter(|p| !p.as_os_str().is_empty())
    }

    /// Number of mutually exclusive TLS selections made
    pub fn count(&self) -> usize {
        [
            self.tls,
            self.insecure,
            self.ca_file().is_some(),
            self.ca_path().is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_count_ignores_empty_paths() {
        let flags = TlsFlags {
            ca_file: Some(PathBuf::new()),
            ca_path: Some(PathBuf::from("")),
            ..Default::default()
        };
        assert_eq!(flags.count(), 0);

        let flags = TlsFlags {
            tls: true,
            insecure: true,
            ca_file: Some(PathBuf::from("/etc/ca.pem")),
            ca_path: Some(PathBuf::from("/etc/certs")),
        };
        assert_eq!(flags.count(), 4);
    }

    #[test]
    fn test_tls_mode_names() {
        assert!(!TlsMode::Plaintext.is_tls());
        assert!(TlsMode::Insecure.is_tls());
        assert_eq!(TlsMode::CaFile(PathBuf::from("a")).name(), "tls-cafile");
    }
}
