//! Command-line arguments

use clap::Parser;
use gprobe_config::{ProbeConfig, ProbeConfigBuilder, TlsFlags};
use gprobe_core::Result;
use std::convert::Infallible;
use std::path::PathBuf;
use std::time::Duration;

/// Universal gRPC health-checker
#[derive(Debug, Parser)]
#[command(name = "gprobe")]
#[command(
    about = "Universal gRPC health-checker",
    long_about = "Universal gRPC health-checker. \
                  See https://github.com/grpc/grpc/blob/master/doc/health-checking.md"
)]
#[command(override_usage = "gprobe [OPTIONS] <server_address> [service_name]")]
#[command(version)]
pub struct Cli {
    /// Server address (host:port) and optional service name
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,

    /// Operation timeout
    #[arg(short, long, default_value = "1s", value_parser = humantime::parse_duration)]
    pub timeout: Duration,

    /// Do not fail if service status is other than SERVING
    #[arg(short, long)]
    pub no_fail: bool,

    /// Use TLS, verify server with CA certificates installed on this system
    #[arg(long)]
    pub tls: bool,

    /// Use TLS, do NOT verify server (accept any certificate)
    #[arg(long)]
    pub tls_insecure: bool,

    /// Use TLS, verify server with CA certificate stored in specified file
    #[arg(long, env = "GPROBE_CAFILE", value_name = "FILE", value_parser = lenient_path)]
    pub tls_cafile: Option<PathBuf>,

    /// Use TLS, verify server with CA certificates located under specified path
    #[arg(long, env = "GPROBE_CAPATH", value_name = "DIR", value_parser = lenient_path)]
    pub tls_capath: Option<PathBuf>,

    /// Diagnostic log filter written to stderr (off, error, warn, info, debug, trace)
    #[arg(long, env = "GPROBE_LOG", default_value = "off")]
    pub log_level: String,
}

impl Cli {
    /// Raw TLS selections
    pub fn tls_flags(&self) -> TlsFlags {
        TlsFlags {
            tls: self.tls,
            insecure: self.tls_insecure,
            ca_file: self.tls_cafile.clone(),
            ca_path: self.tls_capath.clone(),
        }
    }

    /// Validate into a probe configuration
    pub fn to_config(&self) -> Result<ProbeConfig> {
        ProbeConfigBuilder::new()
            .args(&self.args)?
            .timeout(self.timeout)
            .no_fail(self.no_fail)
            .tls_flags(self.tls_flags())
            .build()
    }
}

// Empty paths stay representable; they are treated as unset later.
fn lenient_path(value: &str) -> std::result::Result<PathBuf, Infallible> {
    Ok(PathBuf::from(value))
}
