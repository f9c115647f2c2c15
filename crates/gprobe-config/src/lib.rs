//! # gprobe Configuration
//!
//! Turns raw command-line values into a validated [`ProbeConfig`]:
//! - Positional argument checks
//! - TLS mode resolution (at most one mode)
//! - Timeout validation
//! - Default values

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod builder;
pub mod types;
pub mod validator;

pub use builder::ProbeConfigBuilder;
pub use types::{ProbeConfig, TlsFlags, TlsMode};
pub use validator::{resolve_tls_mode, validate_args, validate_timeout, TLS_CONFLICT};
