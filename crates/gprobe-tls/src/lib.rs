//! Client-side TLS for gprobe
//!
//! Provides the transport security modes a probe can run with:
//! - Plaintext TCP
//! - TLS verified against the system's native roots
//! - TLS verified against a CA bundle file or a CA directory
//! - TLS accepting any certificate
//!
//! Certificate material is loaded eagerly when the client config is built,
//! so misconfiguration surfaces before any network I/O.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod config;
pub mod loader;
pub mod stream;
pub mod verifier;

pub use config::{client_config, crypto_provider, ALPN_H2};
pub use loader::{load_ca_dir, load_ca_file, load_certificates, load_native_roots};
pub use stream::{connect, ProbeStream};
pub use verifier::NoVerification;
