//! Client TLS configuration

use crate::loader::{load_ca_dir, load_ca_file, load_native_roots};
use crate::verifier::NoVerification;
use gprobe_config::TlsMode;
use gprobe_core::{Error, Result};
use rustls::crypto::CryptoProvider;
use rustls::{ClientConfig, RootCertStore};
use std::sync::Arc;
use tracing::debug;

/// ALPN protocol gRPC runs over
pub const ALPN_H2: &[u8] = b"h2";

/// Crypto provider shared by every client config
pub fn crypto_provider() -> Arc<CryptoProvider> {
    Arc::new(rustls::crypto::ring::default_provider())
}

/// Build the rustls client config for a security mode.
///
/// Returns `None` for plaintext. All certificate material is loaded here,
/// before any connection is attempted.
pub fn client_config(mode: &TlsMode) -> Result<Option<Arc<ClientConfig>>> {
    let provider = crypto_provider();

    let builder = ClientConfig::builder_with_provider(Arc::clone(&provider))
        .with_safe_default_protocol_versions()
        .map_err(|e| Error::config(format!("failed to build TLS config: {e}")))?;

    let mut config = match mode {
        TlsMode::Plaintext => return Ok(None),
        TlsMode::SystemRoots => with_roots(builder, load_native_roots()?),
        TlsMode::CaFile(path) => with_roots(builder, load_ca_file(path)?),
        TlsMode::CaPath(path) => with_roots(builder, load_ca_dir(path)?),
        TlsMode::Insecure => builder
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(NoVerification::new(provider)))
            .with_no_client_auth(),
    };

    config.alpn_protocols = vec![ALPN_H2.to_vec()];

    debug!(mode = mode.name(), "TLS client config built");
    Ok(Some(Arc::new(config)))
}

fn with_roots(
    builder: rustls::ConfigBuilder<ClientConfig, rustls::WantsVerifier>,
    roots: RootCertStore,
) -> ClientConfig {
    builder.with_root_certificates(roots).with_no_client_auth()
}
