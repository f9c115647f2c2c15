//! CA certificate loading utilities

use gprobe_core::{Error, Result};
use rustls::pki_types::CertificateDer;
use rustls::RootCertStore;
use rustls_pemfile::certs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

/// Load certificates from a PEM file
pub fn load_certificates(path: &Path) -> Result<Vec<CertificateDer<'static>>> {
    let file = File::open(path).map_err(|e| {
        Error::config(format!(
            "failed to open CA file {}: {}",
            path.display(),
            e
        ))
    })?;

    let mut reader = BufReader::new(file);
    let certs = certs(&mut reader)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| {
            Error::config(format!(
                "failed to parse certificates in {}: {e}",
                path.display()
            ))
        })?;

    if certs.is_empty() {
        return Err(Error::config(format!(
            "no certificates found in {}",
            path.display()
        )));
    }

    debug!(
        path = %path.display(),
        count = certs.len(),
        "Loaded CA certificates"
    );

    Ok(certs)
}

/// Build a root store from a single PEM bundle
pub fn load_ca_file(path: &Path) -> Result<RootCertStore> {
    let mut roots = RootCertStore::empty();
    add_all(&mut roots, load_certificates(path)?, path)?;

    info!(path = %path.display(), count = roots.len(), "Using CA file");
    Ok(roots)
}

/// Build a root store from every file under a directory, recursively.
///
/// Every regular file must hold at least one PEM certificate.
pub fn load_ca_dir(path: &Path) -> Result<RootCertStore> {
    if !path.is_dir() {
        return Err(Error::config(format!(
            "CA path {} is not a directory",
            path.display()
        )));
    }

    let mut roots = RootCertStore::empty();
    visit(path, &mut roots)?;

    if roots.is_empty() {
        return Err(Error::config(format!(
            "no certificates found under {}",
            path.display()
        )));
    }

    info!(path = %path.display(), count = roots.len(), "Using CA directory");
    Ok(roots)
}

fn visit(dir: &Path, roots: &mut RootCertStore) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        Error::config(format!("failed to read CA path {}: {e}", dir.display()))
    })?;

    let mut paths = entries
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::config(format!("failed to read CA path {}: {e}", dir.display())))?;
    paths.sort();

    for path in paths {
        if path.is_dir() {
            visit(&path, roots)?;
        } else {
            let certs = load_certificates(&path)?;
            add_all(roots, certs, &path)?;
        }
    }

    Ok(())
}

/// Build a root store from the platform's native certificate store
pub fn load_native_roots() -> Result<RootCertStore> {
    let certs = rustls_native_certs::load_native_certs()
        .map_err(|e| Error::config(format!("failed to load system CA certificates: {e}")))?;

    let mut roots = RootCertStore::empty();
    let (added, ignored) = roots.add_parsable_certificates(certs);

    if added == 0 {
        return Err(Error::config("no usable system CA certificates found"));
    }

    debug!(added, ignored, "Loaded system CA certificates");
    Ok(roots)
}

fn add_all(
    roots: &mut RootCertStore,
    certs: Vec<CertificateDer<'static>>,
    path: &Path,
) -> Result<()> {
    for cert in certs {
        roots.add(cert).map_err(|e| {
            Error::config(format!("invalid CA certificate in {}: {e}", path.display()))
        })?;
    }
    Ok(())
}
