//! Plain or TLS client stream

use gprobe_core::Target;
use pin_project::pin_project;
use rustls::pki_types::ServerName;
use rustls::ClientConfig;
use std::io;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};
use tokio::net::TcpStream;
use tokio_rustls::client::TlsStream;
use tokio_rustls::TlsConnector;
use tracing::debug;

/// Byte stream to the probed process
#[pin_project(project = ProbeStreamProj)]
#[derive(Debug)]
pub enum ProbeStream {
    /// Unencrypted TCP
    Plain(#[pin] TcpStream),
    /// TLS over TCP
    Tls(#[pin] Box<TlsStream<TcpStream>>),
}

/// Open a TCP connection to `target`, then run the TLS handshake when a
/// client config is given.
pub async fn connect(target: &Target, tls: Option<Arc<ClientConfig>>) -> io::Result<ProbeStream> {
    let tcp = TcpStream::connect((target.host(), target.port())).await?;
    tcp.set_nodelay(true)?;

    debug!(target = %target, peer = ?tcp.peer_addr().ok(), "TCP connection established");

    let Some(config) = tls else {
        return Ok(ProbeStream::Plain(tcp));
    };

    let server_name = ServerName::try_from(target.host().to_string())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let stream = TlsConnector::from(config).connect(server_name, tcp).await?;

    debug!(target = %target, "TLS handshake completed");
    Ok(ProbeStream::Tls(Box::new(stream)))
}

impl AsyncRead for ProbeStream {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        match self.project() {
            ProbeStreamProj::Plain(s) => s.poll_read(cx, buf),
            ProbeStreamProj::Tls(s) => s.poll_read(cx, buf),
        }
    }
}

impl AsyncWrite for ProbeStream {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        match self.project() {
            ProbeStreamProj::Plain(s) => s.poll_write(cx, buf),
            ProbeStreamProj::Tls(s) => s.poll_write(cx, buf),
        }
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        match self.project() {
            ProbeStreamProj::Plain(s) => s.poll_flush(cx),
            ProbeStreamProj::Tls(s) => s.poll_flush(cx),
        }
    }

    fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        match self.project() {
            ProbeStreamProj::Plain(s) => s.poll_shutdown(cx),
            ProbeStreamProj::Tls(s) => s.poll_shutdown(cx),
        }
    }
}
