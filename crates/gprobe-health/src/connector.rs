//! Transport connector and probe session

use gprobe_config::TlsMode;
use gprobe_core::{Deadline, Error, Result, Target};
use rustls::ClientConfig;
use std::sync::Arc;
use std::time::Instant;
use tokio::time::timeout_at;
use tonic::transport::{Channel, Endpoint, Uri};
use tower::service_fn;
use tracing::{debug, warn};

/// Opens a single session to a target under one security mode
#[derive(Debug, Clone)]
pub struct Connector {
    target: Target,
    tls: Option<Arc<ClientConfig>>,
}

impl Connector {
    /// Create a connector.
    ///
    /// TLS material is loaded here, so certificate problems fail before any
    /// network activity.
    pub fn new(target: Target, mode: &TlsMode) -> Result<Self> {
        let tls = gprobe_tls::client_config(mode)?;
        Ok(Self { target, tls })
    }

    /// Establish a session, giving up once `deadline` passes
    pub async fn connect(&self, deadline: Deadline) -> Result<Session> {
        let endpoint = Endpoint::from_shared(format!("http://{}", self.target.authority()))
            .map_err(|e| Error::usage(format!("invalid target address {}: {e}", self.target)))?;

        let target = self.target.clone();
        let tls = self.tls.clone();
        let connector = service_fn(move |_: Uri| {
            let target = target.clone();
            let tls = tls.clone();
            async move { gprobe_tls::connect(&target, tls).await }
        });

        debug!(
            target = %self.target,
            tls = self.tls.is_some(),
            budget_ms = deadline.remaining().as_millis() as u64,
            "Connecting"
        );

        match timeout_at(deadline.instant(), endpoint.connect_with_connector(connector)).await {
            Ok(Ok(channel)) => {
                debug!(target = %self.target, "Session established");
                Ok(Session::new(self.target.clone(), channel))
            }
            Ok(Err(e)) => {
                let reason = error_chain(&e);
                warn!(target = %self.target, reason = %reason, "Connection failed");
                Err(Error::connection(reason))
            }
            Err(_) => {
                warn!(target = %self.target, "Connection timed out");
                Err(Error::connection("deadline elapsed while connecting"))
            }
        }
    }
}

/// Live connection to the probed process.
///
/// Owned by exactly one invocation and closed when dropped, on every exit path.
#[derive(Debug)]
pub struct Session {
    target: Target,
    channel: Channel,
    opened_at: Instant,
}

impl Session {
    fn new(target: Target, channel: Channel) -> Self {
        Self {
            target,
            channel,
            opened_at: Instant::now(),
        }
    }

    /// Target the session is connected to
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Handle for issuing calls over this session
    pub fn channel(&self) -> Channel {
        self.channel.clone()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        debug!(
            target = %self.target,
            open_ms = self.opened_at.elapsed().as_millis() as u64,
            "Session closed"
        );
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
