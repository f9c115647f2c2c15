//! Error types for gprobe

use crate::outcome::ExitStatus;

/// Result type alias using [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every way a probe invocation can fail.
///
/// The set is closed: transport and protocol failures are normalized into
/// one of these variants exactly once, so callers match exhaustively instead
/// of inspecting message text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Malformed command line (argument count, conflicting TLS flags, bad target)
    #[error("{0}")]
    Usage(String),

    /// Well-formed command line with unusable settings (e.g. unreadable CA material)
    #[error("can't parse TLS configuration: {0}")]
    Config(String),

    /// Transport session could not be established or was lost.
    ///
    /// The reason is kept for diagnostics only; the rendered message is fixed.
    #[error("connection refused: application isn't listening or TLS handshake failed")]
    Connection {
        /// Underlying cause, logged but never shown to the user
        reason: String,
    },

    /// Remote endpoint does not serve `grpc.health.v1.Health`
    #[error("rpc error: server doesn't implement gRPC health-checking protocol")]
    Unimplemented,

    /// Remote endpoint has no health record for the named service
    #[error("rpc error: service \"{0}\" not found")]
    ServiceNotFound(String),

    /// Any other protocol-level failure, status code stripped
    #[error("rpc error: {0}")]
    Rpc(String),
}

impl Error {
    /// Create a connection error
    pub fn connection(reason: impl Into<String>) -> Self {
        Error::Connection {
            reason: reason.into(),
        }
    }

    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Error::Usage(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// Whether this error stems from command-line misuse
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage(_))
    }

    /// Exit status reported to the calling process
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            Error::Usage(_) => ExitStatus::Usage,
            _ => ExitStatus::Failure,
        }
    }
}
