//! Normalization of gRPC failures into the probe error taxonomy

use gprobe_core::Error;
use tonic::{Code, Status};

/// Message used when the operation deadline expires during the call
pub const DEADLINE_EXCEEDED: &str = "deadline exceeded";

/// Map a failed `Check` call onto [`Error`].
///
/// The raw status is never shown verbatim: well-known codes get a fixed
/// message and everything else keeps only the status message text.
pub fn classify(status: &Status, service: &str) -> Error {
    match status.code() {
        Code::Unavailable => Error::connection(status.message()),
        Code::Unimplemented => Error::Unimplemented,
        Code::NotFound => Error::ServiceNotFound(service.to_string()),
        Code::DeadlineExceeded => Error::Rpc(DEADLINE_EXCEEDED.to_string()),
        code => {
            let message = status.message();
            if message.is_empty() {
                Error::Rpc(code.description().to_string())
            } else {
                Error::Rpc(message.to_string())
            }
        }
    }
}
