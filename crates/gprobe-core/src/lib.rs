//! # gprobe Core
//!
//! Core types and policies shared by the gprobe crates:
//! - Error taxonomy
//! - Serving status
//! - Target address
//! - Operation deadline
//! - Outcome decision and exit statuses

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod deadline;
pub mod error;
pub mod outcome;
pub mod status;
pub mod target;

pub use deadline::{Deadline, DEFAULT_TIMEOUT, MAX_TIMEOUT};
pub use error::{Error, Result};
pub use outcome::{decide, ExitStatus, Verdict, HEALTH_CHECK_FAILED};
pub use status::HealthStatus;
pub use target::Target;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::deadline::Deadline;
    pub use crate::error::{Error, Result};
    pub use crate::outcome::{ExitStatus, Verdict};
    pub use crate::status::HealthStatus;
    pub use crate::target::Target;
}
