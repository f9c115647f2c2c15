//! # gprobe Health Client
//!
//! Client side of the gRPC health-checking protocol:
//! - Transport connector with a bounded connect phase
//! - Single `Check` call bounded by the remaining deadline
//! - Normalization of gRPC failures into a closed error set
//! - One-shot probe orchestration

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod checker;
pub mod classify;
pub mod connector;
pub mod probe;

pub use checker::HealthChecker;
pub use classify::classify;
pub use connector::{Connector, Session};
pub use probe::{probe, run};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::checker::HealthChecker;
    pub use crate::connector::{Connector, Session};
    pub use crate::probe::{probe, run};
    pub use gprobe_core::prelude::*;
}
