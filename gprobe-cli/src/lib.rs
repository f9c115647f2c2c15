//! gprobe command-line front end

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod app;
pub mod args;
pub mod logging;

pub use app::{execute, parse_failure, report, run};
pub use args::Cli;
pub use logging::init_tracing;
