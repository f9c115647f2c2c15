//! gprobe CLI

use clap::Parser;
use gprobe_cli::{execute, init_tracing, parse_failure, Cli};
use gprobe_core::ExitStatus;
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return parse_failure(e, &mut stdout, &mut stderr).into(),
    };

    if let Err(e) = init_tracing(&cli.log_level) {
        let _ = writeln!(stderr, "{e:#}");
        return ExitStatus::Usage.into();
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "gprobe starting");

    execute(&cli, &mut stdout, &mut stderr).await.into()
}
