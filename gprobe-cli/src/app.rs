//! Invocation flow: parse, probe, report

use crate::args::Cli;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use gprobe_core::{Error, ExitStatus, Result, Verdict, HEALTH_CHECK_FAILED};
use std::ffi::OsString;
use std::io::Write;

/// Parse `args` and run one probe, writing results to `out` and `err`
pub async fn run<I, T, O, E>(args: I, out: &mut O, err: &mut E) -> ExitStatus
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => execute(&cli, out, err).await,
        Err(e) => parse_failure(e, out, err),
    }
}

/// Run one probe for already parsed arguments
pub async fn execute<O: Write, E: Write>(cli: &Cli, out: &mut O, err: &mut E) -> ExitStatus {
    let outcome = match cli.to_config() {
        Ok(config) => gprobe_health::run(&config).await,
        Err(e) => Err(e),
    };
    report(outcome, out, err)
}

/// Render an outcome: status on stdout, problems on stderr.
///
/// A status that cannot be written to `out` is a failure, whatever was received.
pub fn report<O: Write, E: Write>(outcome: Result<Verdict>, out: &mut O, err: &mut E) -> ExitStatus {
    match outcome {
        Ok(verdict) => {
            if let Err(e) = writeln!(out, "{}", verdict.status()).and_then(|()| out.flush()) {
                let _ = writeln!(err, "failed to write status: {e}");
                return ExitStatus::Failure;
            }
            if let Verdict::Unhealthy(_) = verdict {
                let _ = writeln!(err, "{HEALTH_CHECK_FAILED}");
            }
            verdict.exit_status()
        }
        Err(Error::Usage(message)) => usage_failure(&message, err),
        Err(e) => {
            let _ = writeln!(err, "{e}");
            e.exit_status()
        }
    }
}

/// Handle an argument parser error; help and version requests succeed
pub fn parse_failure<O: Write, E: Write>(e: clap::Error, out: &mut O, err: &mut E) -> ExitStatus {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            match write!(out, "{}", e.render()).and_then(|()| out.flush()) {
                Ok(()) => ExitStatus::Healthy,
                Err(_) => ExitStatus::Failure,
            }
        }
        _ => {
            let _ = writeln!(err, "{}", Cli::command().render_help());
            let _ = write!(err, "{}", e.render());
            ExitStatus::Usage
        }
    }
}

fn usage_failure<E: Write>(message: &str, err: &mut E) -> ExitStatus {
    let _ = writeln!(err, "{}", Cli::command().render_help());
    let _ = writeln!(err, "error: {message}");
    ExitStatus::Usage
}

#[cfg(test)]
mod tests {
    use super::*;
    use gprobe_core::HealthStatus;
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    fn render(outcome: Result<Verdict>) -> (ExitStatus, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = report(outcome, &mut out, &mut err);
        (
            status,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_report_healthy() {
        let (status, out, err) = render(Ok(Verdict::Healthy(HealthStatus::Serving)));
        assert_eq!(status, ExitStatus::Healthy);
        assert_eq!(out, "SERVING\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_report_unhealthy() {
        let (status, out, err) = render(Ok(Verdict::Unhealthy(HealthStatus::NotServing)));
        assert_eq!(status, ExitStatus::Unhealthy);
        assert_eq!(out, "NOT_SERVING\n");
        assert_eq!(err, "health-check failed\n");
    }

    #[test]
    fn test_report_unwritable_status_fails() {
        let mut err = Vec::new();
        let status = report(
            Ok(Verdict::Healthy(HealthStatus::Serving)),
            &mut ClosedPipe,
            &mut err,
        );
        assert_eq!(status, ExitStatus::Failure);
        assert!(String::from_utf8(err).unwrap().contains("failed to write status"));
    }

    #[tokio::test]
    async fn test_unwritable_version_fails() {
        let mut err = Vec::new();
        let status = run(["gprobe", "--version"], &mut ClosedPipe, &mut err).await;
        assert_eq!(status, ExitStatus::Failure);
    }

    #[test]
    fn test_report_error() {
        let (status, out, err) = render(Err(Error::Unimplemented));
        assert_eq!(status, ExitStatus::Failure);
        assert!(out.is_empty());
        assert_eq!(
            err,
            "rpc error: server doesn't implement gRPC health-checking protocol\n"
        );
    }

    #[test]
    fn test_report_usage_error_prints_help() {
        let (status, out, err) = render(Err(Error::usage("exactly 1 to 2 arguments are required")));
        assert_eq!(status, ExitStatus::Usage);
        assert!(out.is_empty());
        assert!(err.contains("Usage:"));
        assert!(err.contains("error: exactly 1 to 2 arguments are required"));
    }

    #[tokio::test]
    async fn test_help_and_version_succeed() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        assert_eq!(
            run(["gprobe", "--help"], &mut out, &mut err).await,
            ExitStatus::Healthy
        );
        assert!(String::from_utf8_lossy(&out).contains("--tls-insecure"));

        let mut out = Vec::new();
        assert_eq!(
            run(["gprobe", "--version"], &mut out, &mut err).await,
            ExitStatus::Healthy
        );
        assert!(String::from_utf8_lossy(&out).contains(env!("CARGO_PKG_VERSION")));
        assert!(err.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_flag_is_usage_error() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = run(["gprobe", "--bogus", "localhost:1"], &mut out, &mut err).await;
        assert_eq!(status, ExitStatus::Usage);
        assert!(out.is_empty());
        assert!(!err.is_empty());
    }
}
