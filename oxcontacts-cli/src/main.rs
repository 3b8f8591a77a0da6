mod output;
mod prompt;

use anyhow::Result;
use clap::Parser;
use ox_contacts::{export_contacts, ConnectionTarget, ExportConfig, DEFAULT_TIMEOUT};
use output::{print_error, ExitStatus, OutputTarget};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::debug;

#[derive(Parser)]
#[command(name = "oxcontacts", version)]
#[command(about = "Export Open-Xchange contacts as vCards", long_about = None)]
struct Cli {
    /// Open-Xchange URL; https:// is assumed when no scheme is given
    #[arg(value_name = "URL", value_parser = ConnectionTarget::parse)]
    url: ConnectionTarget,
    /// Username (typically an e-mail address)
    #[arg(short, long, value_name = "USER")]
    user: Option<String>,
    /// Password, asked for when omitted
    #[arg(short, long, value_name = "PASS")]
    password: Option<String>,
    /// Resulting vCard file [default: standard output]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT.as_secs(),
          value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,
    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitStatus::Success.into(),
        Err(err) => {
            print_error(&format!("{:#}", err));
            ExitStatus::for_error(&err).into()
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let credentials = prompt::resolve_credentials(cli.user, cli.password)?;
    let config = ExportConfig::new(cli.url, credentials)
        .with_timeout(Duration::from_secs(cli.timeout));

    let target = OutputTarget::from_arg(cli.output.as_deref());
    debug!(server = %config.target, output = %target, "starting export");

    let mut out = target.open()?;
    export_contacts(&config, &mut out).await?;
    Ok(())
}

// Logs go to stderr so that vCards on stdout stay clean.
// RUST_LOG overrides the level picked from -v/-q.
fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["oxcontacts", "example.com/ox"]).unwrap();

        assert_eq!(cli.url, ConnectionTarget::parse("https://example.com/ox").unwrap());
        assert!(cli.user.is_none());
        assert!(cli.password.is_none());
        assert!(cli.output.is_none());
        assert_eq!(cli.timeout, 60);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_all_options() {
        let cli = Cli::try_parse_from([
            "oxcontacts",
            "-u",
            "jo@example.com",
            "--password",
            "hunter2",
            "-o",
            "-",
            "--timeout",
            "5",
            "-vv",
            "http://ox.local/",
        ])
        .unwrap();

        assert_eq!(cli.url.base_url(), "http://ox.local");
        assert_eq!(cli.user.as_deref(), Some("jo@example.com"));
        assert_eq!(cli.password.as_deref(), Some("hunter2"));
        assert_eq!(OutputTarget::from_arg(cli.output.as_deref()), OutputTarget::Stdout);
        assert_eq!(cli.timeout, 5);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_bad_scheme_is_usage_error() {
        let err = Cli::try_parse_from(["oxcontacts", "ftp://example.com"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_url_is_required() {
        assert!(Cli::try_parse_from(["oxcontacts", "-u", "jo"]).is_err());
        assert!(Cli::try_parse_from(["oxcontacts", "--timeout", "0", "example.com"]).is_err());
        assert!(Cli::try_parse_from(["oxcontacts", "a.example", "b.example"]).is_err());
    }
}
