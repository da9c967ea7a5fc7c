//! SecretKeepR - command-line client for the SecretKeepR secrets service.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use secretkeepr::cli::output;
use secretkeepr::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("SECRETKEEPR_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("secretkeepr=debug")
        } else {
            EnvFilter::new("secretkeepr=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            secretkeepr::error::Error::NotLoggedIn => Some("run: secretkeepr login"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        // Command failures are reported on stdout only; a non-zero exit is
        // reserved for argument-parsing errors, which clap handles itself.
    }
}
