//! ivyscan CLI binary.
//!
//! Entry point for the `ivyscan` command-line tool. It initializes logging
//! via `tracing`, parses arguments with `clap`, and dispatches to the
//! command handlers.

mod cli;
mod commands;

use miette::Result;

fn main() -> Result<()> {
    let args = cli::parse();

    let fallback = if args.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .init();

    commands::dispatch(args)
}
