//! # validate-benchmark-report Entry Point
//!
//! Parses arguments, initializes tracing, and dispatches to the validate
//! handler.

use std::process::ExitCode;

use clap::Parser;

/// Validate a benchmark report JSON document against a JSON schema.
///
/// Checks the report against Draft 2020-12 semantics and prints one
/// pointer-addressed line per violation, sorted by document location.
#[derive(Parser, Debug)]
#[command(name = "validate-benchmark-report", version, about)]
struct Cli {
    #[command(flatten)]
    args: benchreport_cli::validate::ValidateArgs,
}

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout is reserved for the pass line.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    benchreport_cli::validate::run(&cli.args)
}
