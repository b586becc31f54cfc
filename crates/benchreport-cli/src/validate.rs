//! # Validate Handler
//!
//! Runs schema validation for one benchmark report and maps the outcome to
//! output lines and a process exit code.

use std::path::PathBuf;
use std::process::ExitCode;

use benchreport_schema::ReportValidationError;
use clap::Args;

/// Arguments for report validation.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the JSON schema file.
    #[arg(long, value_name = "PATH")]
    pub schema: PathBuf,

    /// Path to the benchmark report JSON file.
    #[arg(long, value_name = "PATH")]
    pub report: PathBuf,
}

/// Exit code when the report violates the schema.
const EXIT_VALIDATION_FAILED: u8 = 1;
/// Exit code when the tool could not complete validation at all.
const EXIT_OPERATIONAL_FAILURE: u8 = 2;

/// Validate the report and print the outcome.
///
/// On success prints the pass line to stdout. On schema violations prints a
/// header and one `  - <pointer>: <message>` line per violation to stderr,
/// in structural-path order. On operational failure prints the error to
/// stderr.
pub fn run(args: &ValidateArgs) -> ExitCode {
    tracing::debug!(
        schema = %args.schema.display(),
        report = %args.report.display(),
        "validating benchmark report"
    );

    match benchreport_schema::validate_report_file(&args.schema, &args.report) {
        Ok(()) => {
            println!("Schema validation passed: {}", args.report.display());
            ExitCode::SUCCESS
        }
        Err(ReportValidationError::ValidationFailed { report_path, violations }) => {
            eprintln!("Schema validation failed for {report_path}:");
            for violation in violations.violations() {
                eprintln!("{violation}");
            }
            ExitCode::from(EXIT_VALIDATION_FAILED)
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(EXIT_OPERATIONAL_FAILURE)
        }
    }
}
