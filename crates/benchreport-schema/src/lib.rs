//! # benchreport-schema — Benchmark Report Schema Validation
//!
//! Runtime validation of benchmark report JSON documents against a JSON
//! Schema (Draft 2020-12), with pointer-addressed violation reporting.
//!
//! Rule evaluation is delegated entirely to the `jsonschema` crate. This
//! crate owns everything around it:
//!
//! - [`load`] — reading schema and report files and parsing them as JSON.
//! - [`order`] — the total order over instance paths that makes violation
//!   output deterministic and diffable across runs.
//! - [`validate`] — validator construction, violation collection, and the
//!   structured error taxonomy.
//!
//! ## Crate Policy
//!
//! - No process-exit or output-stream logic here; exit codes and formatting
//!   for the terminal belong to `benchreport-cli`.
//! - Violations returned to callers are always sorted by structural path.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod load;
pub mod order;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use load::load_json;
pub use order::{pointer_segments, PathSegment};
pub use validate::{
    build_validator, validate_report, validate_report_file, ReportValidationError,
    ValidationViolations, Violation,
};
