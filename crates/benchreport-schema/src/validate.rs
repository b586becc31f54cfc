//! # Schema Validation
//!
//! Runtime validation of a benchmark report against a JSON Schema
//! (Draft 2020-12). Keyword evaluation is delegated to the `jsonschema`
//! crate; this module owns validator construction, violation collection,
//! and the ordering of results.
//!
//! ## Determinism Invariant
//!
//! Violations handed back to callers are always sorted by structural path
//! (see [`crate::order`]), never in engine discovery order.

use std::fmt;
use std::path::Path;

use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;

use crate::load::load_json;
use crate::order::pointer_segments;

/// Error during report validation.
#[derive(Error, Debug)]
pub enum ReportValidationError {
    /// The schema or report file could not be read.
    #[error("cannot read {path}: {source}")]
    FileAccess {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The file contents were not valid JSON.
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        /// Path to the file that failed to parse.
        path: String,
        /// Parse diagnostic, including line and column.
        source: serde_json::Error,
    },

    /// The schema document could not be compiled into a validator.
    #[error("invalid schema in {path}: {reason}")]
    SchemaBuild {
        /// Path to the schema file.
        path: String,
        /// Reason the validator could not be built.
        reason: String,
    },

    /// The report did not conform to the schema.
    #[error("schema validation failed for {report_path}:\n{violations}")]
    ValidationFailed {
        /// Path to the report that failed validation.
        report_path: String,
        /// Violations, sorted by structural path.
        violations: ValidationViolations,
    },
}

/// A single validation violation with structured context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer to the violating value in the report.
    pub instance_path: String,
    /// JSON Pointer to the schema keyword that was violated.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl Violation {
    /// The instance path rendered as a pointer, `/` for the document root.
    pub fn pointer(&self) -> &str {
        if self.instance_path.is_empty() {
            "/"
        } else {
            &self.instance_path
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  - {}: {}", self.pointer(), self.message)
    }
}

/// Collection of validation violations, sorted by structural path.
#[derive(Debug, Clone)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Build a Draft 2020-12 validator from a parsed schema document.
///
/// # Errors
///
/// Returns [`ReportValidationError::SchemaBuild`] if the schema cannot be
/// compiled (e.g., a keyword with an invalid value).
pub fn build_validator(
    schema: &Value,
    schema_path: &Path,
) -> Result<Validator, ReportValidationError> {
    let mut opts = jsonschema::options();
    opts.with_draft(jsonschema::Draft::Draft202012);

    opts.build(schema).map_err(|e| ReportValidationError::SchemaBuild {
        path: schema_path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Validate a parsed report against a parsed schema.
///
/// Materializes the engine's lazy error stream, sorts it by structural
/// path (indices numeric, keys lexicographic, shorter prefix first), and
/// batches the result into a single [`ReportValidationError::ValidationFailed`].
///
/// The path arguments are used only for error context.
///
/// # Errors
///
/// Returns [`ReportValidationError::SchemaBuild`] if the schema is not
/// compilable and [`ReportValidationError::ValidationFailed`] if the report
/// violates it.
pub fn validate_report(
    schema: &Value,
    report: &Value,
    schema_path: &Path,
    report_path: &Path,
) -> Result<(), ReportValidationError> {
    let validator = build_validator(schema, schema_path)?;

    let mut violations: Vec<Violation> = validator
        .iter_errors(report)
        .map(|e| Violation {
            instance_path: e.instance_path.to_string(),
            schema_path: e.schema_path.to_string(),
            message: e.to_string(),
        })
        .collect();

    if violations.is_empty() {
        return Ok(());
    }

    // Stable sort: violations at the same location keep engine order.
    violations.sort_by_cached_key(|v| pointer_segments(&v.instance_path));

    Err(ReportValidationError::ValidationFailed {
        report_path: report_path.display().to_string(),
        violations: ValidationViolations { violations },
    })
}

/// Load both files and validate the report against the schema.
///
/// This is the whole pipeline behind the CLI: two scoped file reads, two
/// JSON parses, one validation pass.
pub fn validate_report_file(
    schema_path: &Path,
    report_path: &Path,
) -> Result<(), ReportValidationError> {
    let schema = load_json(schema_path)?;
    let report = load_json(report_path)?;
    validate_report(&schema, &report, schema_path, report_path)
}
