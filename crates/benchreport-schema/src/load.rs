//! # Document Loading
//!
//! Reads the schema and report files from disk and parses them as JSON.
//! Each load is one scoped read; nothing is cached across calls.

use std::path::Path;

use serde_json::Value;

use crate::validate::ReportValidationError;

/// Read a file as UTF-8 text and parse it as JSON.
///
/// # Errors
///
/// Returns [`ReportValidationError::FileAccess`] if the file cannot be read
/// and [`ReportValidationError::Parse`] if its contents are not valid JSON.
pub fn load_json(path: &Path) -> Result<Value, ReportValidationError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ReportValidationError::FileAccess {
            path: path.display().to_string(),
            source: e,
        })?;

    serde_json::from_str(&content).map_err(|e| ReportValidationError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}
