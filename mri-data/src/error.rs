use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a reference file.
///
/// Line numbers are 1-based, as reported by the CSV reader.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The underlying CSV reader failed (for example on invalid UTF-8).
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: String,
        found: usize,
    },

    #[error("line {line}: {field} '{value}' is not a number")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: procedure code '{value}' is not an integer")]
    InvalidCode { line: u64, value: String },

    #[error("line {line}: procedure {code} has no duration samples")]
    MissingSamples { line: u64, code: i64 },
}
