//! Fatal error taxonomy for a conversion run.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that escape the row/table driver and abort the run.
///
/// Per-cell parse failures never appear here; the classifier absorbs them
/// into the `Text` fallback.
#[derive(Debug, Error)]
pub enum EnumConvertError {
    /// Input path does not exist; checked before any output is produced.
    #[error("input file not found: {0}")]
    FileNotFound(PathBuf),
    /// Input stream contained no header row.
    #[error("input has no header row")]
    MissingHeader,
    /// CSV structure or decoding failure.
    #[error("csv read error: {0}")]
    Csv(#[from] csv::Error),
    /// Underlying I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Structured-sink failure (workbook write/save).
    #[error("{0}")]
    Sink(String),
}

/// Leaf parser failure for one value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot parse {kind}: {value:?}")]
pub struct SpecParseError {
    kind: &'static str,
    value: String,
}

impl SpecParseError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
