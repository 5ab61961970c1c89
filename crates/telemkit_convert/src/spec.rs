//! Shared conversion models.

use chrono::NaiveDateTime;

////////////////////////////////////////////////////////////////////////////////
// #region TypedCellSpecification

/// Classified cell value. `Text` is the universal fallback variant.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumCellValue {
    /// Naive date-time parsed from one of the fixed patterns.
    Timestamp(NaiveDateTime),
    /// Boolean parsed from one of the recognized literals.
    Boolean(bool),
    /// Integer literal (no decimal point in the source text).
    Integer(i64),
    /// Fractional literal (decimal point present in the source text).
    Fraction(f64),
    /// Raw sanitized text.
    Text(String),
}

/// Typed cell plus an optional display-format hint for the sink.
///
/// The hint is currently only produced for `Timestamp` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecTypedCell {
    /// Classified value.
    pub value: EnumCellValue,
    /// Number-format code forwarded to the sink, when any.
    pub num_format: Option<&'static str>,
}

impl SpecTypedCell {
    /// Wrap a value with no display-format hint.
    pub fn plain(value: EnumCellValue) -> Self {
        Self {
            value,
            num_format: None,
        }
    }

    /// Wrap sanitized text as the fallback variant.
    pub fn text(value: &str) -> Self {
        Self::plain(EnumCellValue::Text(value.to_string()))
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Per-conversion report returned by the row/table driver.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecConvertReport {
    /// Data rows forwarded to the sink (header row excluded).
    pub n_rows: usize,
    /// Column count fixed by the header row.
    pub n_cols: usize,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecConvertReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
