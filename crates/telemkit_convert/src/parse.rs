//! Leaf value parsers for timestamp, boolean, and numeric literals.

use chrono::NaiveDateTime;

use crate::conf::{C_LITERAL_BOOL_TRUE, TUP_FMT_TIMESTAMP};
use crate::error::SpecParseError;
use crate::spec::EnumCellValue;

/// Trim surrounding whitespace, then surrounding double quotes.
pub fn sanitize_cell_text(text: &str) -> &str {
    text.trim().trim_matches('"')
}

/// Parse a timestamp against the fixed pattern list, in order.
///
/// Every pattern requires a full-string match; the literal `Z` in the first
/// pattern is consumed as-is, no offset handling happens.
pub fn derive_timestamp_from_text(text: &str) -> Result<NaiveDateTime, SpecParseError> {
    let c_value = sanitize_cell_text(text);
    for c_fmt in TUP_FMT_TIMESTAMP {
        if let Ok(dt) = NaiveDateTime::parse_from_str(c_value, c_fmt) {
            return Ok(dt);
        }
    }
    Err(SpecParseError::new("timestamp", c_value))
}

/// Map a boolean literal to its value.
///
/// Returns `true` iff the trimmed, uppercased text equals the affirmative
/// literal; anything else, recognized or not, yields `false`. Callers needing
/// a definitive answer must pre-check membership in
/// [`crate::conf::TUP_LITERAL_BOOLEAN`].
pub fn convert_boolean_literal(text: &str) -> bool {
    text.trim().to_uppercase() == C_LITERAL_BOOL_TRUE
}

/// Parse an integer or fractional literal, chosen by decimal-point presence.
///
/// Whether the text is numeric at all is the classifier's guard, not this
/// parser's.
pub fn derive_number_from_text(text: &str) -> Result<EnumCellValue, SpecParseError> {
    if text.contains('.') {
        text.parse::<f64>()
            .map(EnumCellValue::Fraction)
            .map_err(|_| SpecParseError::new("fraction", text))
    } else {
        text.parse::<i64>()
            .map(EnumCellValue::Integer)
            .map_err(|_| SpecParseError::new("integer", text))
    }
}

/// Permissive numeric-shape test: strip every `.` and `-`, then require a
/// non-empty all-digit residue.
///
/// Deliberately looser than the numeric grammar: `"1.2.3"` and `"--5"` pass
/// here and only fail later inside [`derive_number_from_text`].
pub fn check_value_digit_superset(text: &str) -> bool {
    let c_residue: String = text
        .chars()
        .filter(|chr| *chr != '.' && *chr != '-')
        .collect();
    !c_residue.is_empty() && c_residue.chars().all(|chr| chr.is_ascii_digit())
}
