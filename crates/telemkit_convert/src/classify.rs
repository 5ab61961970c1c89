//! Per-cell type classifier: header signals plus value shape, in fixed
//! branch order.

use crate::conf::{
    C_NUM_FORMAT_TIMESTAMP, TUP_HEADER_NUMERIC_EXACT, TUP_LITERAL_BOOLEAN,
    TUP_SIGNAL_HEADER_BOOLEAN, TUP_SIGNAL_HEADER_TIMESTAMP,
};
use crate::parse::{
    check_value_digit_superset, convert_boolean_literal, derive_number_from_text,
    derive_timestamp_from_text, sanitize_cell_text,
};
use crate::spec::{EnumCellValue, SpecTypedCell};

/// True when the lowercased header contains any of the given substrings.
fn check_header_signal(header_lower: &str, signals: &[&str]) -> bool {
    signals.iter().any(|c_signal| header_lower.contains(c_signal))
}

/// Classify one `(header, value)` pair into exactly one typed cell.
///
/// Branches are evaluated in strict order and the first trigger wins:
/// 1. timestamp header signal;
/// 2. boolean header signal, or the value is a boolean literal under any
///    header;
/// 3. exact numeric header, or the value passes the permissive digit test;
/// 4. text fallback.
///
/// Total by construction: a parse failure inside a triggered branch degrades
/// to `Text` for that cell, it never aborts the row.
pub fn classify_cell(header: &str, value: &str) -> SpecTypedCell {
    let c_header_lower = header.trim().to_lowercase();
    let c_value = sanitize_cell_text(value);

    if check_header_signal(&c_header_lower, &TUP_SIGNAL_HEADER_TIMESTAMP) {
        return match derive_timestamp_from_text(c_value) {
            Ok(dt) => SpecTypedCell {
                value: EnumCellValue::Timestamp(dt),
                num_format: Some(C_NUM_FORMAT_TIMESTAMP),
            },
            Err(_) => SpecTypedCell::text(c_value),
        };
    }

    if check_header_signal(&c_header_lower, &TUP_SIGNAL_HEADER_BOOLEAN)
        || TUP_LITERAL_BOOLEAN.contains(&c_value)
    {
        return if TUP_LITERAL_BOOLEAN.contains(&c_value) {
            SpecTypedCell::plain(EnumCellValue::Boolean(convert_boolean_literal(c_value)))
        } else {
            SpecTypedCell::text(c_value)
        };
    }

    if TUP_HEADER_NUMERIC_EXACT.contains(&c_header_lower.as_str())
        || check_value_digit_superset(c_value)
    {
        return match derive_number_from_text(c_value) {
            Ok(value) => SpecTypedCell::plain(value),
            Err(_) => SpecTypedCell::text(c_value),
        };
    }

    SpecTypedCell::text(c_value)
}
