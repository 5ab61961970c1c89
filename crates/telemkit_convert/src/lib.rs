//! `telemkit_convert` v1:
//! type-inference kernel turning raw delimited telemetry records into typed cells.
//!
//! Architecture:
//! - `conf`     : fixed signal tables and format lists
//! - `spec`     : models and the conversion report
//! - `parse`    : leaf value parsers (timestamp / boolean / numeric)
//! - `classify` : per-cell type classifier
//! - `driver`   : row/table driver and the structured-sink trait
//! - `error`    : fatal error taxonomy
pub mod classify;
pub mod conf;
pub mod driver;
pub mod error;
pub mod parse;
pub mod spec;

pub use classify::classify_cell;
pub use conf::{
    C_LITERAL_BOOL_FALSE, C_LITERAL_BOOL_TRUE, C_NUM_FORMAT_TIMESTAMP, TUP_FMT_TIMESTAMP,
    TUP_HEADER_NUMERIC_EXACT, TUP_LITERAL_BOOLEAN, TUP_SIGNAL_HEADER_BOOLEAN,
    TUP_SIGNAL_HEADER_TIMESTAMP,
};
pub use driver::{CellSink, convert_records};
pub use error::{EnumConvertError, SpecParseError};
pub use parse::{
    check_value_digit_superset, convert_boolean_literal, derive_number_from_text,
    derive_timestamp_from_text, sanitize_cell_text,
};
pub use spec::{EnumCellValue, SpecConvertReport, SpecTypedCell};
