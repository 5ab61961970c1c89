//! Classification constants: timestamp patterns and header/value signal tables.

/// Ordered timestamp patterns; the first full match wins.
pub const TUP_FMT_TIMESTAMP: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%SZ",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Header substrings that trigger the timestamp branch.
pub const TUP_SIGNAL_HEADER_TIMESTAMP: [&str; 3] = ["timestamp", "recorded_at", "_at"];
/// Header substrings that trigger the boolean branch.
pub const TUP_SIGNAL_HEADER_BOOLEAN: [&str; 2] = ["is_active", "boolean"];
/// Headers that trigger the numeric branch by exact lowercase match.
pub const TUP_HEADER_NUMERIC_EXACT: [&str; 3] = ["voltage", "temp", "temperature"];

/// Affirmative boolean literal.
pub const C_LITERAL_BOOL_TRUE: &str = "ИСТИНА";
/// Negative boolean literal.
pub const C_LITERAL_BOOL_FALSE: &str = "ЛОЖЬ";
/// Both recognized boolean literals, matched exactly against cell values.
pub const TUP_LITERAL_BOOLEAN: [&str; 2] = [C_LITERAL_BOOL_TRUE, C_LITERAL_BOOL_FALSE];

/// Number-format hint attached to timestamp cells.
pub const C_NUM_FORMAT_TIMESTAMP: &str = "yyyy-mm-dd hh:mm:ss";
