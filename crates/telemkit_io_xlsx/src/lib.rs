//! `telemkit_io_xlsx` v1:
//! XLSX structured sink for the conversion kernel.
//!
//! Architecture:
//! - `conf`   : constants and default format presets
//! - `spec`   : cell-format model
//! - `util`   : pure helper functions
//! - `writer` : pure-Rust workbook sink
pub mod conf;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    C_COLOR_HEADER_FILL, C_COLOR_HEADER_FONT, C_SHEET_NAME, N_WIDTH_CELL_MAX,
    N_WIDTH_CELL_PADDING, derive_default_sheet_formats,
};
pub use spec::SpecCellFormat;
pub use util::{derive_cell_display_text, derive_sheet_coords, estimate_unicode_text_width};
pub use writer::XlsxCellSink;
