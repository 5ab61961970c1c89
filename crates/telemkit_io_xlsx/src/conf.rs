//! XLSX output constants and default format presets.

use crate::spec::SpecCellFormat;

/// Fixed worksheet title.
pub const C_SHEET_NAME: &str = "Telemetry Data";
/// Header row fill color.
pub const C_COLOR_HEADER_FILL: &str = "366092";
/// Header row font color.
pub const C_COLOR_HEADER_FONT: &str = "FFFFFF";
/// Maximum final column width.
pub const N_WIDTH_CELL_MAX: usize = 50;
/// Width padding added to the longest entry before clamping.
pub const N_WIDTH_CELL_PADDING: usize = 2;

/// Build the default `(header, body)` format presets used by
/// [`crate::writer::XlsxCellSink`].
pub fn derive_default_sheet_formats() -> (SpecCellFormat, SpecCellFormat) {
    let cfg_body_fmt_spec = SpecCellFormat {
        valign: Some("vcenter".to_string()),
        ..Default::default()
    };

    let cfg_header_fmt_spec = cfg_body_fmt_spec.with_(SpecCellFormat {
        bold: Some(true),
        align: Some("center".to_string()),
        bg_color: Some(C_COLOR_HEADER_FILL.to_string()),
        font_color: Some(C_COLOR_HEADER_FONT.to_string()),
        ..Default::default()
    });

    (cfg_header_fmt_spec, cfg_body_fmt_spec)
}
