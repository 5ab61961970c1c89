//! XLSX structured sink built on `rust_xlsxwriter`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use rust_xlsxwriter::{Format, FormatAlign, Workbook, XlsxError};
use telemkit_convert::{CellSink, EnumCellValue, SpecTypedCell};

use crate::conf::{C_SHEET_NAME, N_WIDTH_CELL_MAX, N_WIDTH_CELL_PADDING, derive_default_sheet_formats};
use crate::spec::SpecCellFormat;
use crate::util::{derive_cell_display_text, derive_sheet_coords, estimate_unicode_text_width};

/// Stateful one-sheet workbook sink.
///
/// Column widths are inferred from the longest display representation seen in
/// each column and applied on [`Self::close`].
pub struct XlsxCellSink {
    path_file_out: PathBuf,
    workbook: Workbook,
    fmt_header: Format,
    fmt_body: Format,
    fmt_body_spec: SpecCellFormat,
    dict_fmt_by_hint: BTreeMap<&'static str, Format>,
    l_width_by_col: Vec<usize>,
    if_closed: bool,
}

impl XlsxCellSink {
    /// Create a sink bound to `path_file_out` with the default presets.
    ///
    /// The workbook is buffered in memory until [`Self::close`] is called.
    pub fn create(path_file_out: PathBuf) -> Result<Self, String> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(C_SHEET_NAME)
            .map_err(derive_xlsx_error_text)?;

        let (fmt_header_spec, fmt_body_spec) = derive_default_sheet_formats();

        Ok(Self {
            path_file_out,
            workbook,
            fmt_header: derive_rust_xlsx_format(&fmt_header_spec),
            fmt_body: derive_rust_xlsx_format(&fmt_body_spec),
            fmt_body_spec,
            dict_fmt_by_hint: BTreeMap::new(),
            l_width_by_col: Vec::new(),
            if_closed: false,
        })
    }

    /// Return the output file path as a string.
    pub fn file_out(&self) -> String {
        self.path_file_out.to_string_lossy().to_string()
    }

    fn record_width(&mut self, n_idx_col_0: usize, text: &str) {
        if self.l_width_by_col.len() <= n_idx_col_0 {
            self.l_width_by_col.resize(n_idx_col_0 + 1, 0);
        }
        self.l_width_by_col[n_idx_col_0] = usize::max(
            self.l_width_by_col[n_idx_col_0],
            estimate_unicode_text_width(text),
        );
    }

    fn derive_hint_format(&mut self, c_num_format: &'static str) -> Format {
        let fmt_body_spec = &self.fmt_body_spec;
        self.dict_fmt_by_hint
            .entry(c_num_format)
            .or_insert_with(|| {
                derive_rust_xlsx_format(&fmt_body_spec.with_(SpecCellFormat {
                    num_format: Some(c_num_format.to_string()),
                    ..Default::default()
                }))
            })
            .clone()
    }

    /// Apply clamped column widths and flush the workbook to disk. Idempotent.
    pub fn close(&mut self) -> Result<(), String> {
        if self.if_closed {
            return Ok(());
        }

        let worksheet = self
            .workbook
            .worksheet_from_index(0)
            .map_err(derive_xlsx_error_text)?;
        for (n_idx_col, n_width) in self.l_width_by_col.iter().enumerate() {
            let n_width_final = usize::min(N_WIDTH_CELL_MAX, n_width + N_WIDTH_CELL_PADDING);
            let n_col = u16::try_from(n_idx_col)
                .map_err(|_| format!("column index overflow: {n_idx_col}"))?;
            worksheet
                .set_column_width(n_col, n_width_final as f64)
                .map_err(derive_xlsx_error_text)?;
        }

        self.workbook
            .save(&self.path_file_out)
            .map_err(derive_xlsx_error_text)?;
        self.if_closed = true;
        Ok(())
    }
}

impl CellSink for XlsxCellSink {
    fn write_header_cell(&mut self, n_idx_col: u32, text: &str) -> Result<(), String> {
        if self.if_closed {
            return Err("Cannot write after close().".to_string());
        }
        let (n_row, n_col) = derive_sheet_coords(1, n_idx_col)?;
        self.record_width(n_col as usize, text);

        let fmt_header = self.fmt_header.clone();
        let worksheet = self
            .workbook
            .worksheet_from_index(0)
            .map_err(derive_xlsx_error_text)?;
        worksheet
            .write_string_with_format(n_row, n_col, text, &fmt_header)
            .map_err(derive_xlsx_error_text)?;
        Ok(())
    }

    fn write_typed_cell(
        &mut self,
        n_idx_row: u32,
        n_idx_col: u32,
        cell: &SpecTypedCell,
    ) -> Result<(), String> {
        if self.if_closed {
            return Err("Cannot write after close().".to_string());
        }
        let (n_row, n_col) = derive_sheet_coords(n_idx_row, n_idx_col)?;
        self.record_width(n_col as usize, &derive_cell_display_text(&cell.value));

        let fmt = match cell.num_format {
            Some(c_num_format) => self.derive_hint_format(c_num_format),
            None => self.fmt_body.clone(),
        };

        let worksheet = self
            .workbook
            .worksheet_from_index(0)
            .map_err(derive_xlsx_error_text)?;
        match &cell.value {
            EnumCellValue::Timestamp(dt) => worksheet
                .write_datetime_with_format(n_row, n_col, dt, &fmt)
                .map_err(derive_xlsx_error_text)?,
            EnumCellValue::Boolean(val) => worksheet
                .write_boolean_with_format(n_row, n_col, *val, &fmt)
                .map_err(derive_xlsx_error_text)?,
            EnumCellValue::Integer(val) => worksheet
                .write_number_with_format(n_row, n_col, *val as f64, &fmt)
                .map_err(derive_xlsx_error_text)?,
            EnumCellValue::Fraction(val) => worksheet
                .write_number_with_format(n_row, n_col, *val, &fmt)
                .map_err(derive_xlsx_error_text)?,
            EnumCellValue::Text(val) => worksheet
                .write_string_with_format(n_row, n_col, val, &fmt)
                .map_err(derive_xlsx_error_text)?,
        };
        Ok(())
    }
}

fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }
    if let Some(val) = &spec.align
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }
    if let Some(val) = &spec.valign
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }
    if let Some(val) = &spec.num_format {
        format = format.set_num_format(val.clone());
    }
    if let Some(val) = &spec.bg_color {
        format = format.set_background_color(val.as_str());
    }
    if let Some(val) = &spec.font_color {
        format = format.set_font_color(val.as_str());
    }

    format
}

fn derive_format_align(align: &str) -> Option<FormatAlign> {
    let value = align.trim().to_ascii_lowercase();
    match value.as_str() {
        "general" => Some(FormatAlign::General),
        "left" => Some(FormatAlign::Left),
        "center" => Some(FormatAlign::Center),
        "right" => Some(FormatAlign::Right),
        "top" => Some(FormatAlign::Top),
        "bottom" => Some(FormatAlign::Bottom),
        "vcenter" | "vertical_center" => Some(FormatAlign::VerticalCenter),
        _ => None,
    }
}

fn derive_xlsx_error_text(err: XlsxError) -> String {
    format!("xlsx write error: {err}")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use telemkit_convert::{C_NUM_FORMAT_TIMESTAMP, SpecTypedCell};

    use super::*;

    fn sample_timestamp_cell() -> SpecTypedCell {
        SpecTypedCell {
            value: EnumCellValue::Timestamp(
                NaiveDate::from_ymd_opt(2024, 1, 15)
                    .unwrap()
                    .and_hms_opt(10, 30, 0)
                    .unwrap(),
            ),
            num_format: Some(C_NUM_FORMAT_TIMESTAMP),
        }
    }

    #[test]
    fn test_sink_writes_workbook_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path_file_out = dir.path().join("telemetry.xlsx");

        let mut sink = XlsxCellSink::create(path_file_out.clone()).unwrap();
        sink.write_header_cell(1, "timestamp").unwrap();
        sink.write_header_cell(2, "name").unwrap();
        sink.write_typed_cell(2, 1, &sample_timestamp_cell()).unwrap();
        sink.write_typed_cell(2, 2, &SpecTypedCell::text("Sensor-1"))
            .unwrap();
        sink.close().unwrap();

        assert!(path_file_out.exists());
        // Idempotent close.
        sink.close().unwrap();
    }

    #[test]
    fn test_sink_rejects_writes_after_close() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = XlsxCellSink::create(dir.path().join("out.xlsx")).unwrap();
        sink.write_header_cell(1, "name").unwrap();
        sink.close().unwrap();

        assert!(sink.write_header_cell(2, "late").is_err());
        assert!(
            sink.write_typed_cell(2, 1, &SpecTypedCell::text("late"))
                .is_err()
        );
    }

    #[test]
    fn test_sink_rejects_zero_based_coordinates() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = XlsxCellSink::create(dir.path().join("out.xlsx")).unwrap();
        assert!(sink.write_header_cell(0, "bad").is_err());
        assert!(
            sink.write_typed_cell(0, 1, &SpecTypedCell::text("bad"))
                .is_err()
        );
    }
}
