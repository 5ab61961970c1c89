//! Row/table driver: streams delimited records through the classifier into a
//! structured sink.

use std::io::Read;

use tracing::debug;

use crate::classify::classify_cell;
use crate::error::EnumConvertError;
use crate::spec::{SpecConvertReport, SpecTypedCell};

/// Structured sink: spreadsheet-writing capability fed by the driver.
///
/// Row and column indices are 1-based to match conventional spreadsheet
/// addressing; the header row is row 1.
pub trait CellSink {
    /// Write one header cell.
    fn write_header_cell(&mut self, n_idx_col: u32, text: &str) -> Result<(), String>;

    /// Write one classified data cell.
    fn write_typed_cell(
        &mut self,
        n_idx_row: u32,
        n_idx_col: u32,
        cell: &SpecTypedCell,
    ) -> Result<(), String>;
}

/// Drive one full conversion pass: header row once, then data rows in order.
///
/// Each value is paired positionally with its header; pairing stops at the
/// shorter of the two lengths, so trailing unmatched entries on either side
/// are dropped (a warning is recorded in the report). Cells are forwarded
/// left-to-right, top-to-bottom.
pub fn convert_records<R: Read>(
    mut reader: csv::Reader<R>,
    sink: &mut impl CellSink,
) -> Result<SpecConvertReport, EnumConvertError> {
    let record_header = reader.headers()?.clone();
    if record_header.is_empty() {
        return Err(EnumConvertError::MissingHeader);
    }
    let l_headers: Vec<String> = record_header
        .iter()
        .map(|c_header| c_header.trim().to_string())
        .collect();

    for (n_idx_col, c_header) in l_headers.iter().enumerate() {
        sink.write_header_cell(n_idx_col as u32 + 1, c_header)
            .map_err(EnumConvertError::Sink)?;
    }

    let mut report = SpecConvertReport {
        n_cols: l_headers.len(),
        ..Default::default()
    };

    // Header occupies row 1.
    let mut n_idx_row: u32 = 2;
    for record in reader.records() {
        let record = record?;
        if record.len() != l_headers.len() {
            let c_msg = format!(
                "row {n_idx_row}: {} fields for {} columns; unmatched entries dropped",
                record.len(),
                l_headers.len()
            );
            debug!("{c_msg}");
            report.warn(c_msg);
        }

        for (n_idx_col, (c_header, c_value)) in l_headers.iter().zip(record.iter()).enumerate() {
            let cell = classify_cell(c_header, c_value);
            sink.write_typed_cell(n_idx_row, n_idx_col as u32 + 1, &cell)
                .map_err(EnumConvertError::Sink)?;
        }

        report.n_rows += 1;
        n_idx_row += 1;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::EnumCellValue;

    #[derive(Default)]
    struct RecordingSink {
        l_headers: Vec<(u32, String)>,
        l_cells: Vec<(u32, u32, SpecTypedCell)>,
    }

    impl CellSink for RecordingSink {
        fn write_header_cell(&mut self, n_idx_col: u32, text: &str) -> Result<(), String> {
            self.l_headers.push((n_idx_col, text.to_string()));
            Ok(())
        }

        fn write_typed_cell(
            &mut self,
            n_idx_row: u32,
            n_idx_col: u32,
            cell: &SpecTypedCell,
        ) -> Result<(), String> {
            self.l_cells.push((n_idx_row, n_idx_col, cell.clone()));
            Ok(())
        }
    }

    fn reader_from(data: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(data.as_bytes())
    }

    #[test]
    fn test_convert_records_scenario_row() {
        let data = "timestamp,is_active,voltage,name\n\
                    \"2024-01-15T10:30:00Z\",\"ИСТИНА\",\"3.7\",\"Sensor-1\"\n";
        let mut sink = RecordingSink::default();

        let report = convert_records(reader_from(data), &mut sink).unwrap();

        assert_eq!(report.n_rows, 1);
        assert_eq!(report.n_cols, 4);
        assert!(report.warnings.is_empty());
        assert_eq!(
            sink.l_headers,
            vec![
                (1, "timestamp".to_string()),
                (2, "is_active".to_string()),
                (3, "voltage".to_string()),
                (4, "name".to_string()),
            ]
        );

        assert_eq!(sink.l_cells.len(), 4);
        assert!(matches!(
            sink.l_cells[0],
            (2, 1, SpecTypedCell { value: EnumCellValue::Timestamp(_), .. })
        ));
        assert_eq!(sink.l_cells[1].2.value, EnumCellValue::Boolean(true));
        assert_eq!(sink.l_cells[2].2.value, EnumCellValue::Fraction(3.7));
        assert_eq!(
            sink.l_cells[3].2.value,
            EnumCellValue::Text("Sensor-1".to_string())
        );
    }

    #[test]
    fn test_convert_records_truncates_short_rows() {
        let data = "timestamp,is_active,voltage,name\na,b,c\n";
        let mut sink = RecordingSink::default();

        let report = convert_records(reader_from(data), &mut sink).unwrap();

        // 4th header column has no value for this row; only 3 cells emitted.
        assert_eq!(sink.l_cells.len(), 3);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_convert_records_truncates_long_rows() {
        let data = "name,reading\nSensor-1,17,extra\n";
        let mut sink = RecordingSink::default();

        let report = convert_records(reader_from(data), &mut sink).unwrap();

        assert_eq!(sink.l_cells.len(), 2);
        assert_eq!(sink.l_cells[1].2.value, EnumCellValue::Integer(17));
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_convert_records_rows_are_numbered_from_two() {
        let data = "name\nfirst\nsecond\n";
        let mut sink = RecordingSink::default();

        convert_records(reader_from(data), &mut sink).unwrap();

        assert_eq!(sink.l_cells[0].0, 2);
        assert_eq!(sink.l_cells[1].0, 3);
    }

    #[test]
    fn test_convert_records_empty_input_is_missing_header() {
        let mut sink = RecordingSink::default();
        let result = convert_records(reader_from(""), &mut sink);
        assert!(matches!(result, Err(EnumConvertError::MissingHeader)));
    }

    #[test]
    fn test_convert_records_header_only_input_writes_no_cells() {
        let data = "timestamp,name\n";
        let mut sink = RecordingSink::default();

        let report = convert_records(reader_from(data), &mut sink).unwrap();

        assert_eq!(report.n_rows, 0);
        assert_eq!(sink.l_headers.len(), 2);
        assert!(sink.l_cells.is_empty());
    }
}
