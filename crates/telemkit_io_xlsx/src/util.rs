//! Stateless helpers for the XLSX sink.

use telemkit_convert::EnumCellValue;

/// Estimate displayed width units for a string; non-ASCII characters count
/// wider than ASCII ones.
pub fn estimate_unicode_text_width(text: &str) -> usize {
    let n_ascii = text.chars().filter(|chr| chr.is_ascii()).count();
    let n_non_ascii = text.chars().count().saturating_sub(n_ascii);
    n_ascii + (n_non_ascii as f64 * 1.6).round() as usize
}

/// String representation of a typed value used for column-width inference.
pub fn derive_cell_display_text(value: &EnumCellValue) -> String {
    match value {
        EnumCellValue::Timestamp(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        EnumCellValue::Boolean(val) => if *val { "true" } else { "false" }.to_string(),
        EnumCellValue::Integer(val) => val.to_string(),
        EnumCellValue::Fraction(val) => val.to_string(),
        EnumCellValue::Text(val) => val.clone(),
    }
}

/// Convert 1-based sink coordinates to 0-based worksheet coordinates.
pub fn derive_sheet_coords(n_idx_row: u32, n_idx_col: u32) -> Result<(u32, u16), String> {
    if n_idx_row == 0 || n_idx_col == 0 {
        return Err("sink coordinates are 1-based; got a zero index".to_string());
    }
    let n_col = u16::try_from(n_idx_col - 1)
        .map_err(|_| format!("column index overflow: {n_idx_col}"))?;
    Ok((n_idx_row - 1, n_col))
}
