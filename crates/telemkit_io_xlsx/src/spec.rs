//! Cell-format model for the XLSX sink.

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Declarative cell format, converted to a `rust_xlsxwriter` format at write
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecCellFormat {
    /// Bold style.
    pub bold: Option<bool>,
    /// Horizontal alignment.
    pub align: Option<String>,
    /// Vertical alignment.
    pub valign: Option<String>,
    /// Number format code.
    pub num_format: Option<String>,
    /// Background fill color.
    pub bg_color: Option<String>,
    /// Font color.
    pub font_color: Option<String>,
}

impl SpecCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            bold: other.bold.or(self.bold),
            align: other.align.clone().or_else(|| self.align.clone()),
            valign: other.valign.clone().or_else(|| self.valign.clone()),
            num_format: other.num_format.clone().or_else(|| self.num_format.clone()),
            bg_color: other.bg_color.clone().or_else(|| self.bg_color.clone()),
            font_color: other
                .font_color
                .clone()
                .or_else(|| self.font_color.clone()),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_right_side_wins_only_when_set() {
        let base = SpecCellFormat {
            valign: Some("vcenter".to_string()),
            align: Some("left".to_string()),
            ..Default::default()
        };
        let merged = base.with_(SpecCellFormat {
            align: Some("center".to_string()),
            bold: Some(true),
            ..Default::default()
        });

        assert_eq!(merged.align.as_deref(), Some("center"));
        assert_eq!(merged.valign.as_deref(), Some("vcenter"));
        assert_eq!(merged.bold, Some(true));
    }
}
