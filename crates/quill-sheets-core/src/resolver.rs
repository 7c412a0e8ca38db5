//! Effective format resolution

use crate::cell::CellAddress;
use crate::error::Result;
use crate::style::{CellFormat, StyleIndex, Styles};
use crate::worksheet::Worksheet;

/// Resolves the effective format of cells in one worksheet
///
/// Precedence: cell override first, then row format, then column format,
/// then the worksheet default. Resolution is lazy and nothing is cached,
/// so restyling a row or column is an O(1) write that is visible on the
/// next query.
///
/// # Examples
/// ```
/// use quill_sheets_core::{FormatResolver, Workbook};
///
/// let mut wb = Workbook::new();
/// let bold = wb.styles_mut().cell_formats_mut().create();
/// wb.worksheet_mut(0).unwrap().set_row_format(2, bold).unwrap();
///
/// let resolver = wb.resolver(0).unwrap();
/// assert_eq!(resolver.resolve("A2").unwrap(), bold);
/// ```
#[derive(Debug)]
pub struct FormatResolver<'a> {
    worksheet: &'a Worksheet,
    styles: &'a Styles,
}

impl<'a> FormatResolver<'a> {
    /// Create a resolver over a worksheet and the workbook's style registry
    pub fn new(worksheet: &'a Worksheet, styles: &'a Styles) -> Self {
        Self { worksheet, styles }
    }

    /// Resolve the effective format index by address string
    pub fn resolve(&self, address: &str) -> Result<StyleIndex> {
        let addr = CellAddress::parse(address)?;
        self.resolve_at(addr.row, addr.col)
    }

    /// Resolve the effective format index by 1-based row and column numbers
    ///
    /// Works for any in-bounds position, stored cell or not.
    pub fn resolve_at(&self, row: u32, col: u16) -> Result<StyleIndex> {
        Worksheet::validate_cell_position(row, col)?;

        let index = self
            .worksheet
            .cell_format_at(row, col)
            .or_else(|| self.worksheet.row_format(row))
            .or_else(|| self.worksheet.column_format(col))
            .unwrap_or(self.worksheet.default_format());

        Ok(index)
    }

    /// Resolve the effective format record by address string
    pub fn format(&self, address: &str) -> Result<&'a CellFormat> {
        let addr = CellAddress::parse(address)?;
        self.format_at(addr.row, addr.col)
    }

    /// Resolve the effective format record by 1-based row and column numbers
    pub fn format_at(&self, row: u32, col: u16) -> Result<&'a CellFormat> {
        let index = self.resolve_at(row, col)?;
        self.styles.cell_formats().get(index)
    }
}
