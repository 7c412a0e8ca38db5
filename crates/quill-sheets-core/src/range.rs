//! Borrowed views over rectangular worksheet regions

use crate::cell::{Cell, CellAddress, CellRange, CellValue};
use crate::error::{Error, Result};
use crate::style::StyleIndex;
use crate::worksheet::Worksheet;

/// A read-only view of one rectangular region of a worksheet
///
/// Cell positions within the view are 0-based offsets from its top-left
/// corner, independent of where the region sits on the sheet.
pub struct Range<'a> {
    worksheet: &'a Worksheet,
    range: CellRange,
}

impl<'a> Range<'a> {
    /// Wrap a region of the given worksheet
    pub fn new(worksheet: &'a Worksheet, range: CellRange) -> Self {
        Self { worksheet, range }
    }

    /// The region this view covers
    pub fn range(&self) -> CellRange {
        self.range
    }

    /// Height of the view in rows
    pub fn row_count(&self) -> u32 {
        self.range.row_count()
    }

    /// Width of the view in columns
    pub fn col_count(&self) -> u16 {
        self.range.col_count()
    }

    /// Total number of cells covered
    pub fn cell_count(&self) -> u64 {
        self.range.cell_count()
    }

    /// Look up a stored cell by offset within the view
    ///
    /// Returns None for offsets outside the view and for cells never written.
    pub fn cell(&self, row: u32, col: u16) -> Option<&'a Cell> {
        let addr = self.offset_address(row, col)?;
        self.worksheet.cell_at(addr.row, addr.col)
    }

    /// Read a cell value by offset within the view
    ///
    /// Unstored cells and offsets outside the view read as
    /// [`CellValue::Empty`].
    pub fn value(&self, row: u32, col: u16) -> CellValue {
        self.cell(row, col)
            .map_or(CellValue::Empty, |c| c.value.clone())
    }

    /// Visit every cell in the view, row by row
    pub fn cells(&self) -> impl Iterator<Item = RangeCell<'a>> + '_ {
        self.range.cells().map(move |addr| RangeCell {
            cell: self.worksheet.cell_at(addr.row, addr.col),
            address: addr,
        })
    }

    /// The A1-style address of the viewed region
    pub fn address(&self) -> String {
        self.range.to_a1_string()
    }

    fn offset_address(&self, row: u32, col: u16) -> Option<CellAddress> {
        if row < self.row_count() && col < self.col_count() {
            Some(CellAddress::new(
                self.range.start.row + row,
                self.range.start.col + col,
            ))
        } else {
            None
        }
    }
}

/// A mutable view of one rectangular region of a worksheet
pub struct RangeMut<'a> {
    worksheet: &'a mut Worksheet,
    range: CellRange,
}

impl<'a> RangeMut<'a> {
    /// Wrap a region of the given worksheet for editing
    pub fn new(worksheet: &'a mut Worksheet, range: CellRange) -> Self {
        Self { worksheet, range }
    }

    /// The region this view covers
    pub fn range(&self) -> CellRange {
        self.range
    }

    /// Write a cell value by offset within the view
    ///
    /// Offsets outside the view are rejected, never redirected to cells
    /// beyond the region.
    pub fn set_value<V: Into<CellValue>>(&mut self, row: u32, col: u16, value: V) -> Result<()> {
        let addr = self.offset_address(row, col)?;
        self.worksheet.set_cell_value_at(addr.row, addr.col, value)
    }

    /// Write the same value into every cell of the view
    pub fn fill<V: Into<CellValue> + Clone>(&mut self, value: V) -> Result<()> {
        self.worksheet.fill_range(&self.range, value)
    }

    /// Stamp the same format override on every cell (values untouched)
    pub fn set_format(&mut self, format: StyleIndex) -> Result<()> {
        self.worksheet.format_range(&self.range, format)
    }

    /// Remove every cell in the view
    pub fn clear(&mut self) -> Result<()> {
        self.worksheet.clear_range(&self.range)
    }

    fn offset_address(&self, row: u32, col: u16) -> Result<CellAddress> {
        if row < self.range.row_count() && col < self.range.col_count() {
            Ok(CellAddress::new(
                self.range.start.row + row,
                self.range.start.col + col,
            ))
        } else {
            Err(Error::InvalidRange(format!(
                "offset ({row}, {col}) lies outside {}",
                self.range.to_a1_string()
            )))
        }
    }
}

/// One visited cell during range iteration
pub struct RangeCell<'a> {
    /// Absolute sheet address of the visited position
    pub address: CellAddress,
    /// The stored cell, if this position was ever written
    pub cell: Option<&'a Cell>,
}

impl<'a> RangeCell<'a> {
    /// The cell value, [`CellValue::Empty`] for unstored positions
    pub fn value(&self) -> CellValue {
        self.cell.map_or(CellValue::Empty, |c| c.value.clone())
    }

    /// The cell's format override, if one is set
    pub fn format(&self) -> Option<StyleIndex> {
        self.cell.and_then(|c| c.format)
    }

    /// Whether nothing is stored at this position
    pub fn is_empty(&self) -> bool {
        self.cell.map_or(true, |c| c.value.is_empty())
    }

    /// Row number of the visited position
    pub fn row(&self) -> u32 {
        self.address.row
    }

    /// Column number of the visited position
    pub fn col(&self) -> u16 {
        self.address.col
    }
}
