//! Worksheet type

use std::collections::BTreeMap;

use crate::cell::{Cell, CellAddress, CellRange, CellStorage, CellValue};
use crate::column::Column;
use crate::error::{Error, Result};
use crate::range::{Range, RangeMut};
use crate::row::Row;
use crate::style::StyleIndex;
use crate::{MAX_COLS, MAX_ROWS};

/// Default row height in points
pub const DEFAULT_ROW_HEIGHT: f64 = 15.0;

/// Default column width in characters
pub const DEFAULT_COLUMN_WIDTH: f64 = 8.43;

/// One sheet of a workbook
///
/// Cells, rows, and columns are all stored sparsely: untouched positions
/// cost nothing. Cell formats are indices into the workbook's style
/// registry; the worksheet itself never dereferences them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Cell storage
    cells: CellStorage,
    /// Rows with custom settings, keyed by 1-based row number
    rows: BTreeMap<u32, Row>,
    /// Columns with custom settings, keyed by 1-based column number
    columns: BTreeMap<u16, Column>,
    /// Format applied where neither cell, row, nor column has one
    default_format: StyleIndex,
}

impl Worksheet {
    /// Create an empty sheet under the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: CellStorage::new(),
            rows: BTreeMap::new(),
            columns: BTreeMap::new(),
            default_format: StyleIndex::default(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    ///
    /// Renames go through the workbook, which enforces name validation
    /// and uniqueness.
    pub(crate) fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    // === Reading cells ===

    /// Get a cell by address string (e.g., "A1")
    pub fn cell(&self, address: &str) -> Result<Option<&Cell>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cells.get(addr.row, addr.col))
    }

    /// Get a cell by 1-based row and column numbers
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells.get(row, col)
    }

    /// Get a mutable cell by 1-based row and column numbers
    pub fn cell_at_mut(&mut self, row: u32, col: u16) -> Option<&mut Cell> {
        self.cells.get_mut(row, col)
    }

    /// Read a cell value by address string; unstored cells read as empty
    pub fn get_value(&self, address: &str) -> Result<CellValue> {
        let addr = CellAddress::parse(address)?;
        Ok(self.get_value_at(addr.row, addr.col))
    }

    /// Read a cell value by 1-based row and column numbers
    pub fn get_value_at(&self, row: u32, col: u16) -> CellValue {
        self.cells
            .get(row, col)
            .map_or(CellValue::Empty, |c| c.value.clone())
    }

    /// Get a cell's format override by address string
    ///
    /// Returns None if the cell has no format of its own. The effective
    /// format of such a cell comes from the row/column/default cascade;
    /// see [`FormatResolver`](crate::resolver::FormatResolver).
    pub fn cell_format(&self, address: &str) -> Result<Option<StyleIndex>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cell_format_at(addr.row, addr.col))
    }

    /// Get a cell's format override by 1-based row and column numbers
    pub fn cell_format_at(&self, row: u32, col: u16) -> Option<StyleIndex> {
        self.cells.get(row, col).and_then(|c| c.format)
    }

    // === Writing cells ===

    /// Write a cell value by address string
    pub fn set_cell_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_value_at(addr.row, addr.col, value)
    }

    /// Write a cell value by 1-based row and column numbers
    pub fn set_cell_value_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u16,
        value: V,
    ) -> Result<()> {
        Self::validate_cell_position(row, col)?;
        self.cells.set_value(row, col, value.into());
        Ok(())
    }

    /// Set a cell format override by address string
    pub fn set_cell_format(&mut self, address: &str, format: StyleIndex) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_format_at(addr.row, addr.col, format)
    }

    /// Set a cell format override by 1-based row and column numbers
    pub fn set_cell_format_at(&mut self, row: u32, col: u16, format: StyleIndex) -> Result<()> {
        Self::validate_cell_position(row, col)?;
        self.cells.set_format(row, col, Some(format));
        Ok(())
    }

    /// Remove a cell's format override by address string
    ///
    /// The cell falls back to its row, column, or the sheet default.
    pub fn clear_cell_format(&mut self, address: &str) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.clear_cell_format_at(addr.row, addr.col);
        Ok(())
    }

    /// Remove a cell's format override by 1-based row and column numbers
    pub fn clear_cell_format_at(&mut self, row: u32, col: u16) {
        self.cells.set_format(row, col, None);
    }

    /// Clear a cell (value and format override)
    pub fn clear_cell(&mut self, address: &str) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.cells.remove(addr.row, addr.col);
        Ok(())
    }

    /// Clear a cell by 1-based row and column numbers
    pub fn clear_cell_at(&mut self, row: u32, col: u16) {
        self.cells.remove(row, col);
    }

    // === Ranges ===

    /// Bounding rectangle of every stored cell
    pub fn used_range(&self) -> Option<CellRange> {
        let (min_row, min_col, max_row, max_col) = self.cells.used_bounds()?;
        Some(CellRange::from_indices(min_row, min_col, max_row, max_col))
    }

    /// Get a read-only view of a range (e.g., "A1:D10")
    pub fn range(&self, spec: &str) -> Result<Range<'_>> {
        let range = CellRange::parse(spec)?;
        Self::validate_range(&range)?;
        Ok(Range::new(self, range))
    }

    /// Get a mutable view of a range (e.g., "A1:D10")
    pub fn range_mut(&mut self, spec: &str) -> Result<RangeMut<'_>> {
        let range = CellRange::parse(spec)?;
        Self::validate_range(&range)?;
        Ok(RangeMut::new(self, range))
    }

    /// Get a read-only view of the rectangle between two corner cells
    ///
    /// The corners may be given in any order.
    pub fn range_corners(&self, corner_a: &str, corner_b: &str) -> Result<Range<'_>> {
        let a = CellAddress::parse(corner_a)?;
        let b = CellAddress::parse(corner_b)?;
        let range = a.to(b);
        Self::validate_range(&range)?;
        Ok(Range::new(self, range))
    }

    /// Get a mutable view of the rectangle between two corner cells
    pub fn range_corners_mut(&mut self, corner_a: &str, corner_b: &str) -> Result<RangeMut<'_>> {
        let a = CellAddress::parse(corner_a)?;
        let b = CellAddress::parse(corner_b)?;
        let range = a.to(b);
        Self::validate_range(&range)?;
        Ok(RangeMut::new(self, range))
    }

    /// Write one value into every cell of a range
    ///
    /// The range is validated up front; on error no cell is written.
    pub fn fill_range<V: Into<CellValue> + Clone>(
        &mut self,
        range: &CellRange,
        value: V,
    ) -> Result<()> {
        Self::validate_range(range)?;
        let value = value.into();
        for addr in range.cells() {
            self.cells.set_value(addr.row, addr.col, value.clone());
        }
        Ok(())
    }

    /// Set the same format override on all cells in a range
    ///
    /// The range is validated up front; on error no cell is written.
    /// Values are untouched.
    pub fn format_range(&mut self, range: &CellRange, format: StyleIndex) -> Result<()> {
        Self::validate_range(range)?;
        for addr in range.cells() {
            self.cells.set_format(addr.row, addr.col, Some(format));
        }
        Ok(())
    }

    /// Remove every cell in a range
    ///
    /// The range is validated up front; on error no cell is removed.
    pub fn clear_range(&mut self, range: &CellRange) -> Result<()> {
        Self::validate_range(range)?;
        for addr in range.cells() {
            self.cells.remove(addr.row, addr.col);
        }
        Ok(())
    }

    // === Rows ===

    /// Get row height (returns the default if not customized)
    pub fn row_height(&self, row: u32) -> f64 {
        self.rows
            .get(&row)
            .and_then(|r| r.height)
            .unwrap_or(DEFAULT_ROW_HEIGHT)
    }

    /// Set row height
    ///
    /// Setting the default height reverts the row to the default.
    pub fn set_row_height(&mut self, row: u32, height: f64) -> Result<()> {
        Self::validate_row(row)?;
        let props = self.rows.entry(row).or_default();
        if (height - DEFAULT_ROW_HEIGHT).abs() < 0.001 {
            props.height = None;
        } else {
            props.height = Some(height);
        }
        self.prune_row(row);
        Ok(())
    }

    /// Whether the row is hidden
    pub fn is_row_hidden(&self, row: u32) -> bool {
        self.rows.get(&row).map_or(false, |r| r.hidden)
    }

    /// Hide or show the row
    pub fn set_row_hidden(&mut self, row: u32, hidden: bool) -> Result<()> {
        Self::validate_row(row)?;
        self.rows.entry(row).or_default().hidden = hidden;
        self.prune_row(row);
        Ok(())
    }

    /// Get the row-level format, if any
    pub fn row_format(&self, row: u32) -> Option<StyleIndex> {
        self.rows.get(&row).and_then(|r| r.format)
    }

    /// Set the row-level format
    ///
    /// Every cell in the row without its own format resolves to this
    /// format from now on. Cells are not touched, so the cost does not
    /// depend on how many of them the row has.
    pub fn set_row_format(&mut self, row: u32, format: StyleIndex) -> Result<()> {
        Self::validate_row(row)?;
        self.rows.entry(row).or_default().format = Some(format);
        Ok(())
    }

    /// Remove the row-level format
    pub fn clear_row_format(&mut self, row: u32) -> Result<()> {
        Self::validate_row(row)?;
        if let Some(props) = self.rows.get_mut(&row) {
            props.format = None;
        }
        self.prune_row(row);
        Ok(())
    }

    /// Iterate over rows with custom settings
    pub fn custom_rows(&self) -> impl Iterator<Item = (u32, &Row)> {
        self.rows.iter().map(|(&row, props)| (row, props))
    }

    // === Columns ===

    /// Get column width (returns the default if not customized)
    pub fn column_width(&self, col: u16) -> f64 {
        self.columns
            .get(&col)
            .and_then(|c| c.width)
            .unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    /// Set column width
    ///
    /// Setting the default width reverts the column to the default.
    pub fn set_column_width(&mut self, col: u16, width: f64) -> Result<()> {
        Self::validate_column(col)?;
        let props = self.columns.entry(col).or_default();
        if (width - DEFAULT_COLUMN_WIDTH).abs() < 0.001 {
            props.width = None;
        } else {
            props.width = Some(width);
        }
        self.prune_column(col);
        Ok(())
    }

    /// Whether the column is hidden
    pub fn is_column_hidden(&self, col: u16) -> bool {
        self.columns.get(&col).map_or(false, |c| c.hidden)
    }

    /// Hide or show the column
    pub fn set_column_hidden(&mut self, col: u16, hidden: bool) -> Result<()> {
        Self::validate_column(col)?;
        self.columns.entry(col).or_default().hidden = hidden;
        self.prune_column(col);
        Ok(())
    }

    /// Get the column-level format, if any
    pub fn column_format(&self, col: u16) -> Option<StyleIndex> {
        self.columns.get(&col).and_then(|c| c.format)
    }

    /// Set the column-level format
    pub fn set_column_format(&mut self, col: u16, format: StyleIndex) -> Result<()> {
        Self::validate_column(col)?;
        self.columns.entry(col).or_default().format = Some(format);
        Ok(())
    }

    /// Remove the column-level format
    pub fn clear_column_format(&mut self, col: u16) -> Result<()> {
        Self::validate_column(col)?;
        if let Some(props) = self.columns.get_mut(&col) {
            props.format = None;
        }
        self.prune_column(col);
        Ok(())
    }

    /// Iterate over columns with custom settings
    pub fn custom_columns(&self) -> impl Iterator<Item = (u16, &Column)> {
        self.columns.iter().map(|(&col, props)| (col, props))
    }

    // === Default Format ===

    /// Get the worksheet default format
    pub fn default_format(&self) -> StyleIndex {
        self.default_format
    }

    /// Set the worksheet default format
    ///
    /// The base of the cascade: cells with no cell, row, or column
    /// format resolve to this.
    pub fn set_default_format(&mut self, format: StyleIndex) {
        self.default_format = format;
    }

    // === Internal ===

    /// Validate a 1-based row number
    pub(crate) fn validate_row(row: u32) -> Result<()> {
        if row == 0 || row > MAX_ROWS {
            return Err(Error::InvalidAddress(format!(
                "row {row} is out of range 1..={MAX_ROWS}"
            )));
        }
        Ok(())
    }

    /// Validate a 1-based column number
    pub(crate) fn validate_column(col: u16) -> Result<()> {
        if col == 0 || col > MAX_COLS {
            return Err(Error::InvalidAddress(format!(
                "column {col} is out of range 1..={MAX_COLS}"
            )));
        }
        Ok(())
    }

    /// Validate a 1-based cell position
    pub(crate) fn validate_cell_position(row: u32, col: u16) -> Result<()> {
        Self::validate_row(row)?;
        Self::validate_column(col)
    }

    /// Validate both corners of a range
    pub(crate) fn validate_range(range: &CellRange) -> Result<()> {
        Self::validate_cell_position(range.start.row, range.start.col)?;
        Self::validate_cell_position(range.end.row, range.end.col)
    }

    fn prune_row(&mut self, row: u32) {
        if let Some(props) = self.rows.get(&row) {
            if !props.has_custom_settings() {
                self.rows.remove(&row);
            }
        }
    }

    fn prune_column(&mut self, col: u16) {
        if let Some(props) = self.columns.get(&col) {
            if !props.has_custom_settings() {
                self.columns.remove(&col);
            }
        }
    }

    /// Number of stored cells
    pub fn cell_count(&self) -> usize {
        self.cells.cell_count()
    }

    /// Whether the sheet stores no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Walk every stored cell in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u16, &Cell)> {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_worksheet() {
        let ws = Worksheet::new("Data");
        assert_eq!(ws.name(), "Data");
        assert!(ws.is_empty());
        assert_eq!(ws.default_format(), StyleIndex::default());
    }

    #[test]
    fn test_set_cell_values() {
        let mut ws = Worksheet::new("Data");

        ws.set_cell_value("A1", "north").unwrap();
        ws.set_cell_value("B1", 19.5).unwrap();
        ws.set_cell_value("A2", true).unwrap();

        assert_eq!(ws.get_value("A1").unwrap().as_string(), Some("north"));
        assert_eq!(ws.get_value("B1").unwrap().as_number(), Some(19.5));
        assert_eq!(ws.get_value("A2").unwrap().as_bool(), Some(true));
        assert_eq!(ws.cell_count(), 3);
    }

    #[test]
    fn test_out_of_bounds_positions_rejected() {
        let mut ws = Worksheet::new("Data");

        assert!(ws.set_cell_value_at(0, 1, 1.0).is_err());
        assert!(ws.set_cell_value_at(1, 0, 1.0).is_err());
        assert!(ws.set_cell_value_at(MAX_ROWS + 1, 1, 1.0).is_err());
        assert!(ws.set_cell_format_at(1, MAX_COLS + 1, StyleIndex::default()).is_err());
        assert!(ws.set_row_height(0, 20.0).is_err());
        assert!(ws.set_column_width(0, 12.0).is_err());

        assert!(ws.is_empty());
    }

    #[test]
    fn test_used_range() {
        let mut ws = Worksheet::new("Data");

        assert!(ws.used_range().is_none());

        ws.set_cell_value_at(4, 2, "a").unwrap();
        ws.set_cell_value_at(9, 6, "b").unwrap();

        assert_eq!(ws.used_range(), Some(CellRange::from_indices(4, 2, 9, 6)));
    }

    #[test]
    fn test_row_column_dimensions() {
        let mut ws = Worksheet::new("Data");

        // Default values
        assert!((ws.row_height(1) - DEFAULT_ROW_HEIGHT).abs() < 0.001);
        assert!((ws.column_width(1) - DEFAULT_COLUMN_WIDTH).abs() < 0.001);

        // Custom values
        ws.set_row_height(6, 24.0).unwrap();
        ws.set_column_width(4, 15.5).unwrap();

        assert!((ws.row_height(6) - 24.0).abs() < 0.001);
        assert!((ws.column_width(4) - 15.5).abs() < 0.001);

        // Reverting to the default removes the stored record
        ws.set_row_height(6, DEFAULT_ROW_HEIGHT).unwrap();
        ws.set_column_width(4, DEFAULT_COLUMN_WIDTH).unwrap();
        assert_eq!(ws.custom_rows().count(), 0);
        assert_eq!(ws.custom_columns().count(), 0);
    }

    #[test]
    fn test_row_format_set_and_clear() {
        let mut ws = Worksheet::new("Data");
        let format = StyleIndex::default();

        assert!(ws.row_format(4).is_none());

        ws.set_row_format(4, format).unwrap();
        assert_eq!(ws.row_format(4), Some(format));
        assert_eq!(ws.custom_rows().count(), 1);

        ws.clear_row_format(4).unwrap();
        assert!(ws.row_format(4).is_none());
        assert_eq!(ws.custom_rows().count(), 0);
    }

    #[test]
    fn test_fill_range_rejects_bad_range_without_writes() {
        let mut ws = Worksheet::new("Data");

        let bad = CellRange::from_indices(0, 1, 3, 3);
        assert!(ws.fill_range(&bad, 1.0).is_err());
        assert!(ws.is_empty());

        let bad = CellRange::from_indices(1, 1, MAX_ROWS + 1, 3);
        assert!(ws.fill_range(&bad, 1.0).is_err());
        assert!(ws.is_empty());
    }

    #[test]
    fn test_format_range_sets_overrides_only() {
        let mut ws = Worksheet::new("Data");
        let format = StyleIndex::default();

        ws.set_cell_value("B2", 7).unwrap();

        let range = CellRange::parse("A1:B2").unwrap();
        ws.format_range(&range, format).unwrap();

        // Every cell in the range now has the override
        for addr in range.cells() {
            assert_eq!(ws.cell_format_at(addr.row, addr.col), Some(format));
        }
        // Values are untouched
        assert_eq!(ws.get_value("B2").unwrap().as_number(), Some(7.0));
    }

    #[test]
    fn test_clear_cell_format_keeps_value() {
        let mut ws = Worksheet::new("Data");

        ws.set_cell_value("A1", "keep").unwrap();
        ws.set_cell_format("A1", StyleIndex::default()).unwrap();
        assert!(ws.cell_format("A1").unwrap().is_some());

        ws.clear_cell_format("A1").unwrap();
        assert!(ws.cell_format("A1").unwrap().is_none());
        assert_eq!(ws.get_value("A1").unwrap().as_string(), Some("keep"));
    }
}
