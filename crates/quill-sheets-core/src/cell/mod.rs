//! Cells: values, addressing, and sparse storage
//!
//! This module contains:
//! - [`CellValue`] - What a cell holds (number, text, boolean)
//! - [`CellAddress`] - A1-style position of one cell
//! - [`CellRange`] - A rectangular block of positions
//! - [`Cell`] - A stored cell record: value plus optional format override

mod address;
mod storage;
mod value;

pub use address::{CellAddress, CellRange, CellRangeIterator};
pub use storage::CellStorage;
pub use value::{CellValue, SharedString};

use crate::style::StyleIndex;

/// Complete data for a single cell
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// The cell's value
    pub value: CellValue,
    /// Cell format override, if any
    ///
    /// `None` means the cell has no format of its own; the effective format
    /// comes from its row, column, or the worksheet default.
    pub format: Option<StyleIndex>,
}

impl Cell {
    /// Create a new cell with a value and no format override
    pub fn new(value: CellValue) -> Self {
        Self {
            value,
            format: None,
        }
    }

    /// Create a new cell with a value and a format override
    pub fn with_format(value: CellValue, format: StyleIndex) -> Self {
        Self {
            value,
            format: Some(format),
        }
    }

    /// Create an empty cell
    pub fn empty() -> Self {
        Self {
            value: CellValue::Empty,
            format: None,
        }
    }

    /// Check if this cell is effectively empty (no value and no format override)
    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && self.format.is_none()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}
