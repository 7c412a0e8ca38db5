//! Sparse cell storage keyed by row and column

use std::collections::BTreeMap;

use super::{Cell, CellValue};
use crate::style::StyleIndex;

/// Sparse, row-major storage for the cells of one worksheet
///
/// Cells live in a two-level BTreeMap, row first and column second, so plain
/// iteration always walks row by row. Writing an empty cell (no value, no
/// format override) removes its entry; the maps never hold blank records,
/// which keeps memory proportional to the cells actually in use.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellStorage {
    rows: BTreeMap<u32, BTreeMap<u16, Cell>>,
}

impl CellStorage {
    /// Create storage with no cells
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a stored cell
    pub fn get(&self, row: u32, col: u16) -> Option<&Cell> {
        self.rows.get(&row).and_then(|cells| cells.get(&col))
    }

    /// Look up a stored cell for mutation
    pub fn get_mut(&mut self, row: u32, col: u16) -> Option<&mut Cell> {
        self.rows.get_mut(&row).and_then(|cells| cells.get_mut(&col))
    }

    /// Store a whole cell record
    ///
    /// An empty record erases the slot instead of occupying it.
    pub fn set(&mut self, row: u32, col: u16, cell: Cell) {
        if cell.is_empty() {
            self.discard(row, col);
        } else {
            self.rows.entry(row).or_default().insert(col, cell);
        }
    }

    /// Replace only the value, keeping any format override
    pub fn set_value(&mut self, row: u32, col: u16, value: CellValue) {
        match self.get_mut(row, col) {
            Some(cell) => {
                cell.value = value;
                if cell.is_empty() {
                    self.discard(row, col);
                }
            }
            None if value.is_empty() => {}
            None => {
                self.rows.entry(row).or_default().insert(col, Cell::new(value));
            }
        }
    }

    /// Replace only the format override, keeping the value
    ///
    /// Clearing the override of a valueless cell erases the cell entirely.
    /// A fresh override on an unstored slot creates a valueless cell, so
    /// formatting survives without data.
    pub fn set_format(&mut self, row: u32, col: u16, format: Option<StyleIndex>) {
        match self.get_mut(row, col) {
            Some(cell) => {
                cell.format = format;
                if cell.is_empty() {
                    self.discard(row, col);
                }
            }
            None => {
                if let Some(index) = format {
                    self.rows
                        .entry(row)
                        .or_default()
                        .insert(col, Cell::with_format(CellValue::Empty, index));
                }
            }
        }
    }

    /// Take a cell out of storage
    pub fn remove(&mut self, row: u32, col: u16) -> Option<Cell> {
        self.discard(row, col)
    }

    /// Number of stored cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Bounding box of stored cells as (min_row, min_col, max_row, max_col)
    pub fn used_bounds(&self) -> Option<(u32, u16, u32, u16)> {
        let min_row = *self.rows.keys().next()?;
        let max_row = *self.rows.keys().next_back()?;

        let mut cols: Option<(u16, u16)> = None;
        for row_map in self.rows.values() {
            // Row maps are never left empty, so both lookups yield
            let (first, last) = match (row_map.keys().next(), row_map.keys().next_back()) {
                (Some(&first), Some(&last)) => (first, last),
                _ => continue,
            };
            cols = Some(match cols {
                Some((lo, hi)) => (lo.min(first), hi.max(last)),
                None => (first, last),
            });
        }

        let (min_col, max_col) = cols?;
        Some((min_row, min_col, max_row, max_col))
    }

    /// Walk every stored cell in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u16, &Cell)> {
        self.rows.iter().flat_map(|(&row, row_map)| {
            row_map.iter().map(move |(&col, cell)| (row, col, cell))
        })
    }

    // Removal that also prunes a row map once its last cell is gone
    fn discard(&mut self, row: u32, col: u16) -> Option<Cell> {
        let row_map = self.rows.get_mut(&row)?;
        let removed = row_map.remove(&col);
        if row_map.is_empty() {
            self.rows.remove(&row);
        }
        removed
    }
}
