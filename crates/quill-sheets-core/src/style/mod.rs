//! Cell styling types
//!
//! This module contains the style registry and its record types:
//! - [`Styles`] - Registry owning every style table of a workbook
//! - [`StyleTable`] / [`StyleIndex`] - Append-only record storage
//! - [`Font`] - Font settings
//! - [`Fill`] - Background fill (none, solid, or gradient)
//! - [`Border`] - Cell borders
//! - [`CellFormat`] - Aggregate of font/fill/border indices
//! - [`CellStyle`] - Named preset built on one cell format

mod border;
mod cell_format;
mod cell_style;
mod color;
mod fill;
mod font;
mod table;

pub use border::{Border, BorderEdge, LineStyle};
pub use cell_format::CellFormat;
pub use cell_style::CellStyle;
pub use color::Color;
pub use fill::{Fill, FillType, GradientStop, GradientStops, GradientType};
pub use font::{Font, Underline};
pub use table::{StyleIndex, StyleTable};

/// Table of font records
pub type FontTable = StyleTable<Font>;
/// Table of fill records
pub type FillTable = StyleTable<Fill>;
/// Table of border records
pub type BorderTable = StyleTable<Border>;
/// Table of cell format records
pub type CellFormatTable = StyleTable<CellFormat>;
/// Table of named cell style records
pub type CellStyleTable = StyleTable<CellStyle>;

/// Style registry for one workbook
///
/// Owns every style table. Records are shared by index: a cell format
/// points into the font, fill, and border tables; cells, rows, and columns
/// point into the cell format table; named styles point into a separate
/// style-format table. Entry 0 of each table is a default record created
/// at construction, so default indices always resolve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Styles {
    fonts: FontTable,
    fills: FillTable,
    borders: BorderTable,
    cell_style_formats: CellFormatTable,
    cell_formats: CellFormatTable,
    cell_styles: CellStyleTable,
}

impl Styles {
    /// Create a new registry with default entries at index 0
    ///
    /// The named-style table is seeded with the built-in "Normal" style,
    /// pointing at style-format 0.
    pub fn new() -> Self {
        let mut styles = Self {
            fonts: StyleTable::new(),
            fills: StyleTable::new(),
            borders: StyleTable::new(),
            cell_style_formats: StyleTable::new(),
            cell_formats: StyleTable::new(),
            cell_styles: StyleTable::new(),
        };

        styles.fonts.create();
        styles.fills.create();
        styles.borders.create();
        let normal_format = styles.cell_style_formats.create();
        styles.cell_formats.create();
        styles
            .cell_styles
            .insert(CellStyle::new("Normal", normal_format));

        styles
    }

    /// Get the font table
    pub fn fonts(&self) -> &FontTable {
        &self.fonts
    }

    /// Get the font table for mutation
    pub fn fonts_mut(&mut self) -> &mut FontTable {
        &mut self.fonts
    }

    /// Get the fill table
    pub fn fills(&self) -> &FillTable {
        &self.fills
    }

    /// Get the fill table for mutation
    pub fn fills_mut(&mut self) -> &mut FillTable {
        &mut self.fills
    }

    /// Get the border table
    pub fn borders(&self) -> &BorderTable {
        &self.borders
    }

    /// Get the border table for mutation
    pub fn borders_mut(&mut self) -> &mut BorderTable {
        &mut self.borders
    }

    /// Get the cell format table (per-cell formats)
    pub fn cell_formats(&self) -> &CellFormatTable {
        &self.cell_formats
    }

    /// Get the cell format table for mutation
    pub fn cell_formats_mut(&mut self) -> &mut CellFormatTable {
        &mut self.cell_formats
    }

    /// Get the style-format table (formats backing named styles)
    pub fn cell_style_formats(&self) -> &CellFormatTable {
        &self.cell_style_formats
    }

    /// Get the style-format table for mutation
    pub fn cell_style_formats_mut(&mut self) -> &mut CellFormatTable {
        &mut self.cell_style_formats
    }

    /// Get the named style table
    pub fn cell_styles(&self) -> &CellStyleTable {
        &self.cell_styles
    }

    /// Get the named style table for mutation
    pub fn cell_styles_mut(&mut self) -> &mut CellStyleTable {
        &mut self.cell_styles
    }

    /// Look up a named style by its display name
    pub fn cell_style_by_name(&self, name: &str) -> Option<(StyleIndex, &CellStyle)> {
        self.cell_styles.iter().find(|(_, style)| style.name == name)
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::new()
    }
}
