//! # quill-sheets-core
//!
//! Core data structures for the quill-sheets spreadsheet library.
//!
//! This crate provides the fundamental types used throughout quill-sheets:
//! - [`CellValue`] - Represents cell values (numbers, strings, booleans)
//! - [`CellAddress`] and [`CellRange`] - 1-based cell addressing and ranges
//! - [`Styles`] - The workbook style registry (fonts, fills, borders, formats)
//! - [`FormatResolver`] - Effective-format resolution through the
//!   cell/row/column/default cascade
//! - [`Workbook`], [`Worksheet`] - The document container and its sheets
//!
//! ## Example
//!
//! ```rust
//! use quill_sheets_core::{CellFormat, Workbook};
//!
//! let mut book = Workbook::new();
//!
//! // Register a bold font and a cell format that applies it
//! let styles = book.styles_mut();
//! let bold = styles.fonts_mut().create();
//! styles.fonts_mut().get_mut(bold).unwrap().bold = true;
//! let header = styles.cell_formats_mut().create();
//! styles
//!     .cell_formats_mut()
//!     .set(header, CellFormat::default().with_font(bold))
//!     .unwrap();
//!
//! // Write data and restyle the whole header row at once
//! let sheet = book.worksheet_mut(0).unwrap();
//! sheet.set_cell_value("A1", "Region").unwrap();
//! sheet.set_cell_value("B1", "Total").unwrap();
//! sheet.set_row_format(1, header).unwrap();
//!
//! let resolver = book.resolver(0).unwrap();
//! assert_eq!(resolver.resolve("B1").unwrap(), header);
//! assert!(resolver.format("A1").unwrap().apply_font);
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod range;
pub mod resolver;
pub mod row;
pub mod style;
pub mod workbook;
pub mod worksheet;

// Flattened re-exports so callers rarely need the module paths
pub use cell::{Cell, CellAddress, CellRange, CellRangeIterator, CellValue, SharedString};
pub use column::Column;
pub use error::{Error, Result};
pub use range::{Range, RangeCell, RangeMut};
pub use resolver::FormatResolver;
pub use row::Row;
pub use workbook::Workbook;
pub use worksheet::{Worksheet, DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT};

// The style vocabulary, re-exported at the root as one flat set
pub use style::{
    Border, BorderEdge, BorderTable, CellFormat, CellFormatTable, CellStyle, CellStyleTable,
    Color, Fill, FillTable, FillType, Font, FontTable, GradientStop, GradientStops, GradientType,
    LineStyle, StyleIndex, StyleTable, Styles, Underline,
};

/// Maximum row number in a worksheet (rows are 1-based)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum column number in a worksheet (columns are 1-based, A=1)
pub const MAX_COLS: u16 = 16_384;

/// Longest allowed sheet name, in characters
pub const MAX_SHEET_NAME_LEN: usize = 31;
