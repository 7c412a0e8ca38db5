//! # quill-sheets
//!
//! A Rust library for building and formatting spreadsheet documents.
//!
//! Quill-sheets couples a workbook model with a shared style registry:
//! formats are registered once and applied by index to cells, rows, columns,
//! or whole sheets, and the effective format of any cell is resolved on
//! demand through that cascade.
//!
//! ## Features
//!
//! - Workbook and worksheet model with sparse cell storage
//! - Style registry: fonts, fills (solid and gradient), borders, cell
//!   formats, and named styles
//! - Format cascade: cell override, then row, then column, then sheet default
//! - A1-style addressing and range views for bulk edits
//! - Document lifecycle over pluggable storage backends
//!
//! ## Example
//!
//! ```rust
//! use quill_sheets::prelude::*;
//!
//! let mut store = MemoryStore::new();
//!
//! // Create a document and register a header format
//! let mut doc = Document::create(&mut store, "report.sheet", OverwritePolicy::Never).unwrap();
//! let workbook = doc.workbook_mut();
//!
//! let styles = workbook.styles_mut();
//! let bold = styles.fonts_mut().create();
//! styles.fonts_mut().set(bold, Font::new().with_bold(true)).unwrap();
//! let header = styles.cell_formats_mut().create();
//! styles
//!     .cell_formats_mut()
//!     .set(header, CellFormat::new().with_font(bold))
//!     .unwrap();
//!
//! // Fill in the first sheet and style its header row
//! let sheet = workbook.worksheet_mut(0).unwrap();
//! sheet.set_cell_value("A1", "Item").unwrap();
//! sheet.set_cell_value("B1", "Total").unwrap();
//! sheet.set_cell_value("B2", 1280.5).unwrap();
//! sheet.set_row_format(1, header).unwrap();
//!
//! // Every cell in row 1 resolves to the header format, stored or not
//! let resolver = doc.workbook().resolver(0).unwrap();
//! assert_eq!(resolver.resolve("C1").unwrap(), header);
//!
//! doc.save().unwrap();
//! doc.close();
//!
//! // Reopen from the store
//! let doc = Document::open(&mut store, "report.sheet").unwrap();
//! let value = doc.workbook().worksheet(0).unwrap().get_value("B2").unwrap();
//! assert_eq!(value.as_number(), Some(1280.5));
//! ```

pub mod document;
pub mod error;
pub mod prelude;
pub mod store;

// Re-export document types
pub use document::Document;
pub use error::DocumentError;
pub use store::{DocumentStore, MemoryStore, OverwritePolicy};

// Re-export core types
pub use quill_sheets_core::{
    // Style types
    Border,
    BorderEdge,
    BorderTable,
    // Cell types
    Cell,
    CellAddress,
    CellFormat,
    CellFormatTable,
    CellRange,
    CellRangeIterator,
    CellStyle,
    CellStyleTable,
    CellValue,
    Color,
    Column,
    // Error types
    Error,
    Fill,
    FillTable,
    FillType,
    Font,
    FontTable,
    // Cascade resolution
    FormatResolver,
    GradientStop,
    GradientStops,
    GradientType,
    LineStyle,
    // Range views
    Range,
    RangeCell,
    RangeMut,
    Result,
    Row,
    SharedString,
    StyleIndex,
    StyleTable,
    Styles,
    Underline,
    // Main types
    Workbook,
    Worksheet,
    // Constants
    DEFAULT_COLUMN_WIDTH,
    DEFAULT_ROW_HEIGHT,
    MAX_COLS,
    MAX_ROWS,
    MAX_SHEET_NAME_LEN,
};
