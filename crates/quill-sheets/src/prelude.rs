//! Prelude module - common imports for quill-sheets users
//!
//! ```rust
//! use quill_sheets::prelude::*;
//! ```

pub use crate::{
    // Style types
    Border,
    BorderEdge,
    CellAddress,
    CellFormat,
    CellRange,
    CellStyle,
    // Cell types
    CellValue,
    Color,
    // Document types
    Document,
    DocumentError,
    DocumentStore,
    // Error types
    Error,
    Fill,
    FillType,
    Font,
    // Cascade resolution
    FormatResolver,
    GradientStop,
    GradientType,
    LineStyle,
    MemoryStore,
    OverwritePolicy,
    Result,
    StyleIndex,
    Styles,
    Underline,
    // Main types
    Workbook,
    Worksheet,
};
