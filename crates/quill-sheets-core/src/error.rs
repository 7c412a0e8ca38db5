//! Error types for quill-sheets-core

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong inside the workbook model
#[derive(Debug, Error)]
pub enum Error {
    /// Style index references a slot that was never allocated
    #[error("style index {index} is out of range for a table of {len} entries")]
    InvalidIndex {
        /// The offending index
        index: u32,
        /// Number of allocated entries in the target table
        len: u32,
    },

    /// Malformed A1 notation or out-of-range coordinates
    #[error("bad cell address: {0}")]
    InvalidAddress(String),

    /// Malformed range notation or an offset outside a range view
    #[error("bad cell range: {0}")]
    InvalidRange(String),

    /// Mutation targets an attribute of a fill mode the fill is not in
    #[error("fill is {actual}, but the operation needs a {expected} fill")]
    IncompatibleFillType {
        /// Mode the operation requires
        expected: crate::style::FillType,
        /// Mode the fill is actually in
        actual: crate::style::FillType,
    },

    /// Sheet index past the end of the workbook
    #[error("sheet index {index} is out of range for a workbook of {count} sheets")]
    SheetIndexOutOfBounds {
        /// The offending index
        index: usize,
        /// Number of worksheets in the workbook
        count: usize,
    },

    /// No sheet carries the requested name
    #[error("no sheet named '{0}'")]
    SheetNotFound(String),

    /// Sheet name rejected by the naming rules
    #[error("invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Requested sheet name is already taken, ignoring case
    #[error("sheet name '{0}' is already taken")]
    DuplicateSheetName(String),
}
