//! Error types for document operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type for document operations
pub type Result<T> = std::result::Result<T, DocumentError>;

/// Errors raised by the document lifecycle
#[derive(Error, Debug)]
pub enum DocumentError {
    /// A document already exists at the target path
    #[error("document already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// No document is stored at the path
    #[error("document not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Error from the workbook model
    #[error(transparent)]
    Core(#[from] quill_sheets_core::Error),

    /// I/O error from the backing store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
