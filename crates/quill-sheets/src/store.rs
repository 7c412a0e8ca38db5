//! Storage backends for documents
//!
//! A [`DocumentStore`] persists workbooks keyed by path. The crate ships
//! [`MemoryStore`], which keeps snapshots in a map; file-backed stores plug
//! in through the same trait.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use quill_sheets_core::Workbook;

use crate::error::{DocumentError, Result};

/// What to do when creating a document at a path that is already taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    /// Fail with [`DocumentError::AlreadyExists`]
    #[default]
    Never,
    /// Replace the stored document
    Force,
}

/// Backend that persists workbooks by path
pub trait DocumentStore {
    /// Create a new empty workbook at the path and persist it
    fn create(&mut self, path: &Path, policy: OverwritePolicy) -> Result<Workbook>;

    /// Persist a workbook at the path, replacing any previous contents
    fn save(&mut self, path: &Path, workbook: &Workbook) -> Result<()>;

    /// Load the workbook stored at the path
    fn load(&mut self, path: &Path) -> Result<Workbook>;
}

/// In-memory document store
///
/// Holds workbook snapshots keyed by path. Saving clones the workbook into
/// the map, so later edits to an open document do not leak into the store
/// until the next save.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: HashMap<PathBuf, Workbook>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a document is stored at the path
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.documents.contains_key(path.as_ref())
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the store holds no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Remove the document at the path, returning it if present
    pub fn remove(&mut self, path: impl AsRef<Path>) -> Option<Workbook> {
        self.documents.remove(path.as_ref())
    }
}

impl DocumentStore for MemoryStore {
    fn create(&mut self, path: &Path, policy: OverwritePolicy) -> Result<Workbook> {
        if policy == OverwritePolicy::Never && self.documents.contains_key(path) {
            return Err(DocumentError::AlreadyExists(path.to_path_buf()));
        }
        let workbook = Workbook::new();
        self.documents.insert(path.to_path_buf(), workbook.clone());
        Ok(workbook)
    }

    fn save(&mut self, path: &Path, workbook: &Workbook) -> Result<()> {
        self.documents.insert(path.to_path_buf(), workbook.clone());
        Ok(())
    }

    fn load(&mut self, path: &Path) -> Result<Workbook> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| DocumentError::NotFound(path.to_path_buf()))
    }
}
