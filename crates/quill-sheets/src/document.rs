//! Document facade tying a workbook to its backing store

use std::path::{Path, PathBuf};

use quill_sheets_core::Workbook;

use crate::error::Result;
use crate::store::{DocumentStore, OverwritePolicy};

/// An open spreadsheet document
///
/// A document couples a [`Workbook`] with the path it persists to and the
/// store that backs it. Edits live on the in-memory workbook until
/// [`save`](Self::save) writes them back; closing or dropping the document
/// discards anything unsaved.
#[derive(Debug)]
pub struct Document<'s, S: DocumentStore> {
    workbook: Workbook,
    path: PathBuf,
    store: &'s mut S,
}

impl<'s, S: DocumentStore> Document<'s, S> {
    /// Create a new document at the path
    ///
    /// The store persists a fresh single-sheet workbook right away. With
    /// [`OverwritePolicy::Never`] a path that is already taken is an error;
    /// [`OverwritePolicy::Force`] replaces the stored document.
    pub fn create(
        store: &'s mut S,
        path: impl AsRef<Path>,
        policy: OverwritePolicy,
    ) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let workbook = store.create(&path, policy)?;
        log::debug!("created document at {}", path.display());
        Ok(Self {
            workbook,
            path,
            store,
        })
    }

    /// Open the document stored at the path
    pub fn open(store: &'s mut S, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let workbook = store.load(&path)?;
        log::debug!("opened document at {}", path.display());
        Ok(Self {
            workbook,
            path,
            store,
        })
    }

    /// The path this document persists to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the workbook
    pub fn workbook(&self) -> &Workbook {
        &self.workbook
    }

    /// Get the workbook for mutation
    pub fn workbook_mut(&mut self) -> &mut Workbook {
        &mut self.workbook
    }

    /// Persist the workbook to its current path
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.path, &self.workbook)?;
        log::debug!("saved document at {}", self.path.display());
        Ok(())
    }

    /// Persist the workbook to a new path and switch the document to it
    ///
    /// The old path keeps whatever was last saved there. The policy applies
    /// to the new path, so saving over an existing document (including this
    /// document's own path) needs [`OverwritePolicy::Force`]. On error the
    /// document still points at its old path.
    pub fn save_as(&mut self, path: impl AsRef<Path>, policy: OverwritePolicy) -> Result<()> {
        let path = path.as_ref().to_path_buf();
        self.store.create(&path, policy)?;
        self.store.save(&path, &self.workbook)?;
        log::debug!("saved document as {}", path.display());
        self.path = path;
        Ok(())
    }

    /// Close the document, discarding changes since the last save
    ///
    /// Consuming the document releases the store borrow, so the store can
    /// open or create another document afterwards.
    pub fn close(self) {
        log::debug!("closed document at {}", self.path.display());
    }
}
