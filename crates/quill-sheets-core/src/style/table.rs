//! Append-only style record tables

use crate::error::{Error, Result};
use std::fmt;

/// A stable handle into a [`StyleTable`]
///
/// Indices are minted by [`StyleTable::create`] and [`StyleTable::create_from`]
/// and stay valid for the lifetime of the owning table: slots are never
/// removed, compacted, or reused. Index 0 of every registry table holds a
/// default record, so `StyleIndex::default()` always resolves.
///
/// An index only has meaning for the table that minted it; the handle itself
/// does not know which table that is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleIndex(u32);

impl StyleIndex {
    pub(crate) const fn new(raw: u32) -> Self {
        StyleIndex(raw)
    }

    /// Get the raw table position
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for StyleIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<StyleIndex> for u32 {
    fn from(index: StyleIndex) -> u32 {
        index.0
    }
}

/// Append-only table of style records addressed by [`StyleIndex`]
///
/// Every record lives at a stable position. Creating always allocates a new
/// slot, even when an identical record already exists: callers that want
/// sharing hold the same index instead of relying on record identity.
/// Mutating a record through its index is visible to every holder of that
/// index.
///
/// Failed operations leave the table exactly as it was.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleTable<T> {
    records: Vec<T>,
}

impl<T: Default + Clone> StyleTable<T> {
    /// Create a new empty table
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Allocate a new slot holding a default-valued record
    pub fn create(&mut self) -> StyleIndex {
        self.insert(T::default())
    }

    /// Allocate a new slot holding a copy of the template's current record
    ///
    /// The copy is taken at the moment of the call; the new slot keeps no
    /// link to the template, so later mutation of either record never
    /// affects the other.
    pub fn create_from(&mut self, template: StyleIndex) -> Result<StyleIndex> {
        let record = self.get(template)?.clone();
        Ok(self.insert(record))
    }

    pub(crate) fn insert(&mut self, record: T) -> StyleIndex {
        let index = StyleIndex::new(self.records.len() as u32);
        self.records.push(record);
        index
    }

    /// Get a record by index
    pub fn get(&self, index: StyleIndex) -> Result<&T> {
        self.records
            .get(index.0 as usize)
            .ok_or(Error::InvalidIndex {
                index: index.0,
                len: self.len(),
            })
    }

    /// Get a mutable record by index
    pub fn get_mut(&mut self, index: StyleIndex) -> Result<&mut T> {
        let len = self.len();
        self.records
            .get_mut(index.0 as usize)
            .ok_or(Error::InvalidIndex {
                index: index.0,
                len,
            })
    }

    /// Replace the record at an existing index
    pub fn set(&mut self, index: StyleIndex, record: T) -> Result<()> {
        *self.get_mut(index)? = record;
        Ok(())
    }

    /// Get the number of allocated records
    pub fn len(&self) -> u32 {
        self.records.len() as u32
    }

    /// Check if the table has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check whether an index has been allocated in this table
    pub fn contains(&self, index: StyleIndex) -> bool {
        (index.0 as usize) < self.records.len()
    }

    /// Iterate over all records with their indices, in allocation order
    pub fn iter(&self) -> impl Iterator<Item = (StyleIndex, &T)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| (StyleIndex::new(i as u32), record))
    }
}

impl<T: Default + Clone> Default for StyleTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
