//! Named cell style record type

use super::StyleIndex;

/// A named, reusable style preset
///
/// Wraps one cell format index plus a display name; it does not reference
/// fonts, fills, or borders directly. The registry seeds index 0 with the
/// built-in "Normal" style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellStyle {
    /// Display name
    pub name: String,
    /// Index into the style-format table
    pub format_index: StyleIndex,
}

impl CellStyle {
    /// Create a named style pointing at a cell format
    pub fn new<S: Into<String>>(name: S, format_index: StyleIndex) -> Self {
        Self {
            name: name.into(),
            format_index,
        }
    }
}
