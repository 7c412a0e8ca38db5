//! Column types

use crate::style::StyleIndex;

/// Column metadata
///
/// Stored sparsely by the worksheet, keyed by 1-based column number. A
/// column with no custom settings is not stored at all.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// Custom width in characters (None = sheet default)
    pub width: Option<f64>,
    /// Column is hidden
    pub hidden: bool,
    /// Column-level format (None = no column format)
    pub format: Option<StyleIndex>,
}

impl Column {
    /// Column with every setting at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any setting deviates from the defaults
    pub fn has_custom_settings(&self) -> bool {
        self.width.is_some() || self.hidden || self.format.is_some()
    }
}
