//! Row types

use crate::style::StyleIndex;

/// Row metadata
///
/// Stored sparsely by the worksheet, keyed by 1-based row number. A row
/// with no custom settings is not stored at all.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    /// Custom height in points (None = sheet default)
    pub height: Option<f64>,
    /// Row is hidden
    pub hidden: bool,
    /// Row-level format (None = no row format)
    pub format: Option<StyleIndex>,
}

impl Row {
    /// Row with every setting at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any setting deviates from the defaults
    pub fn has_custom_settings(&self) -> bool {
        self.height.is_some() || self.hidden || self.format.is_some()
    }
}
