//! Cell format record type

use super::StyleIndex;

/// A cell format: indices into the font, fill, and border tables plus
/// per-component apply flags
///
/// This record is flat. Copying it (via `create_from` on the owning table)
/// copies the three indices, not the sub-records they point at, so two
/// formats can share one font: mutating that font through either format's
/// index changes the rendered appearance of both. A caller wanting
/// independent attributes derives a new sub-record first and points the
/// copy at that.
///
/// The apply flags gate whether a renderer honors the referenced
/// sub-record; an index with its flag unset is carried but ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellFormat {
    /// Index into the font table
    pub font_index: StyleIndex,
    /// Index into the fill table
    pub fill_index: StyleIndex,
    /// Index into the border table
    pub border_index: StyleIndex,
    /// Honor the referenced font
    pub apply_font: bool,
    /// Honor the referenced fill
    pub apply_fill: bool,
    /// Honor the referenced border
    pub apply_border: bool,
}

impl CellFormat {
    /// Create a new default cell format (all indices 0, nothing applied)
    pub fn new() -> Self {
        Self::default()
    }

    /// Point at a font record and mark it applied
    pub fn with_font(mut self, index: StyleIndex) -> Self {
        self.font_index = index;
        self.apply_font = true;
        self
    }

    /// Point at a fill record and mark it applied
    pub fn with_fill(mut self, index: StyleIndex) -> Self {
        self.fill_index = index;
        self.apply_fill = true;
        self
    }

    /// Point at a border record and mark it applied
    pub fn with_border(mut self, index: StyleIndex) -> Self {
        self.border_index = index;
        self.apply_border = true;
        self
    }
}
