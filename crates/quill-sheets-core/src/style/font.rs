//! Font record type

use super::Color;

/// Font settings
///
/// Attributes are independent: any subset can be changed in place through
/// the owning table without touching the rest.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    /// Typeface name, "Calibri" by default
    pub name: String,
    /// Size in points
    pub size: f64,
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Underline style
    pub underline: Underline,
    /// Strikethrough
    pub strikethrough: bool,
    /// Text color
    pub color: Color,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            name: String::from("Calibri"),
            size: 11.0,
            bold: false,
            italic: false,
            underline: Underline::default(),
            strikethrough: false,
            color: Color::Auto,
        }
    }
}

impl Font {
    /// Start from the default font
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the typeface name (builder form)
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the size in points (builder form)
    pub fn with_size(mut self, points: f64) -> Self {
        self.size = points;
        self
    }

    /// Toggle bold (builder form)
    pub fn with_bold(mut self, on: bool) -> Self {
        self.bold = on;
        self
    }

    /// Toggle italic (builder form)
    pub fn with_italic(mut self, on: bool) -> Self {
        self.italic = on;
        self
    }

    /// Replace the underline style (builder form)
    pub fn with_underline(mut self, style: Underline) -> Self {
        self.underline = style;
        self
    }

    /// Toggle strikethrough (builder form)
    pub fn with_strikethrough(mut self, on: bool) -> Self {
        self.strikethrough = on;
        self
    }

    /// Replace the text color (builder form)
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Underline style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Underline {
    /// No underline
    #[default]
    None,
    /// Single underline
    Single,
    /// Double underline
    Double,
}
