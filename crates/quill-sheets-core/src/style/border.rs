//! Border record type

use super::Color;

/// Border settings for a cell
///
/// Each edge is independent; an unset edge renders nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Border {
    /// Left border
    pub left: Option<BorderEdge>,
    /// Right border
    pub right: Option<BorderEdge>,
    /// Top border
    pub top: Option<BorderEdge>,
    /// Bottom border
    pub bottom: Option<BorderEdge>,
}

impl Border {
    /// Create a new border with no edges set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all four edges to the same style
    pub fn outline(style: LineStyle, color: Color) -> Self {
        let edge = Some(BorderEdge { style, color });
        Self {
            left: edge.clone(),
            right: edge.clone(),
            top: edge.clone(),
            bottom: edge,
        }
    }

    /// Set the left edge
    pub fn set_left(&mut self, style: LineStyle, color: Color) {
        self.left = Some(BorderEdge { style, color });
    }

    /// Set the right edge
    pub fn set_right(&mut self, style: LineStyle, color: Color) {
        self.right = Some(BorderEdge { style, color });
    }

    /// Set the top edge
    pub fn set_top(&mut self, style: LineStyle, color: Color) {
        self.top = Some(BorderEdge { style, color });
    }

    /// Set the bottom edge
    pub fn set_bottom(&mut self, style: LineStyle, color: Color) {
        self.bottom = Some(BorderEdge { style, color });
    }

    /// Set the left edge (builder form)
    pub fn with_left(mut self, style: LineStyle, color: Color) -> Self {
        self.set_left(style, color);
        self
    }

    /// Set the right edge (builder form)
    pub fn with_right(mut self, style: LineStyle, color: Color) -> Self {
        self.set_right(style, color);
        self
    }

    /// Set the top edge (builder form)
    pub fn with_top(mut self, style: LineStyle, color: Color) -> Self {
        self.set_top(style, color);
        self
    }

    /// Set the bottom edge (builder form)
    pub fn with_bottom(mut self, style: LineStyle, color: Color) -> Self {
        self.set_bottom(style, color);
        self
    }

    /// Check if no edge is set
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none() && self.top.is_none() && self.bottom.is_none()
    }
}

/// A single border edge
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderEdge {
    /// Line style
    pub style: LineStyle,
    /// Line color
    pub color: Color,
}

impl BorderEdge {
    /// Pair a line style with a color
    pub fn new(style: LineStyle, color: Color) -> Self {
        Self { style, color }
    }

    /// Create a thin black edge
    pub fn thin() -> Self {
        Self::new(LineStyle::Thin, Color::BLACK)
    }

    /// Create a medium black edge
    pub fn medium() -> Self {
        Self::new(LineStyle::Medium, Color::BLACK)
    }

    /// Create a thick black edge
    pub fn thick() -> Self {
        Self::new(LineStyle::Thick, Color::BLACK)
    }
}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineStyle {
    /// No line
    #[default]
    None,
    /// Thin line
    Thin,
    /// Medium line
    Medium,
    /// Thick line
    Thick,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Double line
    Double,
    /// Hair line (very thin)
    Hair,
    /// Medium dashed
    MediumDashed,
    /// Dash-dot
    DashDot,
    /// Medium dash-dot
    MediumDashDot,
    /// Dash-dot-dot
    DashDotDot,
    /// Medium dash-dot-dot
    MediumDashDotDot,
    /// Slant dash-dot
    SlantDashDot,
}
