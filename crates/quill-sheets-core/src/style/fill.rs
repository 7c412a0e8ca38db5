//! Fill record type
//!
//! A fill is in exactly one mode at a time: no fill, solid, or gradient.
//! Attributes belong to a mode; mutating an attribute of a mode the fill is
//! not in fails with [`Error::IncompatibleFillType`] instead of coercing.
//! Switching mode discards the attributes of the previous mode, including
//! any gradient stops.

use super::{Color, StyleTable};
use crate::error::{Error, Result};
use std::fmt;

/// Gradient stop table owned by one gradient fill
///
/// Stops are kept in the order they were created, never sorted by position.
/// Rendering consumes them in that stored order.
pub type GradientStops = StyleTable<GradientStop>;

/// Cell background fill
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fill {
    /// No fill (transparent)
    #[default]
    None,

    /// Solid color fill
    Solid {
        /// Fill color
        color: Color,
    },

    /// Gradient fill
    Gradient {
        /// Linear or path gradient
        gradient_type: GradientType,
        /// Color behind the gradient
        background: Color,
        /// Stops in authoring order
        stops: GradientStops,
    },
}

impl Fill {
    /// Solid fill of one color
    pub fn solid(color: Color) -> Self {
        Fill::Solid { color }
    }

    /// Create an empty gradient fill of the given type
    pub fn gradient(gradient_type: GradientType) -> Self {
        Fill::Gradient {
            gradient_type,
            background: Color::Auto,
            stops: GradientStops::new(),
        }
    }

    /// Whether this is the no-fill mode
    pub fn is_none(&self) -> bool {
        matches!(self, Fill::None)
    }

    /// Get the mode this fill is currently in
    pub fn fill_type(&self) -> FillType {
        match self {
            Fill::None => FillType::None,
            Fill::Solid { .. } => FillType::Solid,
            Fill::Gradient { .. } => FillType::Gradient,
        }
    }

    /// Switch the fill to another mode
    ///
    /// Switching to the mode the fill is already in is a no-op that keeps
    /// the current attributes. An actual switch replaces the record with
    /// the new mode's defaults, discarding the old mode's attributes; in
    /// particular, leaving gradient mode discards every gradient stop.
    pub fn set_fill_type(&mut self, fill_type: FillType) {
        if self.fill_type() == fill_type {
            return;
        }
        *self = match fill_type {
            FillType::None => Fill::None,
            FillType::Solid => Fill::solid(Color::Auto),
            FillType::Gradient => Fill::gradient(GradientType::default()),
        };
    }

    /// Get the solid fill color, if in solid mode
    pub fn solid_color(&self) -> Option<Color> {
        match self {
            Fill::Solid { color } => Some(*color),
            _ => None,
        }
    }

    /// Set the solid fill color
    ///
    /// Fails unless the fill is in solid mode; switch with
    /// [`set_fill_type`](Self::set_fill_type) first.
    pub fn set_solid_color(&mut self, new_color: Color) -> Result<()> {
        match self {
            Fill::Solid { color } => {
                *color = new_color;
                Ok(())
            }
            _ => Err(self.incompatible(FillType::Solid)),
        }
    }

    /// Get the gradient type, if in gradient mode
    pub fn gradient_type(&self) -> Option<GradientType> {
        match self {
            Fill::Gradient { gradient_type, .. } => Some(*gradient_type),
            _ => None,
        }
    }

    /// Set the gradient type without touching background or stops
    ///
    /// Fails unless the fill is in gradient mode.
    pub fn set_gradient_type(&mut self, new_type: GradientType) -> Result<()> {
        match self {
            Fill::Gradient { gradient_type, .. } => {
                *gradient_type = new_type;
                Ok(())
            }
            _ => Err(self.incompatible(FillType::Gradient)),
        }
    }

    /// Get the gradient background color, if in gradient mode
    pub fn background_color(&self) -> Option<Color> {
        match self {
            Fill::Gradient { background, .. } => Some(*background),
            _ => None,
        }
    }

    /// Set the gradient background color
    ///
    /// Fails unless the fill is in gradient mode.
    pub fn set_background_color(&mut self, new_color: Color) -> Result<()> {
        match self {
            Fill::Gradient { background, .. } => {
                *background = new_color;
                Ok(())
            }
            _ => Err(self.incompatible(FillType::Gradient)),
        }
    }

    /// Get the gradient stops, if in gradient mode
    pub fn stops(&self) -> Option<&GradientStops> {
        match self {
            Fill::Gradient { stops, .. } => Some(stops),
            _ => None,
        }
    }

    /// Get the gradient stops for mutation
    ///
    /// Fails unless the fill is in gradient mode.
    pub fn stops_mut(&mut self) -> Result<&mut GradientStops> {
        match self {
            Fill::Gradient { stops, .. } => Ok(stops),
            _ => Err(self.incompatible(FillType::Gradient)),
        }
    }

    fn incompatible(&self, expected: FillType) -> Error {
        Error::IncompatibleFillType {
            expected,
            actual: self.fill_type(),
        }
    }
}

/// Fill mode discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillType {
    /// No fill
    #[default]
    None,
    /// Solid color
    Solid,
    /// Gradient
    Gradient,
}

impl fmt::Display for FillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillType::None => write!(f, "none"),
            FillType::Solid => write!(f, "solid"),
            FillType::Gradient => write!(f, "gradient"),
        }
    }
}

/// Gradient types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GradientType {
    /// Linear gradient
    #[default]
    Linear,
    /// Radial/path gradient
    Path,
}

/// One color anchor of a gradient
///
/// A freshly created stop is unpositioned; rendering treats stops in stored
/// order regardless of position values.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientStop {
    /// Position (0.0 to 1.0), None until set
    pub position: Option<f64>,
    /// Anchor color
    pub color: Color,
}

impl GradientStop {
    /// Stop anchored at a position
    pub fn new(position: f64, color: Color) -> Self {
        Self {
            position: Some(position),
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_no_fill() {
        let fill = Fill::default();
        assert!(fill.is_none());
        assert_eq!(fill.fill_type(), FillType::None);
        assert_eq!(fill.solid_color(), None);
        assert_eq!(fill.stops(), None);
    }

    #[test]
    fn test_solid_color_requires_solid_mode() {
        let mut fill = Fill::default();

        let err = fill.set_solid_color(Color::RED).unwrap_err();
        match err {
            crate::error::Error::IncompatibleFillType { expected, actual } => {
                assert_eq!(expected, FillType::Solid);
                assert_eq!(actual, FillType::None);
            }
            other => panic!("unexpected error: {other}"),
        }

        fill.set_fill_type(FillType::Solid);
        fill.set_solid_color(Color::RED).unwrap();
        assert_eq!(fill.solid_color(), Some(Color::RED));
    }

    #[test]
    fn test_gradient_attributes_require_gradient_mode() {
        let mut fill = Fill::solid(Color::BLUE);

        assert!(fill.set_background_color(Color::WHITE).is_err());
        assert!(fill.set_gradient_type(GradientType::Path).is_err());
        assert!(fill.stops_mut().is_err());

        fill.set_fill_type(FillType::Gradient);
        fill.set_background_color(Color::WHITE).unwrap();
        fill.set_gradient_type(GradientType::Path).unwrap();
        assert_eq!(fill.background_color(), Some(Color::WHITE));
        assert_eq!(fill.gradient_type(), Some(GradientType::Path));
    }

    #[test]
    fn test_stops_keep_authoring_order() {
        let mut fill = Fill::gradient(GradientType::Linear);
        let stops = fill.stops_mut().unwrap();

        // Positions intentionally out of order
        let first = stops.create();
        stops.set(first, GradientStop::new(0.9, Color::RED)).unwrap();
        let second = stops.create();
        stops.set(second, GradientStop::new(0.1, Color::BLUE)).unwrap();

        let positions: Vec<Option<f64>> =
            fill.stops().unwrap().iter().map(|(_, s)| s.position).collect();
        assert_eq!(positions, vec![Some(0.9), Some(0.1)]);
    }

    #[test]
    fn test_new_stop_is_unpositioned() {
        let mut fill = Fill::gradient(GradientType::Linear);
        let stops = fill.stops_mut().unwrap();
        let index = stops.create();
        assert_eq!(stops.get(index).unwrap().position, None);
    }

    #[test]
    fn test_mode_switch_discards_stops() {
        let mut fill = Fill::gradient(GradientType::Path);
        {
            let stops = fill.stops_mut().unwrap();
            stops.create();
            stops.create();
            assert_eq!(stops.len(), 2);
        }

        fill.set_fill_type(FillType::Solid);
        fill.set_fill_type(FillType::Gradient);

        assert_eq!(fill.stops().unwrap().len(), 0);
        assert_eq!(fill.gradient_type(), Some(GradientType::Linear));
    }

    #[test]
    fn test_mode_switch_discards_solid_color() {
        let mut fill = Fill::solid(Color::RED);
        fill.set_fill_type(FillType::Gradient);
        fill.set_fill_type(FillType::Solid);
        assert_eq!(fill.solid_color(), Some(Color::Auto));
    }

    #[test]
    fn test_same_mode_switch_is_noop() {
        let mut fill = Fill::gradient(GradientType::Path);
        fill.stops_mut().unwrap().create();
        fill.set_background_color(Color::YELLOW).unwrap();

        fill.set_fill_type(FillType::Gradient);

        assert_eq!(fill.stops().unwrap().len(), 1);
        assert_eq!(fill.background_color(), Some(Color::YELLOW));
        assert_eq!(fill.gradient_type(), Some(GradientType::Path));
    }
}
