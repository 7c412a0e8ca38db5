//! Color values used by fonts, fills, and borders

use std::fmt;

/// A color attribute value
///
/// `Auto` defers to the renderer (normally black text on white). Explicit
/// colors are RGB, with an optional alpha channel in the `Argb` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Automatic color, resolved by whatever renders the style
    #[default]
    Auto,

    /// Opaque RGB color
    Rgb { r: u8, g: u8, b: u8 },

    /// RGB color with an explicit alpha channel
    Argb { a: u8, r: u8, g: u8, b: u8 },
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Create an ARGB color
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self::Argb { a, r, g, b }
    }

    /// Parse a hex string: 6 digits as RGB, 8 digits as ARGB
    ///
    /// A leading `#` is accepted and ignored, so "#FF0000", "FF0000", and
    /// "ffff0000" all parse.
    pub fn from_hex(hex: &str) -> Option<Self> {
        fn channel(digits: &str, n: usize) -> Option<u8> {
            u8::from_str_radix(digits.get(2 * n..2 * n + 2)?, 16).ok()
        }

        let digits = hex.strip_prefix('#').unwrap_or(hex);
        match digits.len() {
            6 => Some(Color::Rgb {
                r: channel(digits, 0)?,
                g: channel(digits, 1)?,
                b: channel(digits, 2)?,
            }),
            8 => Some(Color::Argb {
                a: channel(digits, 0)?,
                r: channel(digits, 1)?,
                g: channel(digits, 2)?,
                b: channel(digits, 3)?,
            }),
            _ => None,
        }
    }

    /// Format as uppercase hex without a `#` prefix
    ///
    /// `Auto` formats as opaque black.
    pub fn to_hex(&self) -> String {
        let (a, (r, g, b)) = match self {
            Color::Auto => (None, (0, 0, 0)),
            Color::Rgb { r, g, b } => (None, (*r, *g, *b)),
            Color::Argb { a, r, g, b } => (Some(*a), (*r, *g, *b)),
        };
        match a {
            Some(a) => format!("{a:02X}{r:02X}{g:02X}{b:02X}"),
            None => format!("{r:02X}{g:02X}{b:02X}"),
        }
    }

    /// Get the RGB components, dropping any alpha
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Auto => (0, 0, 0),
            Color::Rgb { r, g, b } | Color::Argb { r, g, b, .. } => (*r, *g, *b),
        }
    }

    /// Whether this is the automatic color
    pub fn is_auto(&self) -> bool {
        matches!(self, Color::Auto)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Auto => f.write_str("auto"),
            _ => write!(f, "#{}", self.to_hex()),
        }
    }
}
