//! Border and fill style selectors

use crate::charset::LineWeight;
use std::fmt;
use std::str::FromStr;

/// Border style for boxes
///
/// `Unrecognized` carries a style code this crate has no glyph family for.
/// It is not an error: borders fall back to the block family, verticals to
/// the single family, and corners are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum LineStyle {
    /// No border; the whole rectangle is fill
    None,
    /// Single line border (─ │ ┌ ┐ └ ┘)
    #[default]
    Single,
    /// Double line border (═ ║ ╔ ╗ ╚ ╝)
    Double,
    /// Solid block border (█)
    Block,
    /// Style code with no glyph family
    Unrecognized(u16),
}

impl LineStyle {
    /// Numeric style code, as used by configuration files
    pub const fn code(&self) -> u16 {
        match self {
            LineStyle::None => 0,
            LineStyle::Single => 1,
            LineStyle::Double => 2,
            LineStyle::Block => 3,
            LineStyle::Unrecognized(code) => *code,
        }
    }

    /// Style for a numeric code
    pub const fn from_code(code: u16) -> Self {
        match code {
            0 => LineStyle::None,
            1 => LineStyle::Single,
            2 => LineStyle::Double,
            3 => LineStyle::Block,
            other => LineStyle::Unrecognized(other),
        }
    }

    /// Glyph family for recognized styles
    pub const fn weight(&self) -> Option<LineWeight> {
        match self {
            LineStyle::Single => Some(LineWeight::Single),
            LineStyle::Double => Some(LineWeight::Double),
            LineStyle::Block => Some(LineWeight::Block),
            LineStyle::None | LineStyle::Unrecognized(_) => None,
        }
    }

    /// True unless the style is `None`
    pub const fn has_border(&self) -> bool {
        !matches!(self, LineStyle::None)
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineStyle::None => f.write_str("none"),
            LineStyle::Single => f.write_str("single"),
            LineStyle::Double => f.write_str("double"),
            LineStyle::Block => f.write_str("block"),
            LineStyle::Unrecognized(code) => write!(f, "{code}"),
        }
    }
}

/// Error returned for a line style name that is neither known nor numeric
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown line style: {0}")]
pub struct ParseStyleError(pub String);

impl FromStr for LineStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u16>() {
            return Ok(Self::from_code(code));
        }
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(LineStyle::None),
            "single" => Ok(LineStyle::Single),
            "double" => Ok(LineStyle::Double),
            "block" => Ok(LineStyle::Block),
            _ => Err(ParseStyleError(s.to_string())),
        }
    }
}

/// Interior fill for boxes
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub enum FillStyle {
    /// Blank interior (spaces)
    #[default]
    None,
    ShadeLight,
    ShadeMedium,
    ShadeDark,
    /// Solid block
    Block,
    /// Fill code with no shade mapping; renders as a solid block
    Unrecognized(u16),
    /// Caller-supplied fill text, reduced to a single cell when drawn
    Literal(String),
}

impl FillStyle {
    /// Style for a numeric code
    pub const fn from_code(code: u16) -> Self {
        match code {
            0 => FillStyle::None,
            1 => FillStyle::ShadeLight,
            2 => FillStyle::ShadeMedium,
            3 => FillStyle::ShadeDark,
            10 => FillStyle::Block,
            other => FillStyle::Unrecognized(other),
        }
    }

    /// Explicit fill text
    pub fn literal(text: impl Into<String>) -> Self {
        FillStyle::Literal(text.into())
    }

    /// Parse a name or numeric code; any other non-empty text is a literal
    pub fn parse(s: &str) -> Self {
        if let Ok(code) = s.trim().parse::<u16>() {
            return Self::from_code(code);
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => FillStyle::None,
            "shade-light" | "light" => FillStyle::ShadeLight,
            "shade-medium" | "medium" => FillStyle::ShadeMedium,
            "shade-dark" | "dark" => FillStyle::ShadeDark,
            "block" => FillStyle::Block,
            _ => FillStyle::Literal(s.to_string()),
        }
    }
}

impl From<&str> for FillStyle {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl fmt::Display for FillStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillStyle::None => f.write_str("none"),
            FillStyle::ShadeLight => f.write_str("shade-light"),
            FillStyle::ShadeMedium => f.write_str("shade-medium"),
            FillStyle::ShadeDark => f.write_str("shade-dark"),
            FillStyle::Block => f.write_str("block"),
            FillStyle::Unrecognized(code) => write!(f, "{code}"),
            FillStyle::Literal(text) => f.write_str(text),
        }
    }
}
