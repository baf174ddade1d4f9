//! Console colors
//!
//! The rendering core treats a color as an opaque token handed to the
//! device or the color sink. `None` at a call site means "leave the
//! current color alone".

use crossterm::style::Color as CrosstermColor;
use std::fmt;
use std::str::FromStr;

/// Console color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Color {
    /// Device default
    #[default]
    Reset,
    Black,
    DarkGrey,
    Red,
    DarkRed,
    Green,
    DarkGreen,
    Yellow,
    DarkYellow,
    Blue,
    DarkBlue,
    Magenta,
    DarkMagenta,
    Cyan,
    DarkCyan,
    White,
    Grey,
    /// RGB color
    Rgb(u8, u8, u8),
    /// ANSI 256-color palette index
    Indexed(u8),
}

/// Named colors in classic 16-color table order
const CLASSIC: [Color; 16] = [
    Color::Black,
    Color::DarkRed,
    Color::DarkGreen,
    Color::DarkYellow,
    Color::DarkBlue,
    Color::DarkMagenta,
    Color::DarkCyan,
    Color::Grey,
    Color::DarkGrey,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    /// Map a palette index to a color; 0-15 resolve to the named colors
    pub const fn from_index(index: u8) -> Self {
        if (index as usize) < CLASSIC.len() {
            CLASSIC[index as usize]
        } else {
            Self::Indexed(index)
        }
    }

    /// Parse a hex color string (e.g., "#ff0000" or "ff0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::Rgb(r, g, b))
    }

    fn name(&self) -> Option<&'static str> {
        Some(match self {
            Color::Reset => "reset",
            Color::Black => "black",
            Color::DarkGrey => "dark-grey",
            Color::Red => "red",
            Color::DarkRed => "dark-red",
            Color::Green => "green",
            Color::DarkGreen => "dark-green",
            Color::Yellow => "yellow",
            Color::DarkYellow => "dark-yellow",
            Color::Blue => "blue",
            Color::DarkBlue => "dark-blue",
            Color::Magenta => "magenta",
            Color::DarkMagenta => "dark-magenta",
            Color::Cyan => "cyan",
            Color::DarkCyan => "dark-cyan",
            Color::White => "white",
            Color::Grey => "grey",
            Color::Rgb(..) | Color::Indexed(_) => return None,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Color::Indexed(i) => write!(f, "{i}"),
            named => f.write_str(named.name().unwrap_or_default()),
        }
    }
}

/// Error returned when a color name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown color: {0}")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts names ("dark-red", "dark_red", "darkred"), "#rrggbb" and
    /// palette indices ("9", "208")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<u8>() {
            return Ok(Self::from_index(index));
        }
        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed).ok_or_else(|| ParseColorError(s.to_string()));
        }

        let normalized: String = trimmed
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        let normalized = normalized.replace("gray", "grey");

        CLASSIC
            .iter()
            .chain(std::iter::once(&Color::Reset))
            .find(|color| {
                color
                    .name()
                    .is_some_and(|name| name.replace('-', "") == normalized)
            })
            .copied()
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

impl From<Color> for CrosstermColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Reset => CrosstermColor::Reset,
            Color::Black => CrosstermColor::Black,
            Color::DarkGrey => CrosstermColor::DarkGrey,
            Color::Red => CrosstermColor::Red,
            Color::DarkRed => CrosstermColor::DarkRed,
            Color::Green => CrosstermColor::Green,
            Color::DarkGreen => CrosstermColor::DarkGreen,
            Color::Yellow => CrosstermColor::Yellow,
            Color::DarkYellow => CrosstermColor::DarkYellow,
            Color::Blue => CrosstermColor::Blue,
            Color::DarkBlue => CrosstermColor::DarkBlue,
            Color::Magenta => CrosstermColor::Magenta,
            Color::DarkMagenta => CrosstermColor::DarkMagenta,
            Color::Cyan => CrosstermColor::Cyan,
            Color::DarkCyan => CrosstermColor::DarkCyan,
            Color::White => CrosstermColor::White,
            Color::Grey => CrosstermColor::Grey,
            Color::Rgb(r, g, b) => CrosstermColor::Rgb { r, g, b },
            Color::Indexed(i) => CrosstermColor::AnsiValue(i),
        }
    }
}
