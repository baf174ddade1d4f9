//! A single console cell with content and colors

use crate::style::Color;

/// A single console cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// The glyph displayed, including any combining marks. Empty for the
    /// trailing half of a double-width glyph.
    pub symbol: String,
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
}

impl Cell {
    /// Create a new empty cell (space character, default colors)
    pub fn empty() -> Self {
        Self::new(" ")
    }

    /// Create a cell holding a symbol with default colors
    pub fn new<S: Into<String>>(symbol: S) -> Self {
        Self {
            symbol: symbol.into(),
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }

    /// Set foreground color
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    /// Set background color
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    /// True for the placeholder right of a double-width glyph
    pub fn is_continuation(&self) -> bool {
        self.symbol.is_empty()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_empty() {
        let cell = Cell::empty();
        assert_eq!(cell.symbol, " ");
        assert_eq!(cell.fg, Color::Reset);
        assert_eq!(cell.bg, Color::Reset);
        assert!(!cell.is_continuation());
    }

    #[test]
    fn test_cell_builder() {
        let cell = Cell::new("X").fg(Color::Red).bg(Color::Blue);
        assert_eq!(cell.symbol, "X");
        assert_eq!(cell.fg, Color::Red);
        assert_eq!(cell.bg, Color::Blue);
    }
}
