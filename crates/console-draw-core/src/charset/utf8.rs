//! Unicode box-drawing charsets

use super::{BoxGlyphs, Charset, LineWeight, ShadeGlyphs};

static LIGHT: BoxGlyphs = BoxGlyphs {
    horizontal: "─",
    vertical: "│",
    north_west: "┌",
    north_east: "┐",
    south_east: "┘",
    south_west: "└",
};

static HEAVY: BoxGlyphs = BoxGlyphs {
    horizontal: "━",
    vertical: "┃",
    north_west: "┏",
    north_east: "┓",
    south_east: "┛",
    south_west: "┗",
};

static DOUBLE: BoxGlyphs = BoxGlyphs {
    horizontal: "═",
    vertical: "║",
    north_west: "╔",
    north_east: "╗",
    south_east: "╝",
    south_west: "╚",
};

static BLOCK: BoxGlyphs = BoxGlyphs {
    horizontal: "█",
    vertical: "█",
    north_west: "█",
    north_east: "█",
    south_east: "█",
    south_west: "█",
};

static SHADES: ShadeGlyphs = ShadeGlyphs {
    light: "░",
    medium: "▒",
    dark: "▓",
    block: "█",
};

/// UTF-8 box drawing with light single lines
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8;

impl Charset for Utf8 {
    fn name(&self) -> &'static str {
        "utf8"
    }

    fn lines(&self, weight: LineWeight) -> &BoxGlyphs {
        match weight {
            LineWeight::Single => &LIGHT,
            LineWeight::Double => &DOUBLE,
            LineWeight::Block => &BLOCK,
        }
    }

    fn shades(&self) -> &ShadeGlyphs {
        &SHADES
    }
}

/// UTF-8 box drawing with heavy strokes for single lines
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Heavy;

impl Charset for Utf8Heavy {
    fn name(&self) -> &'static str {
        "utf8-heavy"
    }

    fn lines(&self, weight: LineWeight) -> &BoxGlyphs {
        match weight {
            LineWeight::Single => &HEAVY,
            LineWeight::Double => &DOUBLE,
            LineWeight::Block => &BLOCK,
        }
    }

    fn shades(&self) -> &ShadeGlyphs {
        &SHADES
    }
}
