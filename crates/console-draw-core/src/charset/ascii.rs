//! 7-bit ASCII charset for consoles without box drawing

use super::{BoxGlyphs, Charset, LineWeight, ShadeGlyphs};

static SINGLE: BoxGlyphs = BoxGlyphs {
    horizontal: "-",
    vertical: "|",
    north_west: "+",
    north_east: "+",
    south_east: "+",
    south_west: "+",
};

static DOUBLE: BoxGlyphs = BoxGlyphs {
    horizontal: "=",
    vertical: "H",
    north_west: "#",
    north_east: "#",
    south_east: "#",
    south_west: "#",
};

static BLOCK: BoxGlyphs = BoxGlyphs {
    horizontal: "#",
    vertical: "#",
    north_west: "#",
    north_east: "#",
    south_east: "#",
    south_west: "#",
};

static SHADES: ShadeGlyphs = ShadeGlyphs {
    light: ".",
    medium: ":",
    dark: "%",
    block: "#",
};

/// Plain ASCII approximations of box drawing
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascii;

impl Charset for Ascii {
    fn name(&self) -> &'static str {
        "ascii"
    }

    fn lines(&self, weight: LineWeight) -> &BoxGlyphs {
        match weight {
            LineWeight::Single => &SINGLE,
            LineWeight::Double => &DOUBLE,
            LineWeight::Block => &BLOCK,
        }
    }

    fn shades(&self) -> &ShadeGlyphs {
        &SHADES
    }
}
