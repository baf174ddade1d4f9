//! VT100 DEC Special Graphics line drawing
//!
//! Glyphs are ordinary ASCII letters that the terminal renders as line
//! segments while the G0 set is switched to special graphics.

use super::{BoxGlyphs, Charset, LineWeight, ShadeGlyphs};

/// Designate DEC Special Graphics as G0
const ACTIVATE: &str = "\x1b(0";
/// Designate US ASCII as G0
const DEACTIVATE: &str = "\x1b(B";

// The set has no double or block strokes; both reuse the single lines.
static LINES: BoxGlyphs = BoxGlyphs {
    horizontal: "q",
    vertical: "x",
    north_west: "l",
    north_east: "k",
    south_east: "j",
    south_west: "m",
};

static SHADES: ShadeGlyphs = ShadeGlyphs {
    light: "a",
    medium: "a",
    dark: "a",
    block: "a",
};

/// VT100 line-drawing mode
#[derive(Debug, Clone, Copy, Default)]
pub struct DecSpecialGraphics;

impl Charset for DecSpecialGraphics {
    fn name(&self) -> &'static str {
        "dec"
    }

    fn lines(&self, _weight: LineWeight) -> &BoxGlyphs {
        &LINES
    }

    fn shades(&self) -> &ShadeGlyphs {
        &SHADES
    }

    fn activate(&self) -> &str {
        ACTIVATE
    }

    fn deactivate(&self) -> &str {
        DEACTIVATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dec_mode_switch_sequences() {
        assert_eq!(DecSpecialGraphics.activate(), "\x1b(0");
        assert_eq!(DecSpecialGraphics.deactivate(), "\x1b(B");
    }

    #[test]
    fn test_dec_corners() {
        assert_eq!(
            DecSpecialGraphics.lines(LineWeight::Double).corners(),
            ["l", "k", "j", "m"]
        );
    }
}
