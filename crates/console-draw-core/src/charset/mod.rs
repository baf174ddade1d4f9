//! Charsets: the mapping from line and shade roles to concrete glyphs
//!
//! A charset is an immutable table shared for the lifetime of the process.
//! Drawing code asks it for glyphs by role and never embeds glyphs itself,
//! so the same box can be emitted as Unicode box drawing, plain ASCII or
//! VT100 line-drawing mode.

mod ascii;
mod dec;
mod utf8;

pub use ascii::Ascii;
pub use dec::DecSpecialGraphics;
pub use utf8::{Utf8, Utf8Heavy};

use crate::style::LineStyle;
use std::fmt::Debug;

/// Glyph family a recognized line style draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineWeight {
    Single,
    Double,
    Block,
}

/// Position a border glyph occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphRole {
    /// East-west run
    Horizontal,
    /// North-south run
    Vertical,
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}

/// Border glyphs for one line weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxGlyphs {
    pub horizontal: &'static str,
    pub vertical: &'static str,
    pub north_west: &'static str,
    pub north_east: &'static str,
    pub south_east: &'static str,
    pub south_west: &'static str,
}

impl BoxGlyphs {
    /// Glyph for a role
    pub const fn get(&self, role: GlyphRole) -> &'static str {
        match role {
            GlyphRole::Horizontal => self.horizontal,
            GlyphRole::Vertical => self.vertical,
            GlyphRole::NorthWest => self.north_west,
            GlyphRole::NorthEast => self.north_east,
            GlyphRole::SouthEast => self.south_east,
            GlyphRole::SouthWest => self.south_west,
        }
    }

    /// Corner glyphs in drawing order: NW, NE, SE, SW
    pub const fn corners(&self) -> [&'static str; 4] {
        [
            self.north_west,
            self.north_east,
            self.south_east,
            self.south_west,
        ]
    }
}

/// Fill glyphs, lightest to solid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadeGlyphs {
    pub light: &'static str,
    pub medium: &'static str,
    pub dark: &'static str,
    pub block: &'static str,
}

/// Glyph provider for box drawing
///
/// `activate` and `deactivate` bracket any run of writes that use glyphs
/// from this charset. They are empty for charsets that need no mode switch.
pub trait Charset: Debug + Send + Sync {
    /// Short name used by configuration
    fn name(&self) -> &'static str;

    /// Border glyphs for a line weight
    fn lines(&self, weight: LineWeight) -> &BoxGlyphs;

    /// Fill glyphs
    fn shades(&self) -> &ShadeGlyphs;

    /// Sequence emitted before drawing glyphs
    fn activate(&self) -> &str {
        ""
    }

    /// Sequence emitted after drawing glyphs
    fn deactivate(&self) -> &str {
        ""
    }

    /// Glyph lookup by style and role
    ///
    /// Never fails: a style without a glyph family gets the block family.
    fn glyph(&self, style: LineStyle, role: GlyphRole) -> &str {
        self.lines(style.weight().unwrap_or(LineWeight::Block))
            .get(role)
    }
}

/// Names accepted by [`by_name`]
pub const CHARSET_NAMES: &[&str] = &["utf8", "utf8-heavy", "ascii", "dec"];

/// Look up a shipped charset by configuration name
pub fn by_name(name: &str) -> Option<Box<dyn Charset>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "utf8" | "utf-8" | "unicode" => Some(Box::new(Utf8)),
        "utf8-heavy" | "heavy" => Some(Box::new(Utf8Heavy)),
        "ascii" => Some(Box::new(Ascii)),
        "dec" | "decsg" | "vt100" => Some(Box::new(DecSpecialGraphics)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_known() {
        for name in CHARSET_NAMES {
            let charset = by_name(name).unwrap();
            assert_eq!(&charset.name(), name);
        }
        assert_eq!(by_name("UTF-8").unwrap().name(), "utf8");
        assert_eq!(by_name("vt100").unwrap().name(), "dec");
    }

    #[test]
    fn test_by_name_unknown() {
        assert!(by_name("cp437").is_none());
    }

    #[test]
    fn test_glyph_falls_back_to_block_family() {
        let charset = Utf8;
        assert_eq!(
            charset.glyph(LineStyle::Unrecognized(99), GlyphRole::Horizontal),
            charset.lines(LineWeight::Block).horizontal
        );
        assert_eq!(
            charset.glyph(LineStyle::Double, GlyphRole::NorthWest),
            "╔"
        );
    }

    #[test]
    fn test_every_glyph_is_one_cell() {
        use unicode_width::UnicodeWidthStr;

        for name in CHARSET_NAMES {
            let charset = by_name(name).unwrap();
            for weight in [LineWeight::Single, LineWeight::Double, LineWeight::Block] {
                let glyphs = charset.lines(weight);
                for glyph in glyphs.corners().into_iter().chain([glyphs.horizontal, glyphs.vertical]) {
                    assert_eq!(glyph.width(), 1, "{name} {weight:?} {glyph:?}");
                }
            }
            let shades = charset.shades();
            for glyph in [shades.light, shades.medium, shades.dark, shades.block] {
                assert_eq!(glyph.width(), 1, "{name} {glyph:?}");
            }
        }
    }
}
