//! Box renderer

use super::Renderer;
use crate::charset::{GlyphRole, LineWeight};
use crate::device::Device;
use crate::error::Result;
use crate::geometry::BoxCoords;
use crate::style::{Color, FillStyle, LineStyle};
use tracing::{debug, warn};

/// Border, fill and colors for one box
///
/// Defaults to a single-line border around a blank interior, with all
/// colors left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxStyle {
    pub line: LineStyle,
    pub fill: FillStyle,
    /// Border foreground
    pub color: Option<Color>,
    /// Border background
    pub bg_color: Option<Color>,
    /// Interior foreground
    pub fill_color: Option<Color>,
    /// Interior background
    pub fill_bg_color: Option<Color>,
}

impl BoxStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    pub fn fill(mut self, fill: FillStyle) -> Self {
        self.fill = fill;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg_color = Some(color);
        self
    }

    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    pub fn fill_bg(mut self, color: Color) -> Self {
        self.fill_bg_color = Some(color);
        self
    }
}

impl<D: Device + ?Sized> Renderer<'_, D> {
    /// Draw a box with corners at `(x1, y1)` and `(x2, y2)`, inclusive
    ///
    /// Coordinates are resolved and validated before anything is written;
    /// an invalid box produces no output. A box two cells wide or less has
    /// no room for a border and is drawn as fill only.
    ///
    /// Style fallbacks for [`LineStyle::Unrecognized`]: horizontal runs use
    /// the block family, verticals the single family, and corners are not
    /// drawn.
    ///
    /// Once writing starts a device failure aborts the call and may leave a
    /// partly drawn box.
    pub fn write_box(&mut self, coords: impl Into<BoxCoords>, style: &BoxStyle) -> Result<()> {
        let rect = coords.into().resolve(self.device.size())?;
        let width = rect.width() as usize;

        let mut line = style.line;
        if width <= 2 && line.has_border() {
            debug!(width, requested = %line, "box too narrow for a border; drawing fill only");
            line = LineStyle::None;
        }
        debug!(
            x1 = rect.x1,
            y1 = rect.y1,
            x2 = rect.x2,
            y2 = rect.y2,
            line = %line,
            fill = %style.fill,
            "drawing box"
        );

        let charset = self.charset;
        self.control(charset.activate())?;

        // Top and bottom edges
        if line.has_border() {
            let horizontal = charset.glyph(line, GlyphRole::Horizontal);
            let run = horizontal.repeat(width - 2);
            self.write_at(&run, rect.x1 + 1, rect.y1, style.color, style.bg_color)?;
            self.write_at(&run, rect.x1 + 1, rect.y2, style.color, style.bg_color)?;
        }

        let fill = self.fill_glyph(&style.fill);

        if line.has_border() {
            let vertical = charset
                .lines(line.weight().unwrap_or(LineWeight::Single))
                .vertical;
            let run = fill.repeat(width - 2);
            for y in rect.interior_rows() {
                self.device.set_cursor(rect.x1, y)?;
                self.write(vertical, style.color, style.bg_color)?;
                self.write(&run, style.fill_color, style.fill_bg_color)?;
                self.write(vertical, style.color, style.bg_color)?;
            }
        } else {
            let run = fill.repeat(width);
            for y in rect.y1..=rect.y2 {
                self.write_at(&run, rect.x1, y, style.fill_color, style.fill_bg_color)?;
            }
        }

        if line.has_border() {
            if let Some(color) = style.color {
                self.device.set_color(color)?;
            }
            if let Some(color) = style.bg_color {
                self.device.set_bg_color(color)?;
            }
            if let Some(weight) = line.weight() {
                let corners = charset.lines(weight).corners();
                for (point, glyph) in rect.corners().into_iter().zip(corners) {
                    self.write_at(glyph, point.x, point.y, None, None)?;
                }
            }
        }

        self.control(charset.deactivate())?;
        self.device.reset_color()?;
        Ok(())
    }

    /// Glyph painted into each interior cell
    fn fill_glyph<'s>(&self, fill: &'s FillStyle) -> &'s str {
        let shades = self.charset.shades();
        match fill {
            FillStyle::None => " ",
            FillStyle::ShadeLight => shades.light,
            FillStyle::ShadeMedium => shades.medium,
            FillStyle::ShadeDark => shades.dark,
            FillStyle::Block | FillStyle::Unrecognized(_) => shades.block,
            FillStyle::Literal(text) if text.is_empty() => " ",
            FillStyle::Literal(text) => {
                let glyph = self.metrics.trim_to_width(text, 1);
                if self.metrics.display_width(glyph) == 1 {
                    glyph
                } else {
                    warn!(fill = %text, "fill text has no single-cell glyph; using a space");
                    " "
                }
            }
        }
    }
}
