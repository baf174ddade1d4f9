//! Wrapped text blocks

use super::Renderer;
use crate::device::Device;
use crate::error::{RenderError, Result};
use crate::style::Color;
use tracing::debug;

/// Placement and size of a text block
///
/// A negative `width` or `height` is measured back from the right or bottom
/// edge of the device: the block stops that many cells short of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBlock {
    pub width: i32,
    /// `None` extends the block to the bottom of the device
    pub height: Option<i32>,
    pub x: u16,
    pub y: u16,
    pub color: Option<Color>,
    pub bg_color: Option<Color>,
}

impl TextBlock {
    /// Block of `width` cells at the top-left corner
    pub const fn new(width: i32) -> Self {
        Self {
            width,
            height: None,
            x: 0,
            y: 0,
            color: None,
            bg_color: None,
        }
    }

    pub const fn height(mut self, height: i32) -> Self {
        self.height = Some(height);
        self
    }

    pub const fn at(mut self, x: u16, y: u16) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub const fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub const fn bg(mut self, color: Color) -> Self {
        self.bg_color = Some(color);
        self
    }
}

/// Resolve a block extent against the space left after `origin`
fn extent(requested: Option<i32>, origin: u16, device: u16, what: &str) -> Result<usize> {
    let available = i64::from(device) - i64::from(origin);
    let resolved = match requested {
        None => available,
        Some(n) if n < 0 => available + i64::from(n),
        Some(n) => i64::from(n),
    };
    if resolved <= 0 {
        return Err(RenderError::geometry(format!(
            "text block {what} is not positive"
        )));
    }
    usize::try_from(resolved).map_err(|_| RenderError::geometry(format!("text block {what} too large")))
}

impl<D: Device + ?Sized> Renderer<'_, D> {
    /// Write `text` wrapped to the block width, one row per line
    ///
    /// Lines that do not fit in the block height are dropped. Size is
    /// validated before anything is written.
    pub fn write_text_block(&mut self, text: &str, block: &TextBlock) -> Result<()> {
        let size = self.device.size();
        let width = extent(Some(block.width), block.x, size.width, "width")?;
        let height = extent(block.height, block.y, size.height, "height")?;

        let lines = self.metrics.wrap(text, width);
        debug!(
            width,
            height,
            lines = lines.len(),
            truncated = lines.len() > height,
            "writing text block"
        );

        for (row, line) in lines.iter().take(height).enumerate() {
            let y = block.y.saturating_add(row as u16);
            let line = self.metrics.trim_to_width(line, width);
            self.write_at(line, block.x, y, block.color, block.bg_color)?;
        }
        Ok(())
    }
}
