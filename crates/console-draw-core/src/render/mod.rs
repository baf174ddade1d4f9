//! Rendering: positioned text, single lines, boxes and wrapped blocks
//!
//! A [`Renderer`] borrows a device together with the charset, color sink
//! and text metrics to draw with. It keeps no state between calls, so one
//! can be built per frame or kept around; either way it must be the only
//! writer on the device while a call runs.

mod block;
mod boxes;
mod line;

pub use block::TextBlock;
pub use boxes::BoxStyle;

use crate::charset::Charset;
use crate::device::Device;
use crate::error::Result;
use crate::style::{Color, ColorSink};
use crate::text::TextMetrics;
use std::borrow::Cow;
use tracing::trace;

/// Drawing front end over a [`Device`]
pub struct Renderer<'a, D: Device + ?Sized> {
    device: &'a mut D,
    charset: &'a dyn Charset,
    colors: &'a dyn ColorSink,
    metrics: TextMetrics,
}

impl<'a, D: Device + ?Sized> Renderer<'a, D> {
    pub fn new(
        device: &'a mut D,
        charset: &'a dyn Charset,
        colors: &'a dyn ColorSink,
        metrics: TextMetrics,
    ) -> Self {
        Self {
            device,
            charset,
            colors,
            metrics,
        }
    }

    /// The underlying device
    pub fn device(&mut self) -> &mut D {
        &mut *self.device
    }

    pub fn charset(&self) -> &dyn Charset {
        self.charset
    }

    pub fn metrics(&self) -> TextMetrics {
        self.metrics
    }

    /// Write text at the cursor, colorized only when a color is given
    pub fn write(&mut self, text: &str, fg: Option<Color>, bg: Option<Color>) -> Result<()> {
        trace!(len = text.len(), ?fg, ?bg, "write");
        let painted = self.paint(text, fg, bg);
        self.device.write(&painted)?;
        Ok(())
    }

    fn paint<'t>(&self, text: &'t str, fg: Option<Color>, bg: Option<Color>) -> Cow<'t, str> {
        if fg.is_some() || bg.is_some() {
            self.colors.colorize(text, fg, bg)
        } else {
            Cow::Borrowed(text)
        }
    }

    /// Move the cursor, then write
    pub fn write_at(
        &mut self,
        text: &str,
        x: u16,
        y: u16,
        fg: Option<Color>,
        bg: Option<Color>,
    ) -> Result<()> {
        self.device.set_cursor(x, y)?;
        self.write(text, fg, bg)
    }

    /// Emit a control sequence verbatim; empty sequences are skipped
    fn control(&mut self, sequence: &str) -> Result<()> {
        if !sequence.is_empty() {
            self.device.write(sequence)?;
        }
        Ok(())
    }
}
