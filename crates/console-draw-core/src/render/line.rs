//! Single-line writer

use super::Renderer;
use crate::device::Device;
use crate::error::Result;
use crate::style::Color;
use std::cmp::Ordering;
use tracing::trace;

impl<D: Device + ?Sized> Renderer<'_, D> {
    /// Write one logical line, truncated to the device width
    ///
    /// Leading and trailing CR/LF are stripped and embedded newlines become
    /// spaces, so the only newline emitted is the one appended here. The
    /// width used for the decision is measured before that cleanup.
    ///
    /// - wider than the device: trimmed to the device width, no newline
    /// - exactly the device width: written as is, no newline, since the
    ///   device wraps to the next row on its own
    /// - narrower: written followed by a newline
    pub fn write_line(&mut self, text: &str, fg: Option<Color>, bg: Option<Color>) -> Result<()> {
        let width = self.metrics.display_width(text);
        let text = text
            .trim_matches(['\r', '\n'])
            .replace('\n', " ");
        let console_width = usize::from(self.device.width());

        match width.cmp(&console_width) {
            Ordering::Greater => {
                let trimmed = self.metrics.trim_to_width(&text, console_width);
                self.write(trimmed, fg, bg)
            }
            Ordering::Equal => self.write(&text, fg, bg),
            Ordering::Less => {
                // Newline goes after the color reset so the background
                // does not bleed into the next row
                let mut line = self.paint(&text, fg, bg).into_owned();
                line.push('\n');
                trace!(len = line.len(), ?fg, ?bg, "write");
                self.device.write(&line)?;
                Ok(())
            }
        }
    }
}
