//! Output devices: where dimensions come from and where text goes
//!
//! The renderer depends only on the [`Device`] contract. A device is owned
//! by one writer for the duration of a rendering call; nothing here locks.

mod raw_mode;
mod recorder;
mod terminal;

pub use raw_mode::RawModeGuard;
pub use recorder::{DeviceOp, Recorder};
pub use terminal::Terminal;

use crate::geometry::Size;
use crate::style::Color;
use std::io;

/// A character-cell output device
///
/// Cursor position is write-only from the renderer's point of view: callers
/// always position explicitly before placement-sensitive writes.
pub trait Device {
    /// Current width and height in cells
    fn size(&self) -> Size;

    /// Write text at the cursor, advancing it
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Move the cursor to column `x`, row `y`
    fn set_cursor(&mut self, x: u16, y: u16) -> io::Result<()>;

    /// Change the foreground color for subsequent writes
    fn set_color(&mut self, color: Color) -> io::Result<()>;

    /// Change the background color for subsequent writes
    fn set_bg_color(&mut self, color: Color) -> io::Result<()>;

    /// Restore the device's default colors
    fn reset_color(&mut self) -> io::Result<()>;

    fn width(&self) -> u16 {
        self.size().width
    }

    fn height(&self) -> u16 {
        self.size().height
    }

    /// Push pending output to the screen
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Whether the device decodes UTF-8
    fn is_utf8(&self) -> bool {
        true
    }

    /// Clear the whole screen
    fn clear(&mut self) -> io::Result<()> {
        self.write("\x0c")
    }

    /// Blank the line the cursor is on and return to its first column
    fn clear_line(&mut self) -> io::Result<()> {
        let blank = " ".repeat(usize::from(self.width()));
        self.write(&format!("\r{blank}\r"))
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Window title last set through this device, empty if unknown
    fn title(&self) -> String {
        String::new()
    }

    fn set_title(&mut self, _title: &str) -> io::Result<()> {
        Ok(())
    }

    /// Restore the title that was active before the last `set_title`
    fn reset_title(&mut self) -> io::Result<()> {
        Ok(())
    }
}
