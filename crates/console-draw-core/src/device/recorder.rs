//! In-memory device that records every call

use super::Device;
use crate::geometry::Size;
use crate::style::Color;
use std::io;

/// One call made against a device
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceOp {
    Write(String),
    SetCursor(u16, u16),
    SetColor(Color),
    SetBgColor(Color),
    ResetColor,
    Clear,
    ShowCursor,
    HideCursor,
    SetTitle(String),
    ResetTitle,
}

/// Device that logs calls instead of drawing
///
/// Useful for asserting the exact order of writes a rendering call issues,
/// and for simulating a device that fails part way through.
#[derive(Debug, Clone)]
pub struct Recorder {
    size: Size,
    ops: Vec<DeviceOp>,
    titles: Vec<String>,
    writes_before_failure: Option<usize>,
}

impl Recorder {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
            titles: Vec::new(),
            writes_before_failure: None,
        }
    }

    /// Fail every write after the first `writes` succeed
    pub fn failing_after(mut self, writes: usize) -> Self {
        self.writes_before_failure = Some(writes);
        self
    }

    /// Calls recorded so far
    pub fn ops(&self) -> &[DeviceOp] {
        &self.ops
    }

    /// Drain the recorded calls
    pub fn take(&mut self) -> Vec<DeviceOp> {
        std::mem::take(&mut self.ops)
    }

    /// Concatenation of every written payload
    pub fn written(&self) -> String {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DeviceOp::Write(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }
}

impl Device for Recorder {
    fn size(&self) -> Size {
        self.size
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        if let Some(remaining) = self.writes_before_failure.as_mut() {
            if *remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "device gone"));
            }
            *remaining -= 1;
        }
        self.ops.push(DeviceOp::Write(text.to_string()));
        Ok(())
    }

    fn set_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        self.ops.push(DeviceOp::SetCursor(x, y));
        Ok(())
    }

    fn set_color(&mut self, color: Color) -> io::Result<()> {
        self.ops.push(DeviceOp::SetColor(color));
        Ok(())
    }

    fn set_bg_color(&mut self, color: Color) -> io::Result<()> {
        self.ops.push(DeviceOp::SetBgColor(color));
        Ok(())
    }

    fn reset_color(&mut self) -> io::Result<()> {
        self.ops.push(DeviceOp::ResetColor);
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.ops.push(DeviceOp::Clear);
        Ok(())
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        self.ops.push(DeviceOp::ShowCursor);
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        self.ops.push(DeviceOp::HideCursor);
        Ok(())
    }

    fn title(&self) -> String {
        self.titles.last().cloned().unwrap_or_default()
    }

    fn set_title(&mut self, title: &str) -> io::Result<()> {
        self.titles.push(title.to_string());
        self.ops.push(DeviceOp::SetTitle(title.to_string()));
        Ok(())
    }

    fn reset_title(&mut self) -> io::Result<()> {
        self.titles.pop();
        self.ops.push(DeviceOp::ResetTitle);
        Ok(())
    }
}
