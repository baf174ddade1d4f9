//! Terminal device wrapping crossterm operations

use super::{Device, RawModeGuard};
use crate::geometry::Size;
use crate::style::Color;
use crate::text::EncodingMode;
use crossterm::{
    cursor::{Hide, MoveTo, MoveToColumn, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, SetTitle},
};
use std::io::{self, BufRead, Stdout, Write};
use tracing::{trace, warn};

/// Console device on stdout
///
/// Commands are queued and reach the screen on [`Device::flush`].
pub struct Terminal {
    stdout: Stdout,
    /// Current terminal size
    size: Size,
    /// Whether the locale decodes UTF-8
    utf8: bool,
    /// Titles set through this device, most recent last
    titles: Vec<String>,
}

impl Terminal {
    /// Create a terminal device for stdout
    ///
    /// When stdout is not a terminal the size falls back to 80x25.
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            size: query_size(),
            utf8: EncodingMode::detect() == EncodingMode::Utf8,
            titles: Vec::new(),
        }
    }

    /// Refresh size from terminal (call after resize event)
    pub fn refresh_size(&mut self) {
        self.size = query_size();
    }

    /// Read one line of input, without its line terminator
    ///
    /// Input beyond `max_len` characters is discarded.
    pub fn read_line(&mut self, max_len: usize) -> io::Result<String> {
        self.stdout.flush()?;
        read_line_from(&mut io::stdin().lock(), max_len)
    }

    /// Read a single key press
    ///
    /// With a `mask`, keys are read until one appears in it (compared
    /// case-insensitively). Enter is reported as `'\n'`.
    pub fn read_char(&mut self, mask: Option<&str>) -> io::Result<char> {
        self.stdout.flush()?;
        let mask = mask.map(str::to_lowercase);
        let _raw = RawModeGuard::enable()?;

        loop {
            let Event::Key(KeyEvent { code, kind, .. }) = event::read()? else {
                continue;
            };
            if kind != KeyEventKind::Press {
                continue;
            }
            let c = match code {
                KeyCode::Char(c) => c,
                KeyCode::Enter => '\n',
                KeyCode::Tab => '\t',
                _ => continue,
            };
            if mask_accepts(mask.as_deref(), c) {
                return Ok(c);
            }
            trace!(key = ?c, "key outside mask ignored");
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

/// One line from `input` without its terminator, cut to `max_len` characters
fn read_line_from<R: BufRead>(input: &mut R, max_len: usize) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let line = line.trim_end_matches(['\r', '\n']);
    Ok(line.chars().take(max_len).collect())
}

/// Whether a key passes the mask; `mask` must already be lowercase
fn mask_accepts(mask: Option<&str>, c: char) -> bool {
    mask.map_or(true, |mask| c.to_lowercase().all(|lc| mask.contains(lc)))
}

fn query_size() -> Size {
    match terminal::size() {
        Ok((width, height)) => Size::new(width, height),
        Err(err) => {
            warn!(error = %err, "could not query terminal size; assuming 80x25");
            Size::fallback()
        }
    }
}

impl Device for Terminal {
    fn size(&self) -> Size {
        self.size
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        queue!(self.stdout, Print(text))
    }

    fn set_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        queue!(self.stdout, MoveTo(x, y))
    }

    fn set_color(&mut self, color: Color) -> io::Result<()> {
        queue!(self.stdout, SetForegroundColor(color.into()))
    }

    fn set_bg_color(&mut self, color: Color) -> io::Result<()> {
        queue!(self.stdout, SetBackgroundColor(color.into()))
    }

    fn reset_color(&mut self) -> io::Result<()> {
        queue!(self.stdout, ResetColor)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }

    fn is_utf8(&self) -> bool {
        self.utf8
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn clear_line(&mut self) -> io::Result<()> {
        queue!(self.stdout, MoveToColumn(0), Clear(ClearType::CurrentLine))
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        queue!(self.stdout, Show)
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        queue!(self.stdout, Hide)
    }

    fn title(&self) -> String {
        self.titles.last().cloned().unwrap_or_default()
    }

    fn set_title(&mut self, title: &str) -> io::Result<()> {
        self.titles.push(title.to_string());
        queue!(self.stdout, SetTitle(title))
    }

    fn reset_title(&mut self) -> io::Result<()> {
        self.titles.pop();
        let previous = self.title();
        queue!(self.stdout, SetTitle(previous))
    }
}
