//! 2D grid of cells implementing the device contract
//!
//! Emulates what a console does with the calls it receives: writes land at
//! the cursor and advance it, wrapping at the right edge; cursor moves are
//! clamped to the screen; escape sequences are consumed without effect.
//! Output past the bottom row is discarded rather than scrolled.

use super::Cell;
use crate::device::Device;
use crate::geometry::{Point, Size};
use crate::style::Color;
use crate::text::char_width;
use std::io;
use std::iter::Peekable;
use std::str::Chars;

/// In-memory console screen
#[derive(Debug, Clone)]
pub struct Buffer {
    size: Size,
    /// Flat array of cells (row-major order)
    cells: Vec<Cell>,
    cursor: Point,
    fg: Color,
    bg: Color,
    title: Vec<String>,
}

impl Buffer {
    /// Create a blank screen of the given size
    pub fn new(size: Size) -> Self {
        Self {
            size,
            cells: vec![Cell::empty(); size.area() as usize],
            cursor: Point::home(),
            fg: Color::Reset,
            bg: Color::Reset,
            title: Vec::new(),
        }
    }

    /// Convert (x, y) to index in the cells array
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.size.width && y < self.size.height {
            Some(usize::from(y) * usize::from(self.size.width) + usize::from(x))
        } else {
            None
        }
    }

    /// Get a cell at position (returns None if out of bounds)
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Current cursor position
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Symbols of one row, concatenated
    pub fn row(&self, y: u16) -> String {
        (0..self.size.width)
            .filter_map(|x| self.get(x, y))
            .map(|cell| cell.symbol.as_str())
            .collect()
    }

    /// Every row with trailing blanks removed
    pub fn rows(&self) -> Vec<String> {
        (0..self.size.height)
            .map(|y| self.row(y).trim_end().to_string())
            .collect()
    }

    /// Screen contents as text, trailing blank rows dropped
    pub fn to_text(&self) -> String {
        let mut rows = self.rows();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        rows.join("\n")
    }

    fn put(&mut self, c: char) {
        let width = self.size.width;
        let cells = char_width(c) as u16;

        if cells == 0 {
            // Combining mark joins the glyph left of the cursor
            if let Some(x) = self.cursor.x.checked_sub(1) {
                if let Some(idx) = self.index(x, self.cursor.y) {
                    self.cells[idx].symbol.push(c);
                }
            }
            return;
        }

        if self.cursor.x.saturating_add(cells) > width {
            self.cursor = self.cursor.next_row();
        }

        let (fg, bg) = (self.fg, self.bg);
        if let Some(idx) = self.index(self.cursor.x, self.cursor.y) {
            self.cells[idx] = Cell::new(c).fg(fg).bg(bg);
        }
        if cells == 2 {
            if let Some(idx) = self.index(self.cursor.x + 1, self.cursor.y) {
                self.cells[idx] = Cell::new("").fg(fg).bg(bg);
            }
        }
        self.cursor = self.cursor.advance(cells, width);
    }
}

/// Consume the remainder of an escape sequence
fn skip_escape(chars: &mut Peekable<Chars<'_>>) {
    match chars.next() {
        // CSI: parameters then a final byte in '@'..='~'
        Some('[') => {
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        }
        // Character set designation
        Some('(') | Some(')') => {
            chars.next();
        }
        // OSC: terminated by BEL or ST
        Some(']') => {
            while let Some(c) = chars.next() {
                if c == '\x07' {
                    break;
                }
                if c == '\x1b' && chars.peek() == Some(&'\\') {
                    chars.next();
                    break;
                }
            }
        }
        _ => {}
    }
}

impl Device for Buffer {
    fn size(&self) -> Size {
        self.size
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\n' => self.cursor = self.cursor.next_row(),
                '\r' => self.cursor.x = 0,
                '\x1b' => skip_escape(&mut chars),
                c if c.is_control() => {}
                c => self.put(c),
            }
        }
        Ok(())
    }

    fn set_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        self.cursor = Point::new(
            x.min(self.size.width.saturating_sub(1)),
            y.min(self.size.height.saturating_sub(1)),
        );
        Ok(())
    }

    fn set_color(&mut self, color: Color) -> io::Result<()> {
        self.fg = color;
        Ok(())
    }

    fn set_bg_color(&mut self, color: Color) -> io::Result<()> {
        self.bg = color;
        Ok(())
    }

    fn reset_color(&mut self) -> io::Result<()> {
        self.fg = Color::Reset;
        self.bg = Color::Reset;
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.cells.fill(Cell::empty());
        self.cursor = Point::home();
        Ok(())
    }

    fn clear_line(&mut self) -> io::Result<()> {
        let y = self.cursor.y;
        for x in 0..self.size.width {
            if let Some(idx) = self.index(x, y) {
                self.cells[idx] = Cell::empty();
            }
        }
        self.cursor.x = 0;
        Ok(())
    }

    fn title(&self) -> String {
        self.title.last().cloned().unwrap_or_default()
    }

    fn set_title(&mut self, title: &str) -> io::Result<()> {
        self.title.push(title.to_string());
        Ok(())
    }

    fn reset_title(&mut self) -> io::Result<()> {
        self.title.pop();
        Ok(())
    }
}
