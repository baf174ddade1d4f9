//! Device dimensions in cells

/// Console width and height in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    /// Create a new size
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Classic 80x25 console, used when the real size cannot be determined
    pub const fn fallback() -> Self {
        Self {
            width: 80,
            height: 25,
        }
    }

    /// Check if the size is empty (zero area)
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of cells
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::fallback()
    }
}

impl From<(u16, u16)> for Size {
    fn from((width, height): (u16, u16)) -> Self {
        Self { width, height }
    }
}
