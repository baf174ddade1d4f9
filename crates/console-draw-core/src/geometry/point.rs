//! Cursor position in cell coordinates

/// A cell address on the console grid (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    /// Create a new point
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Home position (0, 0)
    pub const fn home() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Advance one cell to the right, wrapping to the next row at `columns`
    pub fn advance(self, cells: u16, columns: u16) -> Self {
        if columns == 0 {
            return self;
        }
        let linear = u32::from(self.x) + u32::from(cells);
        let columns = u32::from(columns);
        Self {
            x: (linear % columns) as u16,
            y: self.y.saturating_add((linear / columns) as u16),
        }
    }

    /// Start of the following row
    pub fn next_row(self) -> Self {
        Self {
            x: 0,
            y: self.y.saturating_add(1),
        }
    }
}

impl From<(u16, u16)> for Point {
    fn from((x, y): (u16, u16)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_advance_within_row() {
        assert_eq!(Point::new(3, 1).advance(2, 80), Point::new(5, 1));
    }

    #[test]
    fn test_point_advance_wraps() {
        assert_eq!(Point::new(79, 0).advance(1, 80), Point::new(0, 1));
        assert_eq!(Point::new(78, 2).advance(5, 80), Point::new(3, 3));
    }

    #[test]
    fn test_point_next_row() {
        assert_eq!(Point::new(12, 4).next_row(), Point::new(0, 5));
    }
}
