//! Box coordinates: raw caller input and the validated cell rectangle

use super::{Point, Size};
use crate::error::{RenderError, Result};

/// Box corners as supplied by a caller
///
/// A negative `x2` or `y2` is an offset measured from the far edge of the
/// device and is resolved against the device size before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct BoxCoords {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl BoxCoords {
    /// Create box coordinates from the top-left and bottom-right corners
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Resolve far-edge offsets and validate ordering
    ///
    /// A negative far coordinate resolves as `extent - offset`, so on an
    /// 80-column device `x2 = -1` becomes column 81. No clamping to the
    /// device is performed; coordinates past the last addressable cell
    /// saturate at `u16::MAX`.
    pub fn resolve(self, size: Size) -> Result<CellRect> {
        let x1 = i64::from(self.x1);
        let y1 = i64::from(self.y1);
        let mut x2 = i64::from(self.x2);
        let mut y2 = i64::from(self.y2);

        if x2 < 0 {
            x2 = i64::from(size.width) - x2;
        }
        if y2 < 0 {
            y2 = i64::from(size.height) - y2;
        }

        if x1 < 0 {
            return Err(RenderError::geometry("top-left x is negative"));
        }
        if y1 < 0 {
            return Err(RenderError::geometry("top-left y is negative"));
        }
        if x2 < x1 {
            return Err(RenderError::geometry("bottom-right left of top-left"));
        }
        if y2 < y1 {
            return Err(RenderError::geometry("bottom-right above top-left"));
        }

        Ok(CellRect {
            x1: cell(x1),
            y1: cell(y1),
            x2: cell(x2),
            y2: cell(y2),
        })
    }
}

impl From<(i32, i32, i32, i32)> for BoxCoords {
    fn from((x1, y1, x2, y2): (i32, i32, i32, i32)) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

/// Cells past `u16::MAX` lie off any device
fn cell(value: i64) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// A validated rectangle with inclusive corners
///
/// Invariant: `x1 <= x2` and `y1 <= y2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRect {
    pub x1: u16,
    pub y1: u16,
    pub x2: u16,
    pub y2: u16,
}

impl CellRect {
    /// Number of columns covered, corners included
    pub const fn width(&self) -> u32 {
        (self.x2 - self.x1) as u32 + 1
    }

    /// Number of rows covered, corners included
    pub const fn height(&self) -> u32 {
        (self.y2 - self.y1) as u32 + 1
    }

    /// Corners in drawing order: NW, NE, SE, SW
    pub const fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x1, self.y1),
            Point::new(self.x2, self.y1),
            Point::new(self.x2, self.y2),
            Point::new(self.x1, self.y2),
        ]
    }

    /// Rows strictly between the top and bottom edge
    pub fn interior_rows(&self) -> std::ops::Range<u16> {
        self.y1.saturating_add(1)..self.y2
    }
}
