//! Geometry primitives for cell addressing and box coordinates

mod point;
mod rect;
mod size;

pub use point::Point;
pub use rect::{BoxCoords, CellRect};
pub use size::Size;
