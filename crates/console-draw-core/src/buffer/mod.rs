//! In-memory cell grid that behaves like a console

mod buffer;
mod cell;

pub use buffer::Buffer;
pub use cell::Cell;
