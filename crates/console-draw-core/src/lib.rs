//! console-draw-core: rendering core for character-cell consoles
//!
//! This crate provides:
//! - Geometry primitives (`Point`, `Size`, `BoxCoords`, `CellRect`)
//! - Pluggable charsets mapping line/fill roles to concrete glyphs
//! - Pluggable color sinks (`NoColor`, `AnsiColor`)
//! - Unicode-aware text metrics with a byte-count fallback mode
//! - The `Device` contract plus a crossterm terminal, a call recorder and
//!   an in-memory cell buffer
//! - A `Renderer` composing lines, boxes and wrapped text blocks

pub mod buffer;
pub mod charset;
pub mod device;
pub mod error;
pub mod geometry;
pub mod render;
pub mod style;
pub mod text;

// Re-export commonly used types
pub use buffer::{Buffer, Cell};
pub use charset::{BoxGlyphs, Charset, GlyphRole, LineWeight, ShadeGlyphs};
pub use device::{Device, DeviceOp, Recorder, Terminal};
pub use error::{RenderError, Result};
pub use geometry::{BoxCoords, CellRect, Point, Size};
pub use render::{BoxStyle, Renderer, TextBlock};
pub use style::{AnsiColor, Color, ColorSink, FillStyle, LineStyle, NoColor};
pub use text::{EncodingMode, TextMetrics};
