//! Colors, line/fill styles and color sinks

mod color;
mod line_style;
mod sink;

pub use color::{Color, ParseColorError};
pub use line_style::{FillStyle, LineStyle, ParseStyleError};
pub use sink::{AnsiColor, ColorSink, NoColor};
