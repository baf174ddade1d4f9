//! Text metrics: display width, width-bounded trimming and wrapping

mod metrics;
mod wrap;

pub(crate) use metrics::char_width;
pub use metrics::{EncodingMode, TextMetrics};
