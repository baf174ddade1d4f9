//! Rendering error types

use std::io;
use thiserror::Error;

/// Errors surfaced by the rendering core
#[derive(Error, Debug)]
pub enum RenderError {
    /// Resolved coordinates violate ordering or non-negativity
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    /// The output device reported a failure; passed through unchanged
    #[error("Device write failed: {0}")]
    Device(#[from] io::Error),
}

impl RenderError {
    pub(crate) fn geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }

    /// True when the error was raised by validation rather than the device
    pub fn is_geometry(&self) -> bool {
        matches!(self, Self::InvalidGeometry { .. })
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
