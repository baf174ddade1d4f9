//! RAII guard for raw terminal mode

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

/// Holds the terminal in raw mode until dropped
///
/// Used while reading single key presses so input is delivered without
/// waiting for Enter. Raw mode is left even if the reader panics.
pub struct RawModeGuard {
    // Private field to prevent construction outside this module
    _private: (),
}

impl RawModeGuard {
    /// Enable raw mode
    pub fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Best effort cleanup - ignore errors during drop
        let _ = disable_raw_mode();
    }
}
