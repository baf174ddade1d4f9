//! console-draw: configuration and command line front end for the
//! `console-draw-core` renderer.

pub mod cli;
pub mod config;
