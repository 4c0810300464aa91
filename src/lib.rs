//! asciify library crate.
//!
//! Converts raster images into character grids and renders them as plain
//! text, PostScript or PDF.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod render;

pub use error::{AsciifyError, ImageLoadError, LayoutError, RampError};
