//! Error types for the conversion pipeline.

use std::path::PathBuf;

use crate::config::ConfigError;

/// The source image could not be opened or decoded.
#[derive(Debug, thiserror::Error)]
#[error("Failed to load image '{}': {source}", .path.display())]
pub struct ImageLoadError {
    pub path: PathBuf,
    #[source]
    pub source: image::ImageError,
}

/// A font could not be turned into a luminance ramp.
///
/// Never fatal: callers fall back to the ramp they already have.
#[derive(Debug, thiserror::Error)]
pub enum RampError {
    #[error("Failed to read font '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Font '{}' is not a valid TrueType/OpenType font", .path.display())]
    InvalidFont { path: PathBuf },
}

/// The margins leave no room to place anything on the page.
#[derive(Debug, thiserror::Error)]
#[error(
    "Margins leave no printable area on {paper} paper ({width:.2}x{height:.2}pt remaining)"
)]
pub struct LayoutError {
    pub paper: &'static str,
    pub width: f64,
    pub height: f64,
}

/// Top-level error for a single conversion run.
#[derive(Debug, thiserror::Error)]
pub enum AsciifyError {
    #[error(transparent)]
    ImageLoad(#[from] ImageLoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("Failed to compress content stream: {0}")]
    Compress(#[source] std::io::Error),

    #[error("Failed to write output '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
