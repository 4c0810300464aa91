//! Image to character grid conversion.
//!
//! The pipeline runs in three pure stages:
//!
//! 1. **Sampling** - decode, optionally stretch, downsample to the column count
//! 2. **Mapping** - Rec. 709 luminance to a ramp index
//! 3. **Grid building** - one ramp character per sampled pixel
//!
//! The default [`LuminanceRamp`] is a curated 95-level sequence; a ramp can
//! also be generated from a font by ranking rendered glyphs by ink density.

mod charset;
mod grid;
mod mapping;
mod sampler;

pub use charset::{LuminanceRamp, DEFAULT_RAMP};
pub use grid::AsciiGrid;
pub use mapping::{luminance, map_pixel, ramp_index};
pub use sampler::{
    check_aspect, downsample, load, sample, stretch, RawImage, SampleOptions, SampledImage,
    DEFAULT_CHAR_ASPECT_RATIO, DEFAULT_RESOLUTION, MAX_ASPECT,
};
