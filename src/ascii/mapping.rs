//! Pixel colour to ramp character mapping.

use super::charset::LuminanceRamp;

/// Rec. 709 luma coefficients.
const LUMA_R: f64 = 0.2126;
const LUMA_G: f64 = 0.7152;
const LUMA_B: f64 = 0.0722;

/// Perceptual luminance of an RGB triple, in the range 0.0..=255.0.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64
}

/// Ramp index for a luminance value.
///
/// `floor(luminance * levels / 255)`, clamped to the last level so that pure
/// white lands on the lightest character rather than one past it.
#[inline]
pub fn ramp_index(luminance: f64, levels: usize) -> usize {
    let idx = (luminance * levels as f64 / 255.0).floor();
    if idx <= 0.0 {
        0
    } else {
        (idx as usize).min(levels - 1)
    }
}

/// Map a pixel colour to its ramp character.
pub fn map_pixel(r: u8, g: u8, b: u8, ramp: &LuminanceRamp) -> char {
    let chars = ramp.chars();
    chars[ramp_index(luminance(r, g, b), chars.len())]
}
