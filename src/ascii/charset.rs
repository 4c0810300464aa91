//! Luminance ramp definitions and font-driven ramp generation.

use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};

use crate::error::RampError;

use super::mapping::luminance;

/// Built-in 95-level ramp covering printable ASCII.
/// Characters ordered from darkest (dense capitals) to lightest (space).
/// Hand-tuned for fixed-width fonts printed black on white.
pub const DEFAULT_RAMP: &str = concat!(
    "HRBEpMqQNWg#mbAKdD8@PGFUhXeTZSkO$yaLf60w9&5Yx4nsC%Vo2uJIz3jctrlvi",
    "}?{1=][+7<>|!*/\\)(;:~\"^_-,'.` ",
);

/// Side length of the square canvas each glyph is rendered onto.
const GLYPH_CANVAS: u32 = 64;

/// Printable ASCII, space through tilde.
const PRINTABLE: std::ops::RangeInclusive<u8> = 32..=126;

/// Ordered characters used to represent luminance levels.
///
/// Index 0 is the darkest glyph, the last index the lightest. A ramp is
/// never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuminanceRamp {
    chars: Vec<char>,
}

impl Default for LuminanceRamp {
    fn default() -> Self {
        Self {
            chars: DEFAULT_RAMP.chars().collect(),
        }
    }
}

impl LuminanceRamp {
    /// Build a ramp from an explicit character sequence.
    ///
    /// Returns `None` for an empty sequence.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Option<Self> {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            None
        } else {
            Some(Self { chars })
        }
    }

    /// Rank printable ASCII by rendered ink density in the given font.
    ///
    /// Each glyph is drawn in black onto a white 64×64 canvas and scored by
    /// summing the perceptual luminance of every pixel. Lower scores mean more
    /// ink, so sorting ascending yields darkest first.
    pub fn generate(font_path: &Path) -> Result<Self, RampError> {
        let data = std::fs::read(font_path).map_err(|source| RampError::Read {
            path: font_path.to_path_buf(),
            source,
        })?;
        let font = FontVec::try_from_vec(data).map_err(|_| RampError::InvalidFont {
            path: font_path.to_path_buf(),
        })?;

        let scale = PxScale::from((0.8 * GLYPH_CANVAS as f32).round());
        let mut scored: Vec<(f64, char)> = PRINTABLE
            .map(|code| {
                let c = code as char;
                (ink_score(&font, scale, c), c)
            })
            .collect();
        scored.sort_by(|a, b| a.0.total_cmp(&b.0));

        log::debug!(
            "Generated ramp from {}: {}",
            font_path.display(),
            scored.iter().map(|(_, c)| *c).collect::<String>()
        );
        Ok(Self {
            chars: scored.into_iter().map(|(_, c)| c).collect(),
        })
    }

    /// Replace this ramp with one generated from `font_path`, keeping the
    /// current ramp if the font cannot be used.
    pub fn or_generated(self, font_path: &Path) -> Self {
        match Self::generate(font_path) {
            Ok(ramp) => ramp,
            Err(e) => {
                log::warn!("{}; keeping current luminance ramp", e);
                self
            }
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn darkest(&self) -> char {
        self.chars[0]
    }

    pub fn lightest(&self) -> char {
        self.chars[self.chars.len() - 1]
    }

    /// Lowest and highest code point in the ramp.
    pub fn code_range(&self) -> (u32, u32) {
        let codes = self.chars.iter().map(|&c| c as u32);
        let min = codes.clone().min().unwrap_or(32);
        let max = codes.max().unwrap_or(126);
        (min, max)
    }
}

fn ink_score(font: &FontVec, scale: PxScale, c: char) -> f64 {
    let mut canvas = RgbImage::from_pixel(GLYPH_CANVAS, GLYPH_CANVAS, Rgb([255, 255, 255]));
    let mut buf = [0u8; 4];
    imageproc::drawing::draw_text_mut(
        &mut canvas,
        Rgb([0, 0, 0]),
        0,
        0,
        scale,
        font,
        c.encode_utf8(&mut buf),
    );
    canvas
        .pixels()
        .map(|p| luminance(p[0], p[1], p[2]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ramp_has_95_levels() {
        assert_eq!(LuminanceRamp::default().len(), 95);
    }

    #[test]
    fn test_default_ramp_covers_printable_ascii_once() {
        let ramp = LuminanceRamp::default();
        let mut codes: Vec<u32> = ramp.chars().iter().map(|&c| c as u32).collect();
        codes.sort_unstable();
        let expected: Vec<u32> = (32..=126).collect();
        assert_eq!(codes, expected);
    }

    #[test]
    fn test_default_ramp_ends_with_space() {
        let ramp = LuminanceRamp::default();
        assert_eq!(ramp.darkest(), 'H');
        assert_eq!(ramp.lightest(), ' ');
    }

    #[test]
    fn test_empty_ramp_rejected() {
        assert!(LuminanceRamp::new(std::iter::empty()).is_none());
        assert!(LuminanceRamp::new("#.".chars()).is_some());
    }

    #[test]
    fn test_code_range() {
        let ramp = LuminanceRamp::new("Mz .".chars()).unwrap();
        assert_eq!(ramp.code_range(), (32, 'z' as u32));
    }
}
