//! Plain geometric value types shared by the sampler and the page renderers.

use serde::Deserialize;

/// Points per millimetre (1in = 25.4mm = 72pt).
pub const PT_PER_MM: f64 = 2.834645669;

/// Convert millimetres to PostScript/PDF point units.
#[inline]
pub fn mm_to_pt(mm: f64) -> f64 {
    mm * PT_PER_MM
}

/// Width and height of a rectangle, in whatever unit the caller is working in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Scale both axes by the same factor.
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// A coordinate on a 2-D plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Page margins in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    /// Default margin on every side, in millimetres.
    pub const DEFAULT_MM: f64 = 10.0;

    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same margin on all four sides.
    pub const fn uniform(mm: f64) -> Self {
        Self::new(mm, mm, mm, mm)
    }

    /// Check that every side is a finite, non-negative length.
    pub fn check(self) -> Result<Self, String> {
        for (side, mm) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !(mm.is_finite() && mm >= 0.0) {
                return Err(format!(
                    "Margin {} must be a non-negative number of millimetres, got {}",
                    side, mm
                ));
            }
        }
        Ok(self)
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::uniform(Self::DEFAULT_MM)
    }
}
