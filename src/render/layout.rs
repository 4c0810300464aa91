//! Paper sizes and the page layout shared by the PostScript and PDF renderers.

use serde::Deserialize;

use crate::ascii::AsciiGrid;
use crate::error::LayoutError;
use crate::geometry::{mm_to_pt, Margin, Point, Size};

/// Character cell pitch in points, both axes.
pub const CELL_PITCH: f64 = 12.0;

/// Nominal font size in points before the page transform.
pub const FONT_SIZE: f64 = 12.0;

/// Physical paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    A6,
    A5,
    A4,
    #[default]
    A3,
    A2,
    A1,
    A0,
    Letter,
}

impl PaperSize {
    /// Width and height in millimetres (portrait).
    pub fn size_mm(self) -> Size {
        match self {
            PaperSize::A6 => Size::new(105.0, 148.0),
            PaperSize::A5 => Size::new(148.0, 210.0),
            PaperSize::A4 => Size::new(210.0, 297.0),
            PaperSize::A3 => Size::new(297.0, 420.0),
            PaperSize::A2 => Size::new(420.0, 594.0),
            PaperSize::A1 => Size::new(594.0, 841.0),
            PaperSize::A0 => Size::new(841.0, 1189.0),
            PaperSize::Letter => Size::new(215.9, 279.4),
        }
    }

    /// Width and height in points.
    pub fn size_pt(self) -> Size {
        let mm = self.size_mm();
        Size::new(mm_to_pt(mm.width), mm_to_pt(mm.height))
    }

    pub fn name(self) -> &'static str {
        match self {
            PaperSize::A6 => "a6",
            PaperSize::A5 => "a5",
            PaperSize::A4 => "a4",
            PaperSize::A3 => "a3",
            PaperSize::A2 => "a2",
            PaperSize::A1 => "a1",
            PaperSize::A0 => "a0",
            PaperSize::Letter => "letter",
        }
    }
}

/// Placement of a character grid on a page, in points.
///
/// Grid-local coordinates put column `x` at `x * pitch` and row `y` at
/// `(rows - 1 - y) * pitch`, so row 0 is the top line. Page coordinates are
/// `offset + scale * local`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub paper: Size,
    /// Lower-left corner of the printable area.
    pub printable_origin: Point,
    pub printable: Size,
    /// Unscaled grid extent: `(columns * pitch, rows * pitch)`.
    pub natural: Size,
    pub scale: f64,
    /// Page position of grid-local (0, 0).
    pub offset: Point,
    pub pitch: f64,
    rows: usize,
}

impl PageLayout {
    /// Fit `grid` into the printable area of `paper` with `margin`.
    ///
    /// The scale is `min(printable.width / natural.width,
    /// printable.height / natural.height)`. For grids whose shape matches the
    /// printable area this is the width ratio; a grid relatively taller than
    /// the printable area gets the smaller height ratio instead of the width
    /// ratio, so it never runs off the top or bottom of the page. The scaled
    /// grid is centred in the printable area.
    ///
    /// Fails when the margins leave no printable width or height.
    pub fn new(
        grid: &AsciiGrid,
        paper_size: PaperSize,
        margin: &Margin,
    ) -> Result<Self, LayoutError> {
        let pitch = CELL_PITCH;
        let paper = paper_size.size_pt();
        let printable = Size::new(
            paper.width - mm_to_pt(margin.left + margin.right),
            paper.height - mm_to_pt(margin.top + margin.bottom),
        );
        if !(printable.width > 0.0 && printable.height > 0.0) {
            return Err(LayoutError {
                paper: paper_size.name(),
                width: printable.width,
                height: printable.height,
            });
        }
        let printable_origin = Point::new(mm_to_pt(margin.left), mm_to_pt(margin.bottom));

        let natural = Size::new(
            grid.width().max(1) as f64 * pitch,
            grid.height().max(1) as f64 * pitch,
        );
        let scale = (printable.width / natural.width).min(printable.height / natural.height);

        let scaled = natural.scaled(scale);
        let offset = Point::new(
            printable_origin.x + (printable.width - scaled.width) / 2.0,
            printable_origin.y + (printable.height - scaled.height) / 2.0,
        );
        log::debug!(
            "Layout: printable {:.2}x{:.2}pt, scale {:.4}, offset ({:.2}, {:.2})",
            printable.width,
            printable.height,
            scale,
            offset.x,
            offset.y
        );

        Ok(Self {
            paper,
            printable_origin,
            printable,
            natural,
            scale,
            offset,
            pitch,
            rows: grid.height(),
        })
    }

    /// Grid-local baseline position of a cell, before scaling.
    pub fn local(&self, col: usize, row: usize) -> Point {
        Point::new(
            col as f64 * self.pitch,
            (self.rows.saturating_sub(1) - row) as f64 * self.pitch,
        )
    }

    /// Absolute page position of a cell.
    pub fn place(&self, col: usize, row: usize) -> Point {
        let local = self.local(col, row);
        Point::new(
            self.offset.x + local.x * self.scale,
            self.offset.y + local.y * self.scale,
        )
    }

    /// Font size on the page once the transform is applied.
    pub fn scaled_font_size(&self) -> f64 {
        FONT_SIZE * self.scale
    }
}

/// Format a number for a page description: at most four decimals, no
/// trailing zeros, never exponent notation.
pub fn fmt_num(value: f64) -> String {
    let s = format!("{:.4}", value);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Escape a character for use inside a `( ... )` string operand.
pub fn escape_char(c: char, out: &mut String) {
    if matches!(c, '(' | ')' | '\\') {
        out.push('\\');
    }
    out.push(c);
}
