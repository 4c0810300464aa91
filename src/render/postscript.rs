//! Single-page PostScript output.
//!
//! The page sets up one translate/scale transform, then draws each inked cell
//! at its unscaled grid position through a small `c` procedure.

use std::fmt;

use crate::ascii::AsciiGrid;
use crate::error::AsciifyError;

use super::layout::{escape_char, fmt_num, PageLayout, FONT_SIZE};
use super::RenderOptions;

/// Render `grid` as a PostScript document.
pub fn render(grid: &AsciiGrid, options: &RenderOptions) -> Result<String, AsciifyError> {
    let layout = PageLayout::new(grid, options.paper, &options.margin)?;
    let out = Document {
        grid,
        layout: &layout,
        options,
    }
    .to_string();

    log::debug!(
        "PostScript page {}x{}pt, {} glyphs",
        fmt_num(layout.paper.width),
        fmt_num(layout.paper.height),
        grid.inked_cells().count()
    );
    Ok(out)
}

struct Document<'a> {
    grid: &'a AsciiGrid,
    layout: &'a PageLayout,
    options: &'a RenderOptions,
}

impl Document<'_> {
    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = self.layout;
        let options = self.options;
        let paper = layout.paper;
        let scaled = layout.natural.scaled(layout.scale);

        writeln!(f, "%!PS-Adobe-3.0")?;
        writeln!(
            f,
            "%%BoundingBox: {} {} {} {}",
            layout.offset.x.floor(),
            layout.offset.y.floor(),
            (layout.offset.x + scaled.width).ceil(),
            (layout.offset.y + scaled.height).ceil()
        )?;
        writeln!(f, "%%Creator: asciify")?;
        writeln!(
            f,
            "%%CreationDate: {}",
            options.created.format("%Y-%m-%dT%H:%M:%S")
        )?;
        writeln!(
            f,
            "%%DocumentMedia: {} {} {} 80 white ()",
            options.paper.name(),
            fmt_num(paper.width),
            fmt_num(paper.height)
        )?;
        writeln!(f, "%%Pages: 1")?;
        writeln!(f, "%%EndComments")?;
        writeln!(f, "%%BeginSetup")?;
        writeln!(
            f,
            "  << /PageSize [{} {}] /Orientation 0 >> setpagedevice",
            fmt_num(paper.width),
            fmt_num(paper.height)
        )?;
        writeln!(f, "%%EndSetup")?;
        writeln!(f)?;
        writeln!(f, "/{} findfont", options.font_name)?;
        writeln!(f, "{} scalefont", fmt_num(FONT_SIZE))?;
        writeln!(f, "setfont")?;
        writeln!(f)?;
        writeln!(f, "/c {{ moveto show }} def")?;
        writeln!(f)?;
        writeln!(
            f,
            "{} {} translate",
            fmt_num(layout.offset.x),
            fmt_num(layout.offset.y)
        )?;
        writeln!(
            f,
            "{} {} scale",
            fmt_num(layout.scale),
            fmt_num(layout.scale)
        )
    }
}

impl fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;

        let mut cell = String::with_capacity(4);
        for (x, y, c) in self.grid.inked_cells() {
            let pos = self.layout.local(x, y);
            cell.clear();
            escape_char(c, &mut cell);
            writeln!(f, "({}) {} {} c", cell, fmt_num(pos.x), fmt_num(pos.y))?;
        }

        write!(f, "\nshowpage\n%%EOF\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Margin;
    use crate::render::PaperSize;

    #[test]
    fn test_blank_cells_emit_nothing() {
        let grid = AsciiGrid::from_rows(&["a ", " b"]);
        let ps = render(&grid, &RenderOptions::default()).unwrap();
        let draws: Vec<&str> = ps.lines().filter(|l| l.ends_with(" c")).collect();
        assert_eq!(draws, vec!["(a) 0 12 c", "(b) 12 0 c"]);
    }

    #[test]
    fn test_single_transform() {
        let grid = AsciiGrid::from_rows(&["ab"]);
        let ps = render(&grid, &RenderOptions::default()).unwrap();
        assert_eq!(ps.matches(" translate").count(), 1);
        assert_eq!(ps.matches(" scale\n").count(), 1);
        assert!(ps.starts_with("%!PS-Adobe-3.0\n"));
        assert!(ps.contains("\nshowpage\n"));
    }

    #[test]
    fn test_parentheses_escaped() {
        let grid = AsciiGrid::from_rows(&["("]);
        let ps = render(&grid, &RenderOptions::default()).unwrap();
        assert!(ps.contains("(\\() 0 0 c"));
    }

    #[test]
    fn test_font_selection() {
        let options = RenderOptions {
            font_name: "Hack-Bold".to_string(),
            ..RenderOptions::default()
        };
        let ps = render(&AsciiGrid::from_rows(&["x"]), &options).unwrap();
        assert!(ps.contains("/Hack-Bold findfont\n12 scalefont\nsetfont\n"));
    }

    #[test]
    fn test_draws_follow_transform_and_precede_showpage() {
        let grid = AsciiGrid::from_rows(&["ab"]);
        let ps = render(&grid, &RenderOptions::default()).unwrap();
        let tail = ps.split(" scale\n").nth(1).unwrap();
        assert_eq!(tail, "(a) 0 0 c\n(b) 12 0 c\n\nshowpage\n%%EOF\n");
    }

    #[test]
    fn test_oversized_margin_is_error() {
        let options = RenderOptions {
            paper: PaperSize::A6,
            margin: Margin::uniform(60.0),
            ..RenderOptions::default()
        };
        let result = render(&AsciiGrid::from_rows(&["x"]), &options);
        assert!(matches!(result, Err(AsciifyError::Layout(_))));
    }
}
