//! Renderers turning an [`AsciiGrid`] into an output document.
//!
//! - [`text`] - plain text, one line per grid row
//! - [`postscript`] - a single-page PostScript program
//! - [`pdf`] - a minimal hand-built PDF with a byte-exact xref table
//!
//! The two page formats share their layout math through [`PageLayout`].

pub mod layout;
pub mod pdf;
pub mod postscript;
pub mod text;

use std::path::Path;

use chrono::{Local, NaiveDateTime};

use crate::ascii::{AsciiGrid, LuminanceRamp};
use crate::error::AsciifyError;
use crate::geometry::Margin;

pub use layout::{PageLayout, PaperSize};

/// Font referenced by page outputs when no font file is given.
pub const DEFAULT_FONT_NAME: &str = "Courier";

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputType {
    #[default]
    Text,
    PostScript,
    Pdf,
}

impl OutputType {
    /// Infer the format from an output file extension (`.ps` or `.pdf`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "ps" => Some(OutputType::PostScript),
            "pdf" => Some(OutputType::Pdf),
            _ => None,
        }
    }

    /// Whether this format lays glyphs out on a physical page.
    pub fn is_paged(self) -> bool {
        !matches!(self, OutputType::Text)
    }
}

/// Options for the page renderers. Plain text ignores all of them.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub paper: PaperSize,
    pub margin: Margin,
    /// Font name written into the document; never embedded.
    pub font_name: String,
    /// Deflate the PDF content stream.
    pub compress: bool,
    /// Timestamp recorded as the creation date.
    pub created: NaiveDateTime,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            paper: PaperSize::default(),
            margin: Margin::default(),
            font_name: DEFAULT_FONT_NAME.to_string(),
            compress: true,
            created: Local::now().naive_local(),
        }
    }
}

/// Derive a document font name from a font file path.
///
/// Uses the file stem, keeping only characters that are safe in both a PDF
/// name object and a PostScript literal name.
pub fn font_name_from_path(path: &Path) -> String {
    let name: String = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.'))
        .collect();
    if name.is_empty() {
        DEFAULT_FONT_NAME.to_string()
    } else {
        name
    }
}

/// Render `grid` in the requested format.
pub fn render(
    grid: &AsciiGrid,
    ramp: &LuminanceRamp,
    output: OutputType,
    options: &RenderOptions,
) -> Result<Vec<u8>, AsciifyError> {
    let bytes = match output {
        OutputType::Text => text::render(grid).into_bytes(),
        OutputType::PostScript => postscript::render(grid, options)?.into_bytes(),
        OutputType::Pdf => pdf::render(grid, ramp, options)?,
    };
    log::info!("Rendered {:?} document, {} bytes", output, bytes.len());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_output_type_from_extension() {
        assert_eq!(
            OutputType::from_path(Path::new("out.ps")),
            Some(OutputType::PostScript)
        );
        assert_eq!(
            OutputType::from_path(Path::new("OUT.PDF")),
            Some(OutputType::Pdf)
        );
        assert_eq!(OutputType::from_path(Path::new("out.txt")), None);
        assert_eq!(OutputType::from_path(Path::new("out")), None);
    }

    #[test]
    fn test_font_name_from_path() {
        assert_eq!(
            font_name_from_path(&PathBuf::from("/fonts/Hack-Bold.ttf")),
            "Hack-Bold"
        );
        assert_eq!(
            font_name_from_path(&PathBuf::from("My Font (1).otf")),
            "MyFont1"
        );
        assert_eq!(font_name_from_path(&PathBuf::from("/")), DEFAULT_FONT_NAME);
    }
}
