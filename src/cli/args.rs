//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

use super::enums::{OutputKind, Paper};
use crate::ascii::{check_aspect, SampleOptions, DEFAULT_CHAR_ASPECT_RATIO, DEFAULT_RESOLUTION};
use crate::config::Config;
use crate::geometry::Margin;
use crate::pipeline::PipelineOptions;
use crate::render::{OutputType, RenderOptions};

/// Parse and validate the horizontal stretch (0 < aspect <= 10)
fn parse_aspect(s: &str) -> Result<f32, String> {
    let aspect: f32 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    check_aspect(aspect)
}

/// Parse and validate a page margin in millimetres (finite, >= 0)
fn parse_margin(s: &str) -> Result<f64, String> {
    let mm: f64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    Margin::uniform(mm).check().map(|_| mm)
}

/// Convert images to ASCII art as text, PostScript or PDF
#[derive(Parser, Debug)]
#[command(name = "asciify")]
#[command(version, about = "Convert images to ASCII art", long_about = None)]
pub struct Args {
    /// Image file to convert
    pub image: PathBuf,

    /// Output file (default: stdout); a .ps or .pdf extension selects the format
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Output format (overrides the --out extension)
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<OutputKind>,

    /// Horizontal stretch to compensate for tall character cells
    #[arg(long, value_parser = parse_aspect)]
    pub aspect: Option<f32>,

    /// Font file used to build the character ramp and named in page outputs
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Paper size
    #[arg(long)]
    pub paper: Option<Paper>,

    /// Number of characters per line
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub resolution: Option<u32>,

    /// Page margin on every side, in millimetres
    #[arg(long, value_name = "MM", value_parser = parse_margin)]
    pub margin: Option<f64>,

    /// Write the PDF content stream uncompressed
    #[arg(long)]
    pub no_compress: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Output format: explicit `--type`, then the `--out` extension, then text.
    pub fn output_type(&self) -> OutputType {
        self.kind
            .map(OutputType::from)
            .or_else(|| self.out.as_deref().and_then(OutputType::from_path))
            .unwrap_or_default()
    }

    /// Merge settings: CLI args > config file > built-in defaults.
    pub fn resolve(&self, cfg: &Config) -> PipelineOptions {
        let output = self.output_type();

        // Text cells are tall, so text is stretched by default. Page cells
        // are square and only stretched on request.
        let aspect = self.aspect.or(cfg.sampling.aspect);
        let aspect = if output.is_paged() {
            aspect
        } else {
            Some(aspect.unwrap_or(DEFAULT_CHAR_ASPECT_RATIO))
        };

        let sample = SampleOptions {
            aspect,
            resolution: self
                .resolution
                .or(cfg.sampling.resolution)
                .unwrap_or(DEFAULT_RESOLUTION),
        };

        let defaults = RenderOptions::default();
        let render = RenderOptions {
            paper: self
                .paper
                .map(Into::into)
                .or(cfg.render.paper)
                .unwrap_or(defaults.paper),
            margin: self
                .margin
                .map(Margin::uniform)
                .or(cfg.render.margin)
                .unwrap_or(defaults.margin),
            compress: !self.no_compress && cfg.render.compress.unwrap_or(defaults.compress),
            ..defaults
        };

        let options = PipelineOptions {
            output,
            sample,
            render,
            font: None,
        };
        match self.font.as_ref().or(cfg.render.font.as_ref()) {
            Some(font) => options.with_font(font),
            None => options,
        }
    }
}
