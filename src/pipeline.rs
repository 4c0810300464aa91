//! End-to-end conversion: image file in, document bytes out.
//!
//! Each stage is a pure function of the previous stage's output:
//! `RawImage -> SampledImage -> AsciiGrid -> Vec<u8>`. Nothing is kept
//! between runs.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::ascii::{self, AsciiGrid, LuminanceRamp, SampleOptions};
use crate::error::AsciifyError;
use crate::render::{self, font_name_from_path, OutputType, RenderOptions};

/// Everything needed for one conversion.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub output: OutputType,
    pub sample: SampleOptions,
    pub render: RenderOptions,
    /// Font file used to regenerate the ramp.
    pub font: Option<PathBuf>,
}

impl PipelineOptions {
    /// Use `path` both for ramp generation and as the document font name.
    pub fn with_font(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.render.font_name = font_name_from_path(&path);
        self.font = Some(path);
        self
    }

    /// The ramp for this run: generated from the font if one is set and
    /// usable, the built-in ramp otherwise.
    pub fn ramp(&self) -> LuminanceRamp {
        let ramp = LuminanceRamp::default();
        match &self.font {
            Some(path) => ramp.or_generated(path),
            None => ramp,
        }
    }
}

/// Convert an already-sampled image.
pub fn convert(
    sampled: &ascii::SampledImage,
    ramp: &LuminanceRamp,
    options: &PipelineOptions,
) -> Result<Vec<u8>, AsciifyError> {
    let grid = AsciiGrid::build(sampled, ramp);
    render::render(&grid, ramp, options.output, &options.render)
}

/// Load, sample, map and render `image_path`.
///
/// The whole document is built in memory; nothing is written on failure.
pub fn run(image_path: &Path, options: &PipelineOptions) -> Result<Vec<u8>, AsciifyError> {
    let ramp = options.ramp();
    let raw = ascii::load(image_path)?;
    let sampled = ascii::sample(&raw, &options.sample);
    convert(&sampled, &ramp, options)
}

/// Write a finished document to `path`, or to standard output.
pub fn write_output(bytes: &[u8], path: Option<&Path>) -> Result<(), AsciifyError> {
    match path {
        Some(path) => std::fs::write(path, bytes).map_err(|source| AsciifyError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(bytes)
                .and_then(|_| stdout.flush())
                .map_err(|source| AsciifyError::Write {
                    path: PathBuf::from("<stdout>"),
                    source,
                })
        }
    }
}
