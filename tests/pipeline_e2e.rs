//! End-to-end tests: image file on disk to finished document.

use asciify::ascii::{LuminanceRamp, SampleOptions};
use asciify::cli::Args;
use asciify::config::Config;
use asciify::pipeline::{self, PipelineOptions};
use asciify::render::OutputType;
use asciify::AsciifyError;
use clap::Parser;
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write a test image into `dir` and return its path.
fn write_image(dir: &TempDir, name: &str, img: &RgbImage) -> PathBuf {
    let path = dir.path().join(name);
    img.save(&path).unwrap();
    path
}

/// Dark disc on a white background.
fn disc(size: u32) -> RgbImage {
    let c = size as f32 / 2.0;
    RgbImage::from_fn(size, size, |x, y| {
        let d = ((x as f32 - c).powi(2) + (y as f32 - c).powi(2)).sqrt();
        if d < c * 0.4 {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    })
}

fn options(output: OutputType, aspect: Option<f32>, resolution: u32) -> PipelineOptions {
    PipelineOptions {
        output,
        sample: SampleOptions { aspect, resolution },
        ..PipelineOptions::default()
    }
}

#[test]
fn test_text_output_shape() {
    let dir = TempDir::new().unwrap();
    let path = write_image(&dir, "disc.png", &disc(64));

    let bytes = pipeline::run(&path, &options(OutputType::Text, Some(2.0), 32)).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.split('\n').collect();

    // 128x64 after stretch, 32 columns -> 16 rows
    assert_eq!(lines.len(), 16);
    assert!(lines.iter().all(|l| l.chars().count() <= 32));
    assert!(lines.iter().all(|l| !l.ends_with(' ')));

    // Centre row crosses the disc, first row is background
    let darkest = LuminanceRamp::default().darkest();
    assert!(lines[8].contains(darkest));
    assert!(lines[0].trim().is_empty());
    assert!(lines[8].starts_with(' '));
}

#[test]
fn test_white_image_text() {
    let dir = TempDir::new().unwrap();
    let path = write_image(&dir, "white.png", &RgbImage::from_pixel(2, 2, Rgb([255; 3])));

    let bytes = pipeline::run(&path, &options(OutputType::Text, None, 2)).unwrap();
    assert_eq!(bytes, b"\n");
}

#[test]
fn test_postscript_output() {
    let dir = TempDir::new().unwrap();
    let path = write_image(&dir, "disc.png", &disc(40));

    let bytes = pipeline::run(&path, &options(OutputType::PostScript, None, 20)).unwrap();
    let ps = String::from_utf8(bytes).unwrap();
    assert!(ps.starts_with("%!PS-Adobe-3.0\n"));
    assert!(ps.contains("%%DocumentMedia: a3 "));
    assert!(ps.contains("/Courier findfont"));
    assert!(ps.lines().any(|l| l.ends_with(" c") && l.starts_with('(')));
    assert!(ps.trim_end().ends_with("%%EOF"));
}

#[test]
fn test_pdf_output() {
    let dir = TempDir::new().unwrap();
    let path = write_image(&dir, "disc.png", &disc(40));

    let bytes = pipeline::run(&path, &options(OutputType::Pdf, None, 20)).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.7\n"));
    assert!(bytes.ends_with(b"%%EOF\n"));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("/Filter /FlateDecode"));
    assert!(text.contains("/BaseFont /Courier"));
}

#[test]
fn test_missing_font_still_renders() {
    let dir = TempDir::new().unwrap();
    let path = write_image(&dir, "disc.png", &disc(16));

    let plain = pipeline::run(&path, &options(OutputType::Text, None, 16)).unwrap();
    let with_font = options(OutputType::Text, None, 16).with_font(dir.path().join("nope.ttf"));
    let fallback = pipeline::run(&path, &with_font).unwrap();
    assert_eq!(plain, fallback);
}

#[test]
fn test_undecodable_image_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"\x89PNG but not really").unwrap();

    let err = pipeline::run(&path, &PipelineOptions::default()).unwrap_err();
    assert!(matches!(err, AsciifyError::ImageLoad(_)));
}

#[test]
fn test_margin_wider_than_paper_fails_for_page_outputs() {
    let dir = TempDir::new().unwrap();
    let path = write_image(&dir, "disc.png", &disc(16));
    let image = path.to_str().unwrap();

    for kind in ["pdf", "postscript"] {
        let args =
            Args::try_parse_from(["asciify", image, "--type", kind, "--paper", "a6", "--margin=60"])
                .unwrap();
        let err = pipeline::run(&args.image, &args.resolve(&Config::default())).unwrap_err();
        assert!(matches!(err, AsciifyError::Layout(_)), "{}: {}", kind, err);
        assert!(err.to_string().contains("a6"));
    }

    // Plain text has no page, so the margin does not apply.
    let args = Args::try_parse_from(["asciify", image, "--paper", "a6", "--margin=60"]).unwrap();
    assert!(pipeline::run(&args.image, &args.resolve(&Config::default())).is_ok());
}

#[test]
fn test_write_output_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.pdf");
    pipeline::write_output(b"%PDF-1.7\n", Some(&out)).unwrap();
    assert_eq!(std::fs::read(&out).unwrap(), b"%PDF-1.7\n");
}

#[test]
fn test_write_output_bad_directory() {
    let err = pipeline::write_output(b"x", Some(Path::new("/nonexistent/dir/out.txt")))
        .unwrap_err();
    assert!(matches!(err, AsciifyError::Write { .. }));
}
