//! Image loading and resampling down to one pixel per character cell.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, RgbImage};

use crate::error::ImageLoadError;

/// Default horizontal stretch for terminal cells.
/// Terminal characters are typically ~2x taller than wide.
pub const DEFAULT_CHAR_ASPECT_RATIO: f32 = 2.0;

/// Largest accepted horizontal stretch.
pub const MAX_ASPECT: f32 = 10.0;

/// Default number of character columns.
pub const DEFAULT_RESOLUTION: u32 = 80;

/// Check that `aspect` is a usable stretch factor: finite, above zero and
/// at most [`MAX_ASPECT`].
pub fn check_aspect(aspect: f32) -> Result<f32, String> {
    if aspect.is_finite() && aspect > 0.0 && aspect <= MAX_ASPECT {
        Ok(aspect)
    } else {
        Err(format!(
            "Aspect must be greater than 0 and at most {}, got {}",
            MAX_ASPECT, aspect
        ))
    }
}

/// A decoded source image, before any resampling.
pub type RawImage = DynamicImage;

/// An image reduced to exactly one RGB pixel per grid cell.
#[derive(Debug, Clone)]
pub struct SampledImage {
    pixels: RgbImage,
}

impl SampledImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// RGB components of the pixel at (x, y).
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels.get_pixel(x, y).0
    }
}

/// Options for the sampling stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleOptions {
    /// Horizontal stretch applied before downsampling, if any.
    pub aspect: Option<f32>,
    /// Maximum number of columns in the sampled image.
    pub resolution: u32,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            aspect: Some(DEFAULT_CHAR_ASPECT_RATIO),
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

/// Open and decode an image file.
pub fn load(path: &Path) -> Result<RawImage, ImageLoadError> {
    let image = image::open(path).map_err(|source| ImageLoadError {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "Loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Rescale the width by `aspect` with bilinear filtering; height is unchanged.
pub fn stretch(image: &RawImage, aspect: f32) -> RawImage {
    let (w, h) = image.dimensions();
    let new_w = ((w as f32 * aspect) as u32).max(1);
    if new_w == w {
        return image.clone();
    }
    image.resize_exact(new_w, h, FilterType::Triangle)
}

/// Shrink to at most `target_columns` wide, keeping the aspect ratio.
///
/// Images already narrower than the target are returned at their original
/// size; this never upscales.
pub fn downsample(image: &RawImage, target_columns: u32) -> RawImage {
    let (w, h) = image.dimensions();
    let target = target_columns.max(1);
    if w <= target {
        return image.clone();
    }
    let new_h = ((h as f64 * target as f64 / w as f64).round() as u32).max(1);
    image.resize_exact(target, new_h, FilterType::Lanczos3)
}

/// Run the optional stretch and the downsample, producing one pixel per cell.
pub fn sample(image: &RawImage, options: &SampleOptions) -> SampledImage {
    let stretched;
    let source = match options.aspect {
        Some(aspect) => {
            stretched = stretch(image, aspect);
            &stretched
        }
        None => image,
    };
    let pixels = downsample(source, options.resolution).to_rgb8();
    log::info!("Sampled to {}x{} cells", pixels.width(), pixels.height());
    SampledImage { pixels }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid(w: u32, h: u32, value: u8) -> RawImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(w, h, Rgb([value; 3])))
    }

    #[test]
    fn test_stretch_doubles_width_only() {
        let out = stretch(&solid(10, 7, 0), 2.0);
        assert_eq!(out.dimensions(), (20, 7));
    }

    #[test]
    fn test_stretch_never_collapses_to_zero() {
        let out = stretch(&solid(1, 3, 0), 0.1);
        assert_eq!(out.dimensions(), (1, 3));
    }

    #[test]
    fn test_check_aspect_bounds() {
        assert_eq!(check_aspect(2.0), Ok(2.0));
        assert_eq!(check_aspect(MAX_ASPECT), Ok(MAX_ASPECT));
        assert!(check_aspect(0.0).is_err());
        assert!(check_aspect(-3.0).is_err());
        assert!(check_aspect(f32::INFINITY).is_err());
        assert!(check_aspect(f32::NAN).is_err());
        assert!(check_aspect(MAX_ASPECT + 0.5).is_err());
    }

    #[test]
    fn test_downsample_keeps_aspect() {
        let out = downsample(&solid(160, 100, 0), 80);
        assert_eq!(out.dimensions(), (80, 50));
    }

    #[test]
    fn test_downsample_does_not_upscale() {
        let out = downsample(&solid(20, 10, 0), 80);
        assert_eq!(out.dimensions(), (20, 10));
    }

    #[test]
    fn test_sample_without_stretch() {
        let options = SampleOptions {
            aspect: None,
            resolution: 2,
        };
        let sampled = sample(&solid(4, 4, 255), &options);
        assert_eq!((sampled.width(), sampled.height()), (2, 2));
        assert_eq!(sampled.rgb(1, 1), [255, 255, 255]);
    }
}
