//! Canvas normalization: scale to fit and center on a transparent square.

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

use crate::config::CanvasConfig;

/// Normalizes images onto a fixed-size transparent square canvas.
pub struct CanvasNormalizer {
    config: CanvasConfig,
}

impl CanvasNormalizer {
    /// Create a new normalizer with the given canvas settings.
    pub fn new(config: CanvasConfig) -> Self {
        Self { config }
    }

    /// Canvas side length in pixels.
    pub fn size(&self) -> u32 {
        self.config.size
    }

    /// Scale the image so its longer side equals the canvas size and
    /// composite it centered onto a fully transparent square canvas.
    ///
    /// The scaled image's own alpha channel drives the compositing, so
    /// existing transparency survives and uncovered canvas stays
    /// transparent. Inputs without an alpha channel become fully opaque.
    pub fn normalize(&self, image: &DynamicImage) -> RgbaImage {
        let size = self.config.size;
        let (width, height) = image.dimensions();
        let (new_width, new_height) = scaled_dimensions(width, height, size);

        // Same-size inputs skip the resample entirely, keeping repeated
        // normalization pixel-identical.
        let scaled = if (new_width, new_height) == (width, height) {
            image.to_rgba8()
        } else {
            image
                .resize_exact(new_width, new_height, FilterType::Lanczos3)
                .to_rgba8()
        };

        let mut canvas = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
        let paste_x = (size - new_width) / 2;
        let paste_y = (size - new_height) / 2;
        imageops::overlay(&mut canvas, &scaled, paste_x as i64, paste_y as i64);

        canvas
    }
}

/// Compute the scaled dimensions with the longer side pinned to `size`.
///
/// The shorter side is truncated toward zero, clamped to 1 px so extreme
/// aspect ratios stay encodable.
fn scaled_dimensions(width: u32, height: u32, size: u32) -> (u32, u32) {
    if width >= height {
        let new_height = (height as f64 * size as f64 / width as f64) as u32;
        (size, new_height.max(1))
    } else {
        let new_width = (width as f64 * size as f64 / height as f64) as u32;
        (new_width.max(1), size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn normalizer(size: u32) -> CanvasNormalizer {
        CanvasNormalizer::new(CanvasConfig { size })
    }

    #[test]
    fn test_scaled_dimensions_landscape() {
        assert_eq!(scaled_dimensions(1000, 500, 768), (768, 384));
    }

    #[test]
    fn test_scaled_dimensions_portrait() {
        assert_eq!(scaled_dimensions(500, 1000, 768), (384, 768));
    }

    #[test]
    fn test_scaled_dimensions_square() {
        assert_eq!(scaled_dimensions(100, 100, 768), (768, 768));
    }

    #[test]
    fn test_scaled_dimensions_truncates() {
        // 500 * 768 / 997 = 385.15... -> 385
        assert_eq!(scaled_dimensions(997, 500, 768), (768, 385));
    }

    #[test]
    fn test_scaled_dimensions_clamps_degenerate() {
        // 1 * 768 / 10000 would truncate to 0
        assert_eq!(scaled_dimensions(10000, 1, 768), (768, 1));
        assert_eq!(scaled_dimensions(1, 10000, 768), (1, 768));
    }

    #[test]
    fn test_output_is_always_canvas_sized() {
        let norm = normalizer(768);
        for (w, h) in [(1000, 500), (500, 1000), (64, 64), (768, 768), (3000, 11)] {
            let img = DynamicImage::ImageRgb8(RgbImage::new(w, h));
            let out = norm.normalize(&img);
            assert_eq!(out.dimensions(), (768, 768), "input {w}x{h}");
        }
    }

    #[test]
    fn test_content_centered_with_transparent_bands() {
        let norm = normalizer(768);
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(1000, 500, Rgb([200, 10, 10])));
        let out = norm.normalize(&img);

        // 1000x500 scales to 768x384, pasted at y = (768 - 384) / 2 = 192
        assert_eq!(out.get_pixel(0, 0)[3], 0);
        assert_eq!(out.get_pixel(383, 191)[3], 0);
        assert_eq!(out.get_pixel(383, 192)[3], 255);
        assert_eq!(out.get_pixel(383, 575)[3], 255);
        assert_eq!(out.get_pixel(383, 576)[3], 0);
    }

    #[test]
    fn test_opaque_input_gains_full_alpha() {
        let norm = normalizer(64);
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(32, 32, Rgb([1, 2, 3])));
        let out = norm.normalize(&img);
        assert!(out.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_source_transparency_is_respected() {
        let norm = normalizer(64);
        // Left half transparent, right half opaque; 64x64 so no resampling
        let mut img = RgbaImage::from_pixel(64, 64, Rgba([0, 0, 0, 0]));
        for y in 0..64 {
            for x in 32..64 {
                img.put_pixel(x, y, Rgba([100, 150, 200, 255]));
            }
        }
        let out = norm.normalize(&DynamicImage::ImageRgba8(img));

        assert_eq!(out.get_pixel(0, 0)[3], 0);
        assert_eq!(out.get_pixel(31, 31)[3], 0);
        assert_eq!(*out.get_pixel(32, 0), Rgba([100, 150, 200, 255]));
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let norm = normalizer(128);
        // Opaque full-canvas footprint with non-uniform content
        let mut img = RgbaImage::new(128, 128);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgba([(x % 256) as u8, (y % 256) as u8, 7, 255]);
        }
        let once = norm.normalize(&DynamicImage::ImageRgba8(img));
        let twice = norm.normalize(&DynamicImage::ImageRgba8(once.clone()));
        assert_eq!(once.as_raw(), twice.as_raw());
    }
}
