//! Gray metric aggregation across a directory of normalized images.

use std::path::Path;

use crate::error::{PipelineError, Result};
use crate::types::{GrayEntry, GrayReport};

use super::gray::average_gray;

/// Aggregates the gray metric over every normalized image in a directory.
pub struct GrayAggregator;

impl GrayAggregator {
    /// Compute per-file gray values for all PNG files directly inside
    /// `directory` (non-recursive, matching how normalized outputs are
    /// laid out) and the mean across them.
    ///
    /// Files that fail to decode and files with no non-transparent pixels
    /// are skipped; they contribute neither an entry nor weight to the
    /// overall mean. With no contributing file the overall mean is an
    /// explicit 0.
    ///
    /// Entries keep directory listing order.
    pub fn aggregate(directory: &Path) -> Result<GrayReport> {
        if !directory.is_dir() {
            return Err(PipelineError::FileNotFound(directory.to_path_buf()).into());
        }

        let mut entries = Vec::new();
        let mut total: f64 = 0.0;

        for dir_entry in std::fs::read_dir(directory)? {
            let dir_entry = dir_entry?;
            let path = dir_entry.path();
            if !path.is_file() || !has_png_extension(&path) {
                continue;
            }

            tracing::debug!("Measuring: {:?}", path);
            let image = match image::open(&path) {
                Ok(img) => img,
                Err(e) => {
                    tracing::warn!("Skipping {:?}: {}", path, e);
                    continue;
                }
            };

            let Some(value) = average_gray(&image) else {
                tracing::warn!("Skipping {:?}: no non-transparent pixels", path);
                continue;
            };

            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unknown")
                .to_string();
            entries.push(GrayEntry { name, value });
            total += value;
        }

        let overall = if entries.is_empty() {
            0.0
        } else {
            total / entries.len() as f64
        };

        Ok(GrayReport {
            directory: directory.display().to_string(),
            overall,
            entries,
        })
    }
}

fn has_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

    fn write_uniform_png(path: &Path, rgba: [u8; 4]) {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba(rgba)));
        img.save_with_format(path, ImageFormat::Png).unwrap();
    }

    #[test]
    fn test_aggregate_means_across_files() {
        let dir = tempfile::tempdir().unwrap();
        // Uniform opaque images: gray value equals the channel value
        write_uniform_png(&dir.path().join("a.png"), [10, 10, 10, 255]);
        write_uniform_png(&dir.path().join("b.png"), [20, 20, 20, 255]);
        write_uniform_png(&dir.path().join("c.png"), [30, 30, 30, 255]);

        let report = GrayAggregator::aggregate(dir.path()).unwrap();
        assert_eq!(report.entries.len(), 3);
        assert!((report.overall - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_directory_yields_explicit_zero() {
        let dir = tempfile::tempdir().unwrap();
        let report = GrayAggregator::aggregate(dir.path()).unwrap();
        assert!(report.entries.is_empty());
        assert_eq!(report.overall, 0.0);
    }

    #[test]
    fn test_fully_transparent_file_is_excluded() {
        let dir = tempfile::tempdir().unwrap();
        write_uniform_png(&dir.path().join("ghost.png"), [255, 255, 255, 0]);
        write_uniform_png(&dir.path().join("solid.png"), [100, 100, 100, 255]);

        let report = GrayAggregator::aggregate(dir.path()).unwrap();
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].name, "solid.png");
        assert!((report.overall - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_png_and_corrupt_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_uniform_png(&dir.path().join("keep.png"), [50, 50, 50, 255]);
        write_uniform_png(&dir.path().join("other.webp"), [50, 50, 50, 255]);
        std::fs::write(dir.path().join("broken.png"), b"nope").unwrap();

        let report = GrayAggregator::aggregate(dir.path()).unwrap();
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].name, "keep.png");
    }

    #[test]
    fn test_subdirectories_are_not_entered() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        write_uniform_png(&dir.path().join("nested/deep.png"), [10, 10, 10, 255]);

        let report = GrayAggregator::aggregate(dir.path()).unwrap();
        assert!(report.entries.is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(GrayAggregator::aggregate(&dir.path().join("absent")).is_err());
    }
}
