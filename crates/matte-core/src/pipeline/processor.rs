//! Pipeline orchestration - wires together all processing stages.

use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::config::Config;
use crate::error::{PipelineError, PipelineResult, Result};
use crate::types::ProcessingStats;

use super::canvas::CanvasNormalizer;
use super::decode::{format_to_string, ImageDecoder};
use super::discovery::{ImageEntry, ImageWalker};
use super::remover::BackgroundRemover;
use super::validate::Validator;

/// The batch normalizer that orchestrates the full pipeline.
///
/// Each file runs validate → decode → background removal → canvas
/// normalization → PNG write. Per-file failures are recorded and the batch
/// moves on; only a missing input root aborts a run.
pub struct Normalizer {
    walker: ImageWalker,
    validator: Validator,
    decoder: ImageDecoder,
    remover: Box<dyn BackgroundRemover>,
    canvas: CanvasNormalizer,
}

impl Normalizer {
    /// Create a new normalizer with the given configuration and removal backend.
    pub fn new(config: &Config, remover: Box<dyn BackgroundRemover>) -> Self {
        Self {
            walker: ImageWalker::new(config.processing.clone()),
            validator: Validator::new(config.limits.clone()),
            decoder: ImageDecoder::new(config.limits.clone()),
            remover,
            canvas: CanvasNormalizer::new(config.canvas.clone()),
        }
    }

    /// Discover all candidate image files under the input root.
    pub fn discover(&self, input_root: &Path, recursive: bool) -> Result<Vec<ImageEntry>> {
        self.walker.walk(input_root, recursive)
    }

    /// Compute the destination root for a run: the output root extended with
    /// the input root's directory name, mirroring the source layout.
    pub fn destination_root(input_root: &Path, output_root: &Path) -> PathBuf {
        match input_root.file_name() {
            Some(name) => output_root.join(name),
            None => output_root.to_path_buf(),
        }
    }

    /// Process a single discovered entry, writing the normalized PNG under
    /// `dest_root` and returning the path written.
    pub async fn process_entry(
        &self,
        entry: &ImageEntry,
        dest_root: &Path,
    ) -> PipelineResult<PathBuf> {
        let start = std::time::Instant::now();
        tracing::debug!("Processing: {:?}", entry.path);

        // Validate
        self.validator.validate(&entry.path)?;
        tracing::trace!("  Validate: {:?}", start.elapsed());

        // Decode
        let decode_start = std::time::Instant::now();
        let decoded = self.decoder.decode(&entry.path).await?;
        tracing::trace!(
            "  Decode ({}): {:?}",
            format_to_string(decoded.format),
            decode_start.elapsed()
        );

        // Background removal
        let removal_start = std::time::Instant::now();
        let removed =
            self.remover
                .remove(&decoded.image)
                .map_err(|e| PipelineError::Removal {
                    path: entry.path.clone(),
                    message: e.to_string(),
                })?;
        tracing::trace!(
            "  Removal ({}): {:?}",
            self.remover.name(),
            removal_start.elapsed()
        );

        // Canvas normalization
        let canvas_start = std::time::Instant::now();
        let normalized = self.canvas.normalize(&removed);
        tracing::trace!("  Canvas: {:?}", canvas_start.elapsed());

        // Write as PNG, extension rewritten regardless of the source format
        let dest = dest_root.join(&entry.relative).with_extension("png");
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PipelineError::Encode {
                path: dest.clone(),
                message: format!("Cannot create output directory: {}", e),
            })?;
        }
        normalized
            .save_with_format(&dest, ImageFormat::Png)
            .map_err(|e| PipelineError::Encode {
                path: dest.clone(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            "Processed {:?} in {:?} ({}x{} -> {})",
            entry.relative,
            start.elapsed(),
            decoded.width,
            decoded.height,
            self.canvas.size()
        );

        Ok(dest)
    }

    /// Process every supported image under `input_root`, writing normalized
    /// outputs under `output_root/<input dirname>/`.
    pub async fn process(
        &self,
        input_root: &Path,
        output_root: &Path,
        recursive: bool,
    ) -> Result<ProcessingStats> {
        let entries = self.discover(input_root, recursive)?;
        let dest_root = Self::destination_root(input_root, output_root);

        let start_time = std::time::Instant::now();
        let mut stats = ProcessingStats::default();

        for entry in &entries {
            match self.process_entry(entry, &dest_root).await {
                Ok(_) => stats.succeeded += 1,
                Err(e) => {
                    stats.failed += 1;
                    tracing::error!("Failed: {:?} - {}", entry.path, e);
                }
            }
        }

        stats.total_seconds = start_time.elapsed().as_secs_f64();
        if stats.total_seconds > 0.0 {
            stats.images_per_second = stats.succeeded as f64 / stats.total_seconds;
        }

        tracing::info!(
            "Batch finished: {} succeeded, {} failed",
            stats.succeeded,
            stats.failed
        );
        Ok(stats)
    }
}
