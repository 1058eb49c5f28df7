//! Core data types for the Matte normalization and metrics pipeline.

use serde::{Deserialize, Serialize};

/// Processing statistics for a batch run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProcessingStats {
    /// Total images processed successfully
    pub succeeded: usize,

    /// Total images that failed
    pub failed: usize,

    /// Processing rate in images per second
    pub images_per_second: f64,

    /// Total processing time in seconds
    pub total_seconds: f64,
}

impl ProcessingStats {
    /// Total number of files the batch attempted.
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Gray value for one normalized image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrayEntry {
    /// Output filename, canonical `.png` extension included
    pub name: String,

    /// Average gray value over non-transparent pixels, in [0, 255]
    pub value: f64,
}

/// Aggregated gray metrics for a directory of normalized images.
///
/// Entries appear in directory listing order. Files with no
/// non-transparent pixels are absent from `entries` and carry no weight in
/// `overall`; an empty `entries` means `overall` is an explicit 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrayReport {
    /// The directory that was measured
    pub directory: String,

    /// Arithmetic mean of all per-file values, 0 when none contributed
    pub overall: f64,

    /// Per-file gray values in processing order
    pub entries: Vec<GrayEntry>,
}
