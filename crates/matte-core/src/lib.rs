//! Matte Core - Embeddable image normalization and metrics library.
//!
//! Matte strips backgrounds from trees of product images, normalizes each
//! result onto a fixed-size transparent canvas, and derives an average gray
//! value per image from the non-transparent pixels for cross-run comparison.
//!
//! # Architecture
//!
//! Matte is a pure batch pipeline with no persistent state between runs:
//!
//! ```text
//! Discover → Validate → Decode → Remove Background → Canvas → PNG
//!                                                    Measure → Report
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use matte_core::{Config, Normalizer, PassthroughRemover};
//!
//! #[tokio::main]
//! async fn main() -> matte_core::Result<()> {
//!     let config = Config::load()?;
//!     let normalizer = Normalizer::new(&config, Box::new(PassthroughRemover));
//!
//!     let stats = normalizer
//!         .process("./input/run1".as_ref(), "./output".as_ref(), false)
//!         .await?;
//!     println!("Processed {} images", stats.succeeded);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, MatteError, PipelineError, PipelineResult, Result};
pub use metrics::{average_gray, GrayAggregator};
pub use pipeline::{
    BackgroundRemover, CanvasNormalizer, ImageEntry, ImageWalker, Normalizer, PassthroughRemover,
};
pub use report::{ReportFormat, ReportWriter};
pub use types::{GrayEntry, GrayReport, ProcessingStats};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_config_canvas_size() {
        let config = Config::default();
        assert_eq!(config.canvas.size, 768);
    }
}
