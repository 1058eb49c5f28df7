//! Image normalization pipeline components.
//!
//! This module contains all the stages of the normalization pipeline:
//! - **discovery**: Find image files under an input root
//! - **validate**: Pre-processing validation
//! - **decode**: Load and decode images from various formats
//! - **remover**: Background removal seam
//! - **canvas**: Scale-to-fit centering on a transparent canvas
//! - **processor**: Orchestrates the full pipeline

pub mod canvas;
pub mod decode;
pub mod discovery;
pub mod processor;
pub mod remover;
pub mod validate;

// Re-exports for convenient access
pub use canvas::CanvasNormalizer;
pub use decode::{DecodedImage, ImageDecoder};
pub use discovery::{ImageEntry, ImageWalker};
pub use processor::Normalizer;
pub use remover::{BackgroundRemover, PassthroughRemover, RemovalError};
pub use validate::Validator;
