//! Background removal seam.
//!
//! The matting model itself lives behind the [`BackgroundRemover`] trait;
//! the pipeline only relies on getting back an image with a usable alpha
//! channel. Library consumers plug in a real backend, the built-in
//! [`PassthroughRemover`] just converts to RGBA.

use image::DynamicImage;

/// Opaque error returned by a removal backend.
pub type RemovalError = Box<dyn std::error::Error + Send + Sync>;

/// A background-removal backend.
///
/// Implementations take a decoded image and return one whose alpha channel
/// marks the removed background as transparent. A failure here is isolated
/// to the file being processed, never fatal to a batch.
pub trait BackgroundRemover: Send + Sync {
    /// Remove the background, returning an image with a valid alpha channel.
    fn remove(&self, image: &DynamicImage) -> Result<DynamicImage, RemovalError>;

    /// Human-readable backend name, used in logs.
    fn name(&self) -> &str;
}

/// Removal backend that performs no matting.
///
/// Converts the input to RGBA, giving full opacity to images without an
/// alpha channel and leaving existing transparency untouched.
#[derive(Debug, Default)]
pub struct PassthroughRemover;

impl BackgroundRemover for PassthroughRemover {
    fn remove(&self, image: &DynamicImage) -> Result<DynamicImage, RemovalError> {
        Ok(DynamicImage::ImageRgba8(image.to_rgba8()))
    }

    fn name(&self) -> &str {
        "passthrough"
    }
}
