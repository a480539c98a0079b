//! Error types for image synthesis.

/// Errors returned while synthesizing a dream image.
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    /// Encoding the raster to PNG failed.
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
