//! Abstract image synthesis for dream descriptions.
//!
//! The number of shapes is derived from the text length; everything else
//! (colors, geometry, blur) comes from the caller's random generator. Pass a
//! seeded generator for reproducible output or use [`synthesize_random`] for
//! the thread-local one.

pub mod compose;
pub mod error;
pub mod palette;
pub mod render;

/// Drawing plan types and sampling.
pub use compose::{
    CANVAS_HEIGHT, CANVAS_WIDTH, Composition, Element, Geometry, MAX_ELEMENTS, ShapeKind, compose,
    element_count,
};
/// Synthesis error type.
pub use error::SynthError;
/// Palette colors.
pub use palette::{Color, PALETTE};
/// Rasterization and encoding.
pub use render::{DATA_URL_PREFIX, encode_data_url, render};

use rand::Rng;

/// Synthesize a PNG data URL for `text` using the provided generator.
pub fn synthesize<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Result<String, SynthError> {
    let composition = compose(text, rng);
    let canvas = render(&composition);
    encode_data_url(&canvas)
}

/// Synthesize a PNG data URL for `text` using the thread-local generator.
pub fn synthesize_random(text: &str) -> Result<String, SynthError> {
    synthesize(text, &mut rand::rng())
}
