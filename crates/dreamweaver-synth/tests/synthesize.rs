//! End-to-end synthesis tests: text in, decodable PNG data URL out.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use dreamweaver_synth::{
    CANVAS_HEIGHT, CANVAS_WIDTH, DATA_URL_PREFIX, compose, render, synthesize, synthesize_random,
};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Decode a data URL back into an RGB raster.
fn decode(url: &str) -> image::RgbImage {
    let payload = url.strip_prefix(DATA_URL_PREFIX).expect("data url prefix");
    assert!(!payload.is_empty());
    let bytes = STANDARD.decode(payload).expect("base64 payload");
    image::load_from_memory(&bytes).expect("png").to_rgb8()
}

#[test]
fn empty_text_yields_flat_canvas_image() {
    let seed = (0..64)
        .find(|seed| {
            compose("", &mut StdRng::seed_from_u64(*seed))
                .blur_radius
                .is_none()
        })
        .expect("an unblurred seed");
    let composition = compose("", &mut StdRng::seed_from_u64(seed));
    let url = synthesize("", &mut StdRng::seed_from_u64(seed)).expect("synthesize");

    let decoded = decode(&url);
    assert_eq!(decoded.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    assert!(composition.elements.is_empty());
    let background = composition.background.rgb();
    assert!(decoded.pixels().all(|pixel| *pixel == background));
}

#[test]
fn seeded_synthesis_is_reproducible() {
    let text = "a staircase that kept going down into the sea";
    let first = synthesize(text, &mut StdRng::seed_from_u64(99)).expect("first");
    let second = synthesize(text, &mut StdRng::seed_from_u64(99)).expect("second");
    assert_eq!(first, second);
}

#[test]
fn decoded_image_matches_rendered_plan() {
    let text = "hello world";
    let composition = compose(text, &mut StdRng::seed_from_u64(5));
    let url = synthesize(text, &mut StdRng::seed_from_u64(5)).expect("synthesize");
    assert_eq!(composition.elements.len(), 2);
    assert_eq!(decode(&url), render(&composition));
}

#[test]
fn random_synthesis_always_yields_valid_images() {
    for text in ["", "short", "a dream about trains and owls", &"z".repeat(500)] {
        let url = synthesize_random(text).expect("synthesize");
        let decoded = decode(&url);
        assert_eq!(decoded.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    }
}
