//! Sampling of the drawing plan for a dream image.
//!
//! A [`Composition`] captures every random decision (background, shapes,
//! blur) before any pixel is touched, so callers holding a seeded generator
//! can inspect exact geometry and reproduce an image.

use crate::palette::Color;
use log::debug;
use rand::Rng;

/// Canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 400;
/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 400;
/// Upper bound on shapes drawn for a single dream.
pub const MAX_ELEMENTS: usize = 20;
/// Characters of dream text per drawn shape.
pub const CHARS_PER_ELEMENT: usize = 5;

const CIRCLE_RADIUS: (i32, i32) = (5, 50);
const LINE_WIDTH: (u32, u32) = (1, 5);
const STAR_SIZE: (i32, i32) = (5, 30);
const BLUR_RADII: [u32; 3] = [1, 2, 3];

/// Number of shapes drawn for the given text.
///
/// Length is counted in characters, so multi-byte text is not penalized.
pub fn element_count(text: &str) -> usize {
    (text.chars().count() / CHARS_PER_ELEMENT).min(MAX_ELEMENTS)
}

/// Shape kinds the synthesizer can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Line,
    Star,
}

impl ShapeKind {
    /// All kinds, in sampling order.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::Line,
        ShapeKind::Star,
    ];
}

/// Geometry for a single shape, in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    /// Filled circle.
    Circle { center: (i32, i32), radius: i32 },
    /// Filled axis-aligned rectangle with inclusive corners.
    Rectangle {
        top_left: (i32, i32),
        bottom_right: (i32, i32),
    },
    /// Straight stroke of the given width.
    Line {
        start: (i32, i32),
        end: (i32, i32),
        width: u32,
    },
    /// Filled regular pentagon with circumradius `size`.
    Star { center: (i32, i32), size: i32 },
}

impl Geometry {
    /// Kind of shape this geometry describes.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Circle { .. } => ShapeKind::Circle,
            Geometry::Rectangle { .. } => ShapeKind::Rectangle,
            Geometry::Line { .. } => ShapeKind::Line,
            Geometry::Star { .. } => ShapeKind::Star,
        }
    }
}

/// One painted element: geometry plus its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub color: Color,
    pub geometry: Geometry,
}

/// Complete drawing plan for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    /// Canvas fill color.
    pub background: Color,
    /// Elements in painting order; later ones cover earlier ones.
    pub elements: Vec<Element>,
    /// Gaussian blur radius applied after painting, if any.
    pub blur_radius: Option<u32>,
}

impl Composition {
    /// Canvas dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

/// Sample a drawing plan for `text` from the provided generator.
pub fn compose<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Composition {
    let background = Color::sample(rng);
    let count = element_count(text);
    let elements = (0..count).map(|_| sample_element(rng)).collect();
    let blur_radius = if rng.random_bool(0.5) {
        Some(BLUR_RADII[rng.random_range(0..BLUR_RADII.len())])
    } else {
        None
    };
    debug!(
        "composed dream image (background={}, elements={}, blur={:?})",
        background.name(),
        count,
        blur_radius
    );
    Composition {
        background,
        elements,
        blur_radius,
    }
}

fn sample_element<R: Rng + ?Sized>(rng: &mut R) -> Element {
    let kind = ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())];
    let color = Color::sample(rng);
    let geometry = match kind {
        ShapeKind::Circle => Geometry::Circle {
            center: sample_point(rng),
            radius: rng.random_range(CIRCLE_RADIUS.0..=CIRCLE_RADIUS.1),
        },
        ShapeKind::Rectangle => {
            let (x1, y1) = sample_point(rng);
            let x2 = rng.random_range(x1..CANVAS_WIDTH as i32);
            let y2 = rng.random_range(y1..CANVAS_HEIGHT as i32);
            Geometry::Rectangle {
                top_left: (x1, y1),
                bottom_right: (x2, y2),
            }
        }
        ShapeKind::Line => Geometry::Line {
            start: sample_point(rng),
            end: sample_point(rng),
            width: rng.random_range(LINE_WIDTH.0..=LINE_WIDTH.1),
        },
        ShapeKind::Star => Geometry::Star {
            center: sample_point(rng),
            size: rng.random_range(STAR_SIZE.0..=STAR_SIZE.1),
        },
    };
    Element { color, geometry }
}

fn sample_point<R: Rng + ?Sized>(rng: &mut R) -> (i32, i32) {
    (
        rng.random_range(0..CANVAS_WIDTH as i32),
        rng.random_range(0..CANVAS_HEIGHT as i32),
    )
}
