//! Rasterization and encoding of a [`Composition`].

use crate::compose::{Composition, Element, Geometry};
use crate::error::SynthError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;
use std::f32::consts::PI;
use std::io::Cursor;

/// Prefix of every encoded dream image.
pub const DATA_URL_PREFIX: &str = "data:image/png;base64,";

const STAR_VERTICES: usize = 5;

/// Paint a composition onto a fresh canvas, applying blur last.
pub fn render(composition: &Composition) -> RgbImage {
    let (width, height) = composition.dimensions();
    let mut canvas = RgbImage::from_pixel(width, height, composition.background.rgb());
    for element in &composition.elements {
        draw_element(&mut canvas, element);
    }
    match composition.blur_radius {
        Some(radius) => image::imageops::blur(&canvas, radius as f32),
        None => canvas,
    }
}

/// Encode a raster as a `data:image/png;base64,...` string.
pub fn encode_data_url(canvas: &RgbImage) -> Result<String, SynthError> {
    let mut bytes = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(format!("{DATA_URL_PREFIX}{}", STANDARD.encode(&bytes)))
}

fn draw_element(canvas: &mut RgbImage, element: &Element) {
    let color = element.color.rgb();
    match element.geometry {
        Geometry::Circle { center, radius } => {
            draw_filled_circle_mut(canvas, center, radius, color);
        }
        Geometry::Rectangle {
            top_left,
            bottom_right,
        } => {
            let (x0, x1) = (top_left.0.min(bottom_right.0), top_left.0.max(bottom_right.0));
            let (y0, y1) = (top_left.1.min(bottom_right.1), top_left.1.max(bottom_right.1));
            let width = x0.abs_diff(x1) + 1;
            let height = y0.abs_diff(y1) + 1;
            let rect = Rect::at(x0, y0).of_size(width, height);
            draw_filled_rect_mut(canvas, rect, color);
        }
        Geometry::Line { start, end, width } => draw_thick_line(canvas, start, end, width, color),
        Geometry::Star { center, size } => {
            draw_polygon_mut(canvas, &pentagon(center, size), color);
        }
    }
}

/// Stroke a line by stacking parallel segments at half-pixel steps.
fn draw_thick_line(
    canvas: &mut RgbImage,
    start: (i32, i32),
    end: (i32, i32),
    width: u32,
    color: Rgb<u8>,
) {
    let (x0, y0) = (start.0 as f32, start.1 as f32);
    let (x1, y1) = (end.0 as f32, end.1 as f32);
    let (dx, dy) = (x1 - x0, y1 - y0);
    let length = (dx * dx + dy * dy).sqrt();
    if length < f32::EPSILON {
        draw_filled_circle_mut(canvas, start, (width / 2) as i32, color);
        return;
    }
    let (nx, ny) = (-dy / length, dx / length);
    let half = (width as f32 - 1.0) / 2.0;
    let steps = width.saturating_sub(1) * 2;
    for step in 0..=steps {
        let offset = step as f32 * 0.5 - half;
        draw_line_segment_mut(
            canvas,
            (x0 + nx * offset, y0 + ny * offset),
            (x1 + nx * offset, y1 + ny * offset),
            color,
        );
    }
}

/// Vertices of a regular pentagon pointing up.
fn pentagon(center: (i32, i32), size: i32) -> Vec<Point<i32>> {
    let radius = size as f32;
    (0..STAR_VERTICES)
        .map(|index| {
            let angle = -PI / 2.0 + index as f32 * 2.0 * PI / STAR_VERTICES as f32;
            Point::new(
                center.0 + (radius * angle.cos()).round() as i32,
                center.1 + (radius * angle.sin()).round() as i32,
            )
        })
        .collect()
}
