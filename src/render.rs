use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};

use crate::models::Polygon;

pub const RED: Rgb<u8> = Rgb([255, 0, 0]);
pub const GREEN: Rgb<u8> = Rgb([0, 255, 0]);

/// Draw the detected polygon onto an RGB copy of `img`: red edges between
/// consecutive corners (closing back to the first) and a filled green dot
/// on each corner.
pub fn draw_polygon(img: &DynamicImage, polygon: &Polygon) -> RgbImage {
    let mut out = img.to_rgb8();
    if polygon.is_empty() {
        return out;
    }

    for (i, p) in polygon.points.iter().enumerate() {
        let q = &polygon.points[(i + 1) % polygon.len()];
        draw_line_segment_mut(
            &mut out,
            (p.x as f32, p.y as f32),
            (q.x as f32, q.y as f32),
            RED,
        );
    }
    for p in &polygon.points {
        draw_filled_circle_mut(&mut out, (p.x, p.y), 4, GREEN);
    }
    out
}
