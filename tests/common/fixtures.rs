use cardframe::Polygon;
use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::draw_polygon_mut;
use imageproc::point::Point as ProcPoint;

pub const BACKGROUND: Rgb<u8> = Rgb([245, 245, 245]);
pub const INK: Rgb<u8> = Rgb([5, 5, 5]);

/// Corners of a `rect_w` x `rect_h` rectangle centered in a
/// `width` x `height` image, rotated by `angle_deg`.
pub fn rotated_rect_corners(
    width: u32,
    height: u32,
    rect_w: f64,
    rect_h: f64,
    angle_deg: f64,
) -> [(f64, f64); 4] {
    let cx = f64::from(width) / 2.0;
    let cy = f64::from(height) / 2.0;
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let offsets = [
        (-rect_w / 2.0, -rect_h / 2.0),
        (rect_w / 2.0, -rect_h / 2.0),
        (rect_w / 2.0, rect_h / 2.0),
        (-rect_w / 2.0, rect_h / 2.0),
    ];
    offsets.map(|(dx, dy)| (cx + dx * cos - dy * sin, cy + dx * sin + dy * cos))
}

fn to_proc_points(corners: &[(f64, f64); 4]) -> Vec<ProcPoint<i32>> {
    corners
        .iter()
        .map(|&(x, y)| ProcPoint::new(x.round() as i32, y.round() as i32))
        .collect()
}

/// Synthesize a light image with a solid dark rectangular frame of the
/// given stroke `thickness`, rotated by `angle_deg` about the image
/// center. Returns the image and the frame's outer corner coordinates.
pub fn frame_image(
    width: u32,
    height: u32,
    rect_w: f64,
    rect_h: f64,
    angle_deg: f64,
    thickness: f64,
) -> (DynamicImage, [(f64, f64); 4]) {
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);

    let outer = rotated_rect_corners(width, height, rect_w, rect_h, angle_deg);
    let inner = rotated_rect_corners(
        width,
        height,
        rect_w - 2.0 * thickness,
        rect_h - 2.0 * thickness,
        angle_deg,
    );
    draw_polygon_mut(&mut img, &to_proc_points(&outer), INK);
    draw_polygon_mut(&mut img, &to_proc_points(&inner), BACKGROUND);

    (DynamicImage::ImageRgb8(img), outer)
}

/// Synthesize a light image with one solid dark rectangle (no hollow
/// interior), with its top-left at (`x`, `y`).
pub fn solid_rect_image(width: u32, height: u32, x: u32, y: u32, w: u32, h: u32) -> DynamicImage {
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);
    fill_rect(&mut img, x, y, w, h);
    DynamicImage::ImageRgb8(img)
}

pub fn fill_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32) {
    for yy in y..(y + h).min(img.height()) {
        for xx in x..(x + w).min(img.width()) {
            img.put_pixel(xx, yy, INK);
        }
    }
}

/// Assert the polygon has exactly 4 vertices, each expected corner lying
/// within `tolerance` pixels of some detected vertex.
pub fn assert_corners_match(polygon: &Polygon, expected: &[(f64, f64); 4], tolerance: f64) {
    assert!(
        polygon.is_quad(),
        "expected 4 corners, got {}: {:?}",
        polygon.len(),
        polygon.points
    );
    for &(ex, ey) in expected {
        let closest = polygon
            .points
            .iter()
            .map(|p| (f64::from(p.x) - ex).hypot(f64::from(p.y) - ey))
            .fold(f64::INFINITY, f64::min);
        assert!(
            closest <= tolerance,
            "corner ({ex:.1}, {ey:.1}) is {closest:.2} px from the nearest \
             detected vertex (tolerance {tolerance}): {:?}",
            polygon.points
        );
    }
}
