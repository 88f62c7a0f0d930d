use image::GrayImage;
use imageproc::contours::BorderType;

use crate::models::{Contour, Point};

/// Extract the external (outermost) closed boundaries of connected
/// foreground components via Suzuki-Abe border following.
///
/// Hole borders and contours nested inside another component are dropped;
/// only the outer loop of each top-level component matters here. Results
/// come back in the tracer's raster-scan discovery order, which is what
/// makes the scorer's first-wins tie-break deterministic.
pub fn find_external_contours(mask: &GrayImage) -> Vec<Contour> {
    imageproc::contours::find_contours::<i32>(mask)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .map(|c| Contour::new(c.points.into_iter().map(Point::from).collect()))
        .collect()
}
