use serde::{Deserialize, Serialize};

/// Integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<imageproc::point::Point<i32>> for Point {
    fn from(p: imageproc::point::Point<i32>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Point> for imageproc::point::Point<i32> {
    fn from(p: Point) -> Self {
        imageproc::point::Point::new(p.x, p.y)
    }
}

/// Axis-aligned bounding box in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Ordered, closed boundary of one connected foreground region.
///
/// Points come from border following in the order the tracer walked them;
/// the sequence is treated as closed (last point connects back to first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contour {
    pub points: Vec<Point>,
}

impl Contour {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub(crate) fn proc_points(&self) -> Vec<imageproc::point::Point<i32>> {
        self.points.iter().map(|&p| p.into()).collect()
    }

    /// Magnitude of the signed (shoelace) area enclosed by the contour
    /// polygon. Holes inside the traced region do not reduce it.
    pub fn area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let mut twice_area = 0i64;
        for (i, p) in self.points.iter().enumerate() {
            let q = &self.points[(i + 1) % self.points.len()];
            twice_area += i64::from(p.x) * i64::from(q.y) - i64::from(q.x) * i64::from(p.y);
        }
        (twice_area.abs() as f64) / 2.0
    }

    /// Closed perimeter length.
    pub fn perimeter(&self) -> f64 {
        imageproc::geometry::arc_length(&self.proc_points(), true)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let mut min_x = i32::MAX;
        let mut min_y = i32::MAX;
        let mut max_x = i32::MIN;
        let mut max_y = i32::MIN;
        for p in &self.points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        if min_x > max_x {
            return BoundingBox {
                x: 0,
                y: 0,
                width: 0,
                height: 0,
            };
        }
        BoundingBox {
            x: min_x.max(0) as u32,
            y: min_y.max(0) as u32,
            width: (max_x - min_x + 1) as u32,
            height: (max_y - min_y + 1) as u32,
        }
    }

    /// Smallest gap between the contour's bounding box and any image edge.
    pub fn margin(&self, image_width: u32, image_height: u32) -> i64 {
        let bbox = self.bounding_box();
        let x = i64::from(bbox.x);
        let y = i64::from(bbox.y);
        let right = i64::from(image_width) - x - i64::from(bbox.width);
        let bottom = i64::from(image_height) - y - i64::from(bbox.height);
        x.min(y).min(right).min(bottom)
    }
}

/// Final detection output: ordered corner points, nominally four.
///
/// Vertex order is whatever order the simplification preserved from the
/// contour traversal; no clockwise/counter-clockwise or top-left-first
/// convention is imposed. Consumers needing a canonical order must sort
/// the corners themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_quad(&self) -> bool {
        self.points.len() == 4
    }
}
