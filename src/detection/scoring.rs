use crate::config::MARGIN_PENALTY;
use crate::error::DetectError;
use crate::models::{BoundingBox, Contour};

/// A contour that survived the area filter, with its derived attributes.
/// Lives only for the duration of one selection pass.
#[derive(Debug, Clone)]
pub struct CandidateRegion {
    pub contour: Contour,
    pub area: f64,
    pub bbox: BoundingBox,
    pub margin: i64,
    pub score: f64,
}

impl CandidateRegion {
    fn evaluate(contour: Contour, image_width: u32, image_height: u32) -> Self {
        let area = contour.area();
        let bbox = contour.bounding_box();
        let margin = contour.margin(image_width, image_height);
        // A true document border nearly fills the photographed frame, so a
        // small gap to the image edges beats an equally large candidate
        // sitting in the middle of background clutter.
        let score = area - margin as f64 * MARGIN_PENALTY;
        Self {
            contour,
            area,
            bbox,
            margin,
            score,
        }
    }
}

/// Rank contours and pick the single best boundary candidate.
///
/// Contours enclosing less than `min_area_ratio` of the image area are
/// discarded regardless of score. Among survivors the strictly highest
/// score wins; on a tie the candidate extracted first (raster-scan order)
/// is kept. No survivors means [`DetectError::NoBoundaryFound`].
pub fn select_best(
    contours: Vec<Contour>,
    image_width: u32,
    image_height: u32,
    min_area_ratio: f64,
) -> Result<CandidateRegion, DetectError> {
    let min_area = min_area_ratio * f64::from(image_width) * f64::from(image_height);

    let mut best: Option<CandidateRegion> = None;
    for contour in contours {
        if contour.area() < min_area {
            continue;
        }
        let candidate = CandidateRegion::evaluate(contour, image_width, image_height);
        match &best {
            Some(current) if candidate.score <= current.score => {}
            _ => best = Some(candidate),
        }
    }

    best.ok_or(DetectError::NoBoundaryFound)
}
