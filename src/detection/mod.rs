pub mod contours;
pub mod morphology;
pub mod polygon;
pub mod preprocessing;
pub mod scoring;
pub mod threshold;

use image::{DynamicImage, GrayImage};

use crate::config::DetectionConfig;
use crate::error::DetectError;
use crate::models::Polygon;
use preprocessing::ResizeSpec;

/// Result of one detection call, including read-only snapshots of the
/// intermediate buffers for diagnostics.
#[derive(Debug, Clone)]
pub struct DetectionStages {
    /// Grayscale conversion of the (possibly resized) input.
    pub gray: GrayImage,
    /// Inverted binary mask from adaptive thresholding.
    pub binary: GrayImage,
    /// Binary mask after morphological closing.
    pub closed: GrayImage,
    /// Detected boundary polygon, in coordinates of the resized image.
    pub polygon: Polygon,
}

/// Boundary quadrilateral detector.
///
/// Runs the full pipeline on one image: optional resize, grayscale and
/// smoothing, adaptive binarization, morphological closing, external
/// contour extraction, candidate scoring, polygon approximation. Every
/// call is self-contained and synchronous; nothing is shared between
/// calls, so independent images can be processed on independent threads
/// without coordination.
#[derive(Debug, Clone, Default)]
pub struct FrameDetector {
    config: DetectionConfig,
    resize: ResizeSpec,
}

impl FrameDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: DetectionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_resize(mut self, resize: ResizeSpec) -> Self {
        self.resize = resize;
        self
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Detect the boundary polygon of the bordered region in `img`.
    ///
    /// The input uses the `image` crate's RGB channel convention; the
    /// decoder collaborator is expected to hand over a [`DynamicImage`].
    /// Output coordinates refer to the resized image when a resize spec
    /// is set.
    pub fn detect(&self, img: &DynamicImage) -> Result<Polygon, DetectError> {
        self.detect_with_stages(img).map(|stages| stages.polygon)
    }

    /// Like [`detect`](Self::detect), but also returns the intermediate
    /// grayscale, binary, and closed buffers for diagnostics.
    pub fn detect_with_stages(&self, img: &DynamicImage) -> Result<DetectionStages, DetectError> {
        // All parameter validation happens before any pixel work.
        self.config.validate()?;
        let img = preprocessing::resize(img, self.resize)?;

        let gray = preprocessing::to_grayscale(&img);
        let smoothed = preprocessing::smooth(&gray);
        let binary = threshold::adaptive_binarize(&smoothed, self.config.block_size, self.config.c);
        let closed = morphology::close_mask(&binary, self.config.morph_kernel);

        let found = contours::find_external_contours(&closed);
        let (width, height) = closed.dimensions();
        let winner = scoring::select_best(found, width, height, self.config.min_area_ratio)?;
        let polygon = polygon::approximate_quad(&winner.contour, self.config.epsilon_factor)?;

        Ok(DetectionStages {
            gray,
            binary,
            closed,
            polygon,
        })
    }
}
