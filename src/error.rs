use thiserror::Error;

/// Errors produced by the boundary detection pipeline.
///
/// Configuration problems are caught by [`crate::config::DetectionConfig::validate`]
/// (or resize validation) before any pixel work starts; the remaining variants
/// are terminal outcomes of a detection call.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("block_size must be odd and greater than 1, got {0}")]
    EvenBlockSize(u32),

    #[error("morph_kernel must be a positive odd integer, got {0}")]
    EvenMorphKernel(u32),

    #[error("epsilon_factor must be in (0, 1), got {0}")]
    EpsilonFactorOutOfRange(f64),

    #[error("min_area_ratio must be in (0, 1), got {0}")]
    MinAreaRatioOutOfRange(f64),

    #[error("resize target must be positive, got {0}x{1}")]
    InvalidResizeTarget(u32, u32),

    #[error("no contour met the minimum-area threshold")]
    NoBoundaryFound,

    #[error("polygon approximation did not converge to 4 corners (got {vertices})")]
    AmbiguousPolygon { vertices: usize },
}

impl DetectError {
    /// True for errors raised by parameter validation rather than by
    /// image content.
    pub fn is_configuration(&self) -> bool {
        !matches!(
            self,
            DetectError::NoBoundaryFound | DetectError::AmbiguousPolygon { .. }
        )
    }
}
