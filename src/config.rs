use crate::error::DetectError;

/// Relative weight of edge proximity versus raw area in candidate scoring.
/// Tunable constant, not derived from image dimensions.
pub const MARGIN_PENALTY: f64 = 50.0;

/// Tuning knobs for one detection call.
///
/// One immutable value is passed per call; there are no process-wide
/// defaults, so concurrent calls with different tunings cannot interfere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionConfig {
    /// Window side for the adaptive threshold. Odd, > 1.
    pub block_size: u32,
    /// Bias subtracted from the local mean. Larger values shrink the
    /// foreground.
    pub c: i32,
    /// Side of the square structuring element used by the closing step.
    /// Odd, positive.
    pub morph_kernel: u32,
    /// Fraction of the contour perimeter used as the polygon
    /// approximation tolerance. In (0, 1).
    pub epsilon_factor: f64,
    /// Minimum fraction of total image area a candidate boundary must
    /// enclose. In (0, 1).
    pub min_area_ratio: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            block_size: 51,
            c: 10,
            morph_kernel: 5,
            epsilon_factor: 0.02,
            min_area_ratio: 0.1,
        }
    }
}

impl DetectionConfig {
    pub fn with_block_size(mut self, block_size: u32) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn with_c(mut self, c: i32) -> Self {
        self.c = c;
        self
    }

    pub fn with_morph_kernel(mut self, morph_kernel: u32) -> Self {
        self.morph_kernel = morph_kernel;
        self
    }

    pub fn with_epsilon_factor(mut self, epsilon_factor: f64) -> Self {
        self.epsilon_factor = epsilon_factor;
        self
    }

    pub fn with_min_area_ratio(mut self, min_area_ratio: f64) -> Self {
        self.min_area_ratio = min_area_ratio;
        self
    }

    /// Reject invalid parameters before any image processing happens.
    /// Invalid values are never silently corrected.
    pub fn validate(&self) -> Result<(), DetectError> {
        if self.block_size <= 1 || self.block_size % 2 == 0 {
            return Err(DetectError::EvenBlockSize(self.block_size));
        }
        if self.morph_kernel == 0 || self.morph_kernel % 2 == 0 {
            return Err(DetectError::EvenMorphKernel(self.morph_kernel));
        }
        if !(self.epsilon_factor > 0.0 && self.epsilon_factor < 1.0) {
            return Err(DetectError::EpsilonFactorOutOfRange(self.epsilon_factor));
        }
        if !(self.min_area_ratio > 0.0 && self.min_area_ratio < 1.0) {
            return Err(DetectError::MinAreaRatioOutOfRange(self.min_area_ratio));
        }
        Ok(())
    }
}
