use image::DynamicImage;
use image::GrayImage;
use image::imageops::FilterType;
use imageproc::filter::gaussian_blur_f32;

use crate::error::DetectError;

/// Side of the fixed smoothing kernel applied before thresholding.
const SMOOTH_KERNEL_SIZE: u32 = 5;

/// How (whether) to resize the input before detection.
///
/// Single-dimension variants preserve aspect ratio; `Exact` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeSpec {
    /// Leave the buffer unchanged.
    #[default]
    Keep,
    /// Scale to this width, height recomputed as `round(h * w' / w)`.
    Width(u32),
    /// Scale to this height, width recomputed as `round(w * h' / h)`.
    Height(u32),
    /// Scale to exactly these dimensions.
    Exact { width: u32, height: u32 },
}

impl ResizeSpec {
    /// Build a spec from two optional CLI-style targets.
    pub fn from_targets(width: Option<u32>, height: Option<u32>) -> Self {
        match (width, height) {
            (None, None) => ResizeSpec::Keep,
            (Some(w), None) => ResizeSpec::Width(w),
            (None, Some(h)) => ResizeSpec::Height(h),
            (Some(width), Some(height)) => ResizeSpec::Exact { width, height },
        }
    }

    fn validate(&self) -> Result<(), DetectError> {
        let (w, h) = match *self {
            ResizeSpec::Keep => return Ok(()),
            ResizeSpec::Width(w) => (w, 1),
            ResizeSpec::Height(h) => (1, h),
            ResizeSpec::Exact { width, height } => (width, height),
        };
        if w == 0 || h == 0 {
            return Err(DetectError::InvalidResizeTarget(w, h));
        }
        Ok(())
    }

    /// Output dimensions for an input of `width`x`height`.
    pub fn target_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        match *self {
            ResizeSpec::Keep => (width, height),
            ResizeSpec::Width(w) => {
                let h = (f64::from(height) * f64::from(w) / f64::from(width)).round() as u32;
                (w, h)
            }
            ResizeSpec::Height(h) => {
                let w = (f64::from(width) * f64::from(h) / f64::from(height)).round() as u32;
                (w, h)
            }
            ResizeSpec::Exact { width, height } => (width, height),
        }
    }
}

/// Resize according to `spec`. When the target dimensions already match
/// the input, the buffer is returned unchanged.
pub fn resize(img: &DynamicImage, spec: ResizeSpec) -> Result<DynamicImage, DetectError> {
    spec.validate()?;
    let (target_w, target_h) = spec.target_dimensions(img.width(), img.height());
    // An extreme aspect ratio can round the recomputed dimension of a
    // single-dimension spec down to zero; a zero-sized buffer is not a
    // valid detection input.
    if target_w == 0 || target_h == 0 {
        return Err(DetectError::InvalidResizeTarget(target_w, target_h));
    }
    if (target_w, target_h) == (img.width(), img.height()) {
        return Ok(img.clone());
    }
    Ok(img.resize_exact(target_w, target_h, FilterType::Triangle))
}

/// Convert image to grayscale.
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Apply the fixed 5x5 Gaussian smoothing pass used before thresholding.
/// Sigma is derived from the kernel size the same way OpenCV derives it
/// when none is given.
pub fn smooth(gray: &GrayImage) -> GrayImage {
    gaussian_blur_f32(gray, auto_sigma(SMOOTH_KERNEL_SIZE))
}

/// OpenCV's automatic sigma for a Gaussian kernel of side `ksize`:
/// `0.3 * ((ksize - 1) * 0.5 - 1) + 0.8`.
pub(crate) fn auto_sigma(ksize: u32) -> f32 {
    0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8
}
