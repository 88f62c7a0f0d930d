use image::GrayImage;
use imageproc::distance_transform::Norm;
use imageproc::morphology::close;

/// Morphological closing (dilation then erosion) with a square all-ones
/// structuring element of side `kernel_size`.
///
/// Bridges thin gaps in the frame's dark border left by noise, compression
/// artifacts, or uneven ink so the border forms one continuous loop; the
/// contour stage needs a single closed boundary to trace.
///
/// `kernel_size` must be odd (validated by the caller): `Norm::LInf` with
/// distance `k` uses a `(2k + 1)`-sided square element.
pub fn close_mask(mask: &GrayImage, kernel_size: u32) -> GrayImage {
    let k = ((kernel_size - 1) / 2) as u8;
    if k == 0 {
        return mask.clone();
    }
    close(mask, Norm::LInf, k)
}
