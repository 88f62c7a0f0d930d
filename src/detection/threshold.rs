use image::{GrayImage, Luma};
use imageproc::filter::gaussian_blur_f32;

use crate::detection::preprocessing::auto_sigma;

/// Adaptive inverted binarization.
///
/// The local threshold for each pixel is the Gaussian-weighted mean of its
/// `block_size` neighborhood minus `c`; pixels darker than the threshold
/// become foreground (255). Dark border ink lands in the foreground even
/// under uneven illumination, which a single global threshold cannot do.
///
/// The weighted local mean is computed as a Gaussian blur of the input
/// with sigma derived from `block_size`, matching the auto-sigma rule of
/// the smoothing stage.
pub fn adaptive_binarize(gray: &GrayImage, block_size: u32, c: i32) -> GrayImage {
    let local_mean = gaussian_blur_f32(gray, auto_sigma(block_size));

    let mut mask = GrayImage::new(gray.width(), gray.height());
    for (x, y, pixel) in gray.enumerate_pixels() {
        let threshold = i32::from(local_mean.get_pixel(x, y)[0]) - c;
        let value = if i32::from(pixel[0]) < threshold { 255 } else { 0 };
        mask.put_pixel(x, y, Luma([value]));
    }
    mask
}
