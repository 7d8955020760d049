use super::grayscale::{dimensions, mean_intensity, pixel_sum};
use crate::types::{GlobalAverage, ScalingFactor};
use image::{GrayImage, Luma};

/// Mean over every pixel of every image in the batch
///
/// Larger images weigh more: this is the mean of the concatenated pixel
/// population, not the mean of per-image means. An empty population yields 0.
#[must_use]
pub fn compute_global_average(images: &[GrayImage]) -> GlobalAverage {
    let (sum, count) = images.iter().fold((0u64, 0u64), |(sum, count), img| {
        (sum + pixel_sum(img), count + dimensions(img).pixel_count())
    });

    if count == 0 {
        return GlobalAverage::new(0.0);
    }
    GlobalAverage::new(sum as f64 / count as f64)
}

/// Scale an image so its mean moves onto the global average
///
/// Returns a new image of the same dimensions plus the factor used. A black
/// image (mean 0) yields an all-zero image and [`ScalingFactor::ZERO`].
#[must_use]
pub fn normalize_image(image: &GrayImage, target: GlobalAverage) -> (GrayImage, ScalingFactor) {
    let factor = ScalingFactor::between(target, mean_intensity(image));

    if factor.is_zero() {
        return (GrayImage::new(image.width(), image.height()), factor);
    }

    let mut normalized = image.clone();
    for Luma([value]) in normalized.pixels_mut() {
        *value = factor.apply(*value);
    }

    (normalized, factor)
}
