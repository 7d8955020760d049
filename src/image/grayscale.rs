//! Grayscale conversion and intensity statistics
//!
//! Every source raster is reduced to a single 8-bit luma channel before any
//! brightness math runs, so the rest of the crate only deals with `GrayImage`.

use crate::types::Dimensions;
use image::{DynamicImage, GrayImage, Luma, Rgb};

/// Convert a decoded raster of any color type to 8-bit grayscale
///
/// Color images are reduced with ITU-R BT.601 luma weights
/// (L = 0.299 R + 0.587 G + 0.114 B), alpha is dropped. Already-grayscale
/// 8-bit images are passed through without copying; other grayscale depths
/// are rescaled to 8 bits.
#[must_use]
pub fn convert_grayscale(image: DynamicImage) -> GrayImage {
    match image {
        DynamicImage::ImageLuma8(gray) => gray,
        gray @ (DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_)) => gray.into_luma8(),
        color => {
            let rgb = color.into_rgb8();
            GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
                Luma([bt601_luma(*rgb.get_pixel(x, y))])
            })
        }
    }
}

/// BT.601 luma in 16-bit fixed point; the weights sum to exactly 65536
#[inline(always)]
#[must_use]
pub fn bt601_luma(Rgb([r, g, b]): Rgb<u8>) -> u8 {
    let weighted = u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471;
    ((weighted + 0x8000) >> 16) as u8
}

/// Sum of every pixel value in the image
#[inline]
#[must_use]
pub fn pixel_sum(image: &GrayImage) -> u64 {
    image.as_raw().iter().map(|&p| u64::from(p)).sum()
}

#[inline]
#[must_use]
pub fn dimensions(image: &GrayImage) -> Dimensions {
    Dimensions::new(image.width(), image.height())
}

/// Arithmetic mean of all pixel values
///
/// An image without pixels has a mean of 0.
#[must_use]
pub fn mean_intensity(image: &GrayImage) -> f64 {
    let dims = dimensions(image);
    if dims.is_empty() {
        return 0.0;
    }
    pixel_sum(image) as f64 / dims.pixel_count() as f64
}
