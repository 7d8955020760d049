//! Pixel-level brightness math
//!
//! Everything here is pure: functions take images by reference and return new
//! values, so they can be applied to batch members in any order.

mod grayscale;
mod normalization;

pub use grayscale::{bt601_luma, convert_grayscale, dimensions, mean_intensity, pixel_sum};
pub use normalization::{compute_global_average, normalize_image};
