//! Domain-specific types for brightness normalization

use std::fmt;

/// Number of images in every batch
pub const BATCH_SIZE: usize = 10;

/// Largest allowed distance between a normalized image's mean and the global average
pub const TOLERANCE: f64 = 1.0;

/// Target mean intensity shared by every image in the batch
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct GlobalAverage(f64);

impl GlobalAverage {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Check whether `mean` lies within [`TOLERANCE`] of the target
    #[inline]
    #[must_use]
    pub fn accepts(&self, mean: f64) -> bool {
        (mean - self.0).abs() <= TOLERANCE
    }
}

impl fmt::Display for GlobalAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Per-image multiplier that moves its mean onto the global average
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScalingFactor(f64);

impl ScalingFactor {
    /// Factor used for images whose mean intensity is zero
    pub const ZERO: Self = Self(0.0);

    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Factor that maps `image_mean` onto `target`, or [`ScalingFactor::ZERO`]
    /// for a black image
    #[must_use]
    pub fn between(target: GlobalAverage, image_mean: f64) -> Self {
        if image_mean == 0.0 {
            Self::ZERO
        } else {
            Self(target.value() / image_mean)
        }
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    #[inline(always)]
    #[must_use]
    // Hot path: called for every pixel during normalization
    pub fn apply(&self, pixel: u8) -> u8 {
        // Saturating cast truncates toward zero after the clamp
        (f64::from(pixel) * self.0).clamp(0.0, 255.0) as u8
    }
}

impl fmt::Display for ScalingFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    #[must_use]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{width}x{height}", width = self.width, height = self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_global_average_tolerance_is_inclusive() {
        let target = GlobalAverage::new(95.0);
        assert!(target.accepts(95.0));
        assert!(target.accepts(94.0));
        assert!(target.accepts(96.0));
        assert!(!target.accepts(93.99));
        assert!(!target.accepts(0.0));
    }

    #[test]
    fn test_scaling_factor_for_black_image_is_zero() {
        let factor = ScalingFactor::between(GlobalAverage::new(95.0), 0.0);
        assert!(factor.is_zero());
        assert_eq!(factor, ScalingFactor::ZERO);
    }

    #[test]
    fn test_scaling_factor_ratio() {
        let factor = ScalingFactor::between(GlobalAverage::new(95.0), 50.0);
        assert_relative_eq!(factor.value(), 1.9);
    }

    #[test]
    fn test_apply_clamps_and_truncates() {
        let factor = ScalingFactor::new(1.9);
        assert_eq!(factor.apply(200), 255);
        assert_eq!(factor.apply(0), 0);
        // 3 * 1.9 = 5.7 truncates to 5
        assert_eq!(factor.apply(3), 5);

        let factor = ScalingFactor::new(0.5);
        // 5 * 0.5 = 2.5 truncates to 2
        assert_eq!(factor.apply(5), 2);
    }

    #[test]
    fn test_display_precision() {
        assert_eq!(GlobalAverage::new(95.0).to_string(), "95.00");
        assert_eq!(ScalingFactor::new(1.9).to_string(), "1.9000");
        assert_eq!(ScalingFactor::ZERO.to_string(), "0.0000");
        assert_eq!(Dimensions::new(640, 480).to_string(), "640x480");
    }

    #[test]
    fn test_dimensions_pixel_count() {
        assert_eq!(Dimensions::new(4, 3).pixel_count(), 12);
        assert!(Dimensions::new(0, 3).is_empty());
    }
}
