use super::output_file_name;
use crate::image::mean_intensity;
use crate::types::{GlobalAverage, ScalingFactor};
use image::GrayImage;
use std::fmt;

pub const PASS_SYMBOL: &str = "✅";
pub const FAIL_SYMBOL: &str = "❌";

/// Outcome of checking one normalized image against the global average
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationEntry {
    /// 1-based position in the batch
    pub index: usize,
    /// Mean intensity of the normalized image
    pub mean: f64,
    pub factor: ScalingFactor,
    pub passed: bool,
}

impl ValidationEntry {
    #[must_use]
    pub fn file_name(&self) -> String {
        output_file_name(self.index)
    }

    #[inline]
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        if self.passed { PASS_SYMBOL } else { FAIL_SYMBOL }
    }
}

impl fmt::Display for ValidationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{name} - Avg: {mean:.2} - Scaling Factor: {factor} - {symbol}",
            name = self.file_name(),
            mean = self.mean,
            factor = self.factor,
            symbol = self.symbol()
        )
    }
}

/// Recompute each normalized image's mean and compare it to the target
///
/// Entries come back in input order with 1-based indices.
#[must_use]
pub fn validate(results: &[(GrayImage, ScalingFactor)], target: GlobalAverage) -> Vec<ValidationEntry> {
    results
        .iter()
        .enumerate()
        .map(|(i, (image, factor))| {
            let mean = mean_intensity(image);
            ValidationEntry {
                index: i + 1,
                mean,
                factor: *factor,
                passed: target.accepts(mean),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use image::Luma;

    fn uniform(value: u8) -> GrayImage {
        GrayImage::from_pixel(4, 4, Luma([value]))
    }

    #[test]
    fn test_validate_marks_within_tolerance() {
        let target = GlobalAverage::new(95.0);
        let results = vec![
            (uniform(95), ScalingFactor::new(1.9)),
            (uniform(94), ScalingFactor::new(0.6786)),
            (uniform(93), ScalingFactor::new(1.0)),
            (uniform(0), ScalingFactor::ZERO),
        ];

        let entries = validate(&results, target);
        assert_eq!(entries.len(), 4);
        assert_eq!(
            entries.iter().map(|e| e.passed).collect::<Vec<_>>(),
            vec![true, true, false, false]
        );
        assert_eq!(
            entries.iter().map(|e| e.index).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_relative_eq!(entries[1].mean, 94.0);
    }

    #[test]
    fn test_entry_line_format() {
        let entry = ValidationEntry {
            index: 1,
            mean: 95.0,
            factor: ScalingFactor::new(1.9),
            passed: true,
        };
        assert_eq!(
            entry.to_string(),
            "normalized_image1.png - Avg: 95.00 - Scaling Factor: 1.9000 - ✅"
        );
    }

    #[test]
    fn test_black_image_line() {
        let entries = validate(&[(uniform(0), ScalingFactor::ZERO)], GlobalAverage::new(95.0));
        assert_eq!(
            entries[0].to_string(),
            "normalized_image1.png - Avg: 0.00 - Scaling Factor: 0.0000 - ❌"
        );
    }

    #[test]
    fn test_mean_is_rounded_to_two_places() {
        // 1 + 2 + 2 = 5 over 3 pixels
        let img = GrayImage::from_raw(3, 1, vec![1, 2, 2]).expect("valid buffer");
        let entries = validate(&[(img, ScalingFactor::new(0.123456))], GlobalAverage::new(2.0));
        assert_eq!(
            entries[0].to_string(),
            "normalized_image1.png - Avg: 1.67 - Scaling Factor: 0.1235 - ✅"
        );
    }
}
