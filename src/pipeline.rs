//! End-to-end normalization run
//!
//! A run is a strict sequence: load, compute the global average, normalize
//! each image, write outputs, validate. The first failing stage aborts the
//! run. Callers follow progress through an observer that is called after each
//! stage completes.

use crate::batch::{self, ValidationEntry};
use crate::error::{NormalizeError, Result};
use crate::image::{compute_global_average, normalize_image};
use crate::types::{GlobalAverage, ScalingFactor};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directories for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    input_dir: PathBuf,
    output_dir: PathBuf,
}

impl RunConfig {
    /// # Errors
    ///
    /// Returns [`NormalizeError::Config`] unless both directories are supplied
    /// and non-empty
    pub fn new(input_dir: Option<PathBuf>, output_dir: Option<PathBuf>) -> Result<Self> {
        match (non_empty(input_dir), non_empty(output_dir)) {
            (Some(input_dir), Some(output_dir)) => Ok(Self {
                input_dir,
                output_dir,
            }),
            _ => Err(NormalizeError::Config {
                reason: "Please select both input and output directories!".to_string(),
            }),
        }
    }

    #[must_use]
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

fn non_empty(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}

/// Completed stage, reported to the progress observer
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    Loaded { count: usize },
    GlobalAverage(GlobalAverage),
    /// `index` is 1-based
    Normalized {
        index: usize,
        total: usize,
        factor: ScalingFactor,
    },
    Written { count: usize },
    Validated { passed: usize, total: usize },
}

impl Stage {
    /// Overall completion after this stage, from 0 to 100
    #[must_use]
    pub fn percent(&self) -> u8 {
        match self {
            Self::Loaded { .. } | Self::GlobalAverage(_) => 20,
            Self::Normalized { index, total, .. } => {
                let done = (*index).min(*total);
                20 + (60 * done / (*total).max(1)) as u8
            }
            Self::Written { .. } => 90,
            Self::Validated { .. } => 100,
        }
    }
}

/// Result of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub global_average: GlobalAverage,
    pub entries: Vec<ValidationEntry>,
    pub output_files: Vec<PathBuf>,
}

impl RunReport {
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.passed).count()
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.entries.iter().all(|e| e.passed)
    }

    /// One human-readable line per image, in batch order
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

/// Run the whole pipeline, calling `observer` after every completed stage
///
/// # Errors
///
/// Returns the first error raised by loading or writing. Files already
/// written before a write failure are left in place.
pub fn run<F>(config: &RunConfig, mut observer: F) -> Result<RunReport>
where
    F: FnMut(&Stage),
{
    info!(input = %config.input_dir().display(), "loading batch");
    let images = batch::load_batch(config.input_dir())?;
    observer(&Stage::Loaded { count: images.len() });

    let global_average = compute_global_average(&images);
    info!(%global_average, "computed global average intensity");
    observer(&Stage::GlobalAverage(global_average));

    let total = images.len();
    let results: Vec<_> = images
        .iter()
        .enumerate()
        .map(|(i, image)| {
            let (normalized, factor) = normalize_image(image, global_average);
            debug!(index = i + 1, %factor, "normalized image");
            observer(&Stage::Normalized {
                index: i + 1,
                total,
                factor,
            });
            (normalized, factor)
        })
        .collect();

    info!(output = %config.output_dir().display(), "writing normalized images");
    let output_files =
        batch::write_batch(results.iter().map(|(image, _)| image), config.output_dir())?;
    observer(&Stage::Written {
        count: output_files.len(),
    });

    let entries = batch::validate(&results, global_average);
    let report = RunReport {
        global_average,
        entries,
        output_files,
    };
    info!(
        passed = report.passed_count(),
        total = report.entries.len(),
        "validation complete"
    );
    observer(&Stage::Validated {
        passed: report.passed_count(),
        total: report.entries.len(),
    });

    Ok(report)
}
