//! File-level stages of a normalization run
//!
//! This module owns the on-disk layout of a batch: where inputs are read from,
//! where normalized outputs go, and how each output is checked against the
//! global average.

mod loader;
mod validation;
mod writer;

pub use loader::{load_batch, load_image};
pub use validation::{validate, ValidationEntry, FAIL_SYMBOL, PASS_SYMBOL};
pub use writer::{save_image, write_batch};

use std::path::{Path, PathBuf};

/// Name of the `index`-th input file (1-based)
#[inline]
#[must_use]
pub fn input_file_name(index: usize) -> String {
    format!("image{index}.png")
}

/// Name of the `index`-th output file (1-based)
#[inline]
#[must_use]
pub fn output_file_name(index: usize) -> String {
    format!("normalized_image{index}.png")
}

#[must_use]
pub fn input_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(input_file_name(index))
}

#[must_use]
pub fn output_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(output_file_name(index))
}
