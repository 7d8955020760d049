use clap::Parser;
use std::path::PathBuf;

/// Normalize the brightness of a batch of grayscale images
///
/// Reads image1.png .. image10.png from the input directory, scales each one so
/// its mean intensity matches the batch-wide average, and writes
/// normalized_image1.png .. normalized_image10.png to the output directory.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory containing the input images
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Directory to write normalized images into (created if missing)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Input directory (alternative to the positional argument)
    #[arg(short, long = "input", value_name = "DIR", conflicts_with = "input")]
    pub input_dir: Option<PathBuf>,

    /// Output directory (alternative to the positional argument)
    #[arg(short, long = "output", value_name = "DIR", conflicts_with = "output")]
    pub output_dir: Option<PathBuf>,

    /// Exit with status 2 if any image misses the target
    #[arg(long)]
    pub strict: bool,

    /// Show per-image progress
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    #[must_use]
    pub fn input(&self) -> Option<PathBuf> {
        self.input_dir.clone().or_else(|| self.input.clone())
    }

    #[must_use]
    pub fn output(&self) -> Option<PathBuf> {
        self.output_dir.clone().or_else(|| self.output.clone())
    }
}
