//! Error types for a normalization run

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`NormalizeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required input file is absent
    MissingInput,
    /// An input file exists but is not a valid image
    Decode,
    /// The output directory or an output file could not be written
    Io,
    /// Input or output directory not supplied
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput => write!(f, "missing input"),
            Self::Decode => write!(f, "decode error"),
            Self::Io => write!(f, "I/O error"),
            Self::Config => write!(f, "configuration error"),
        }
    }
}

/// Error that aborts a normalization run
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("missing input image: {}", .path.display())]
    MissingInput { path: PathBuf },

    #[error("failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write image {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{reason}")]
    Config { reason: String },
}

impl NormalizeError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingInput { .. } => ErrorKind::MissingInput,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::CreateOutputDir { .. } | Self::Write { .. } => ErrorKind::Io,
            Self::Config { .. } => ErrorKind::Config,
        }
    }

    /// File or directory the error refers to, if any
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::MissingInput { path }
            | Self::Decode { path, .. }
            | Self::CreateOutputDir { path, .. }
            | Self::Write { path, .. } => Some(path),
            Self::Config { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
