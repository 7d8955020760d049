pub mod batch;
pub mod cli;
pub mod error;
pub mod image;
pub mod pipeline;
pub mod report;
pub mod types;

// Re-export commonly used items
pub use error::{ErrorKind, NormalizeError};
pub use pipeline::{run, RunConfig, RunReport, Stage};
