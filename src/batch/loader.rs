use super::input_path;
use crate::error::{NormalizeError, Result};
use crate::image::{convert_grayscale, dimensions, mean_intensity};
use crate::types::BATCH_SIZE;
use image::{GrayImage, ImageError, ImageReader};
use std::path::Path;
use tracing::debug;

/// Open an image file and convert it to 8-bit grayscale
///
/// # Errors
///
/// Returns [`NormalizeError::MissingInput`] if the file does not exist and
/// [`NormalizeError::Decode`] if it cannot be read or decoded
pub fn load_image(path: &Path) -> Result<GrayImage> {
    // Format comes from the file contents; the extension is only a fallback
    let decoded = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(ImageError::IoError)
        .and_then(ImageReader::decode)
        .map_err(|source| match source {
            ImageError::IoError(ref e) if e.kind() == std::io::ErrorKind::NotFound => {
                NormalizeError::MissingInput {
                    path: path.to_path_buf(),
                }
            }
            source => NormalizeError::Decode {
                path: path.to_path_buf(),
                source,
            },
        })?;

    Ok(convert_grayscale(decoded))
}

/// Load `image1.png` .. `imageN.png` from `dir`, in index order
///
/// The load is all-or-nothing: the first missing or undecodable file aborts
/// it and no partial batch is returned.
///
/// # Errors
///
/// Propagates the first error from [`load_image`]
pub fn load_batch(dir: &Path) -> Result<Vec<GrayImage>> {
    (1..=BATCH_SIZE)
        .map(|index| {
            let path = input_path(dir, index);
            let image = load_image(&path)?;
            debug!(
                path = %path.display(),
                dimensions = %dimensions(&image),
                mean = mean_intensity(&image),
                "loaded image"
            );
            Ok(image)
        })
        .collect()
}
