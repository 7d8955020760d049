use super::output_path;
use crate::error::{NormalizeError, Result};
use image::{GrayImage, ImageFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Save one grayscale image as an 8-bit PNG
///
/// # Errors
///
/// Returns [`NormalizeError::Write`] if encoding or writing fails
pub fn save_image(image: &GrayImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| NormalizeError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Write every image to `dir` as `normalized_image{i}.png` (1-based)
///
/// The directory is created if it does not exist. Files are written in order,
/// so a failure part-way leaves the earlier files in place.
///
/// # Errors
///
/// Returns [`NormalizeError::CreateOutputDir`] if `dir` cannot be created and
/// [`NormalizeError::Write`] for the first file that cannot be written
pub fn write_batch<'a, I>(images: I, dir: &Path) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = &'a GrayImage>,
{
    std::fs::create_dir_all(dir).map_err(|source| NormalizeError::CreateOutputDir {
        path: dir.to_path_buf(),
        source,
    })?;

    images
        .into_iter()
        .enumerate()
        .map(|(i, image)| {
            let path = output_path(dir, i + 1);
            save_image(image, &path)?;
            debug!(path = %path.display(), "wrote image");
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::load_image;
    use crate::error::ErrorKind;
    use assert_matches::assert_matches;
    use image::Luma;

    fn sample_images() -> Vec<GrayImage> {
        (1..=4u8)
            .map(|i| GrayImage::from_pixel(u32::from(i), 2, Luma([i * 20])))
            .collect()
    }

    #[test]
    fn test_write_batch_names_files_in_order() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let out = dir.path().join("nested").join("out");
        let images = sample_images();

        let paths = write_batch(&images, &out).expect("Failed to write batch");
        assert_eq!(paths.len(), images.len());

        for (i, (path, expected)) in paths.iter().zip(&images).enumerate() {
            assert_eq!(path, &out.join(format!("normalized_image{}.png", i + 1)));
            let reloaded = load_image(path).expect("Failed to reload written image");
            assert_eq!(&reloaded, expected);
        }
    }

    #[test]
    fn test_write_batch_into_existing_directory() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let images = sample_images();

        write_batch(&images, dir.path()).expect("First write failed");
        let paths = write_batch(&images, dir.path()).expect("Second write failed");
        assert_eq!(paths.len(), images.len());
    }

    #[test]
    fn test_write_batch_output_is_a_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"").expect("Failed to create blocker file");

        let err = write_batch(&sample_images(), &blocker).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_matches!(err, NormalizeError::CreateOutputDir { .. });
    }

    #[test]
    fn test_write_batch_stops_at_unwritable_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        // A directory squatting on the second output name cannot be overwritten
        std::fs::create_dir(output_path(dir.path(), 2)).expect("Failed to create blocker dir");

        let err = write_batch(&sample_images(), dir.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_matches!(err, NormalizeError::Write { ref path, .. } if path.ends_with("normalized_image2.png"));

        // Files before the failure stay, files after it are never written
        assert!(output_path(dir.path(), 1).is_file());
        assert!(!output_path(dir.path(), 3).exists());
    }
}
