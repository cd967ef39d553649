//! Saving submitted drawings to disk.

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::draw::EncodedImage;

/// Filename template for exported drawings (chrono format specifiers).
pub const DRAWING_FILENAME_TEMPLATE: &str = "drawing_%Y-%m-%d_%H%M%S";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Generate a filename based on the template and current time.
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Ensure the export directory exists, creating it if necessary.
///
/// Returns the canonicalized path when it can be resolved.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating drawing directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Writes the snapshot as a PNG file into `directory` and returns its path.
///
/// The file is readable and writable by the owner only.
pub fn save_drawing(image: &EncodedImage, directory: &Path) -> Result<PathBuf, ExportError> {
    let png = image.to_png()?;
    let directory = ensure_directory_exists(directory)?;
    let file_path = directory.join(generate_filename(DRAWING_FILENAME_TEMPLATE, "png"));

    log::info!(
        "Saving drawing to: {} ({} bytes)",
        file_path.display(),
        png.len()
    );
    fs::write(&file_path, &png)?;

    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&file_path, Permissions::from_mode(0o600))?;
    }

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Surface;
    use crate::util::Bounds;

    #[test]
    fn generated_filename_uses_template_and_extension() {
        let filename = generate_filename(DRAWING_FILENAME_TEMPLATE, "png");
        assert!(filename.starts_with("drawing_"));
        assert!(filename.ends_with(".png"));
        // drawing_YYYY-MM-DD_HHMMSS.png
        assert_eq!(filename.len(), "drawing_2025-01-01_120000.png".len());
    }

    #[test]
    fn expand_tilde_only_touches_home_prefix() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with("~"));
        assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
    }

    #[test]
    fn save_drawing_creates_directory_and_png() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("nested").join("drawings");
        let surface = Surface::new(Bounds::new(0.0, 0.0, 20.0, 20.0), 1.0).unwrap();
        let image = surface.snapshot().unwrap();

        let path = save_drawing(&image, &target).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn invalid_snapshot_is_rejected() {
        let temp = tempfile::tempdir().unwrap();
        let image = EncodedImage::from_base64("not base64!");
        assert!(matches!(
            save_drawing(&image, temp.path()),
            Err(ExportError::Decode(_))
        ));
    }
}
