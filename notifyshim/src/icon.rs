use std::fs::File;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::config::IconPolicy;
use crate::error::{NotifyError, Result};

/// Checks that `path` points at a readable file and returns its absolute
/// form. Raster formats `image` knows are also header-checked; anything
/// else (SVG, ICNS, ...) is left to the OS renderer.
///
/// # Errors
/// Returns `NotifyError::InvalidIcon` if the file is missing, not a regular
/// file, can't be opened, or has a known raster extension but no valid header.
pub fn validate_icon(path: &Path) -> Result<PathBuf> {
    let invalid = |reason: String| NotifyError::InvalidIcon { path: path.to_path_buf(), reason };

    let metadata = std::fs::metadata(path).map_err(|e| invalid(e.to_string()))?;
    if !metadata.is_file() {
        return Err(invalid("not a regular file".to_string()));
    }
    File::open(path).map_err(|e| invalid(e.to_string()))?;

    match ImageFormat::from_path(path) {
        // Header only, the pixels are left to the OS.
        Ok(format) if format.reading_enabled() => {
            image::image_dimensions(path).map_err(|e| invalid(e.to_string()))?;
        }
        _ => tracing::debug!(path = %path.display(), "icon format not checked, passing through"),
    }

    absolutize(path).map_err(|e| invalid(e.to_string()))
}

/// Applies `policy` to an optional icon path.
///
/// # Errors
/// Only under [`IconPolicy::Reject`], when the icon is invalid.
pub fn resolve_icon(icon: Option<&Path>, policy: IconPolicy) -> Result<Option<PathBuf>> {
    let Some(path) = icon else {
        return Ok(None);
    };

    match validate_icon(path) {
        Ok(resolved) => Ok(Some(resolved)),
        Err(err) => match policy {
            IconPolicy::DropInvalid => {
                tracing::warn!(error = %err, "dropping icon, sending text-only notification");
                Ok(None)
            }
            IconPolicy::Reject => Err(err),
        },
    }
}

fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
