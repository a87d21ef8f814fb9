//! File size reporting

use super::validate::ensure_path;
use crate::error::{Error, Result};
use std::path::Path;

const KB: f64 = 1024.0;

/// Size of `path` in kilobytes, rounded half to even
pub fn size_in_kb(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    ensure_path("path", path)?;

    let bytes = std::fs::metadata(path).map_err(|e| Error::io(path, e))?.len();
    Ok((bytes as f64 / KB).round_ties_even() as u64)
}

/// Human-readable size of `path`, such as `"~ 42 KB"`
pub fn get_size(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let size = format!("~ {} KB", size_in_kb(path)?);

    log::info!("size of {}: {}", path.display(), size);
    Ok(size)
}
