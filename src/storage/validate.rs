//! Entry checks run before any file is touched

use crate::error::{Error, Result};
use std::path::Path;

/// Reject an empty path argument
pub(crate) fn ensure_path(argument: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::type_mismatch(argument, "a non-empty path", "\"\""));
    }
    Ok(())
}

/// Reject any empty path in a set of paths
pub(crate) fn ensure_paths<P: AsRef<Path>>(argument: &str, paths: &[P]) -> Result<()> {
    for (i, path) in paths.iter().enumerate() {
        ensure_path(&format!("{}[{}]", argument, i), path.as_ref())?;
    }
    Ok(())
}
