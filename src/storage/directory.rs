//! Directory provisioning

use super::validate::ensure_paths;
use crate::error::{Error, Result};
use std::path::Path;

/// Create every directory in `paths`, including missing ancestors
///
/// Paths that already exist are left alone, so calling this twice with the
/// same input is a no-op the second time. All paths are checked before the
/// first directory is created.
pub fn create_directories<I, P>(paths: I, verbose: bool) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let paths: Vec<P> = paths.into_iter().collect();
    ensure_paths("paths", &paths)?;

    for path in &paths {
        let path = path.as_ref();
        std::fs::create_dir_all(path).map_err(|e| Error::io(path, e))?;

        if verbose {
            log::info!("created directory at: {}", path.display());
        } else {
            log::debug!("created directory at: {}", path.display());
        }
    }

    Ok(())
}
