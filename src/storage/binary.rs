//! Binary artifact persistence
//!
//! Values go through `bincode`, so the format is compact but not
//! self-describing: load with the same type that was saved.

use super::validate::ensure_path;
use crate::error::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Serialize `data` into a binary file at `path`
pub fn save_bin<T>(data: &T, path: impl AsRef<Path>) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    ensure_path("path", path)?;

    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    bincode::serialize_into(&mut writer, data).map_err(|source| Error::Binary {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|e| Error::io(path, e))?;

    log::info!("binary file saved at: {}", path.display());
    Ok(())
}

/// Restore a value previously written by [`save_bin`]
pub fn load_bin<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    ensure_path("path", path)?;

    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let data = bincode::deserialize_from(BufReader::new(file)).map_err(|source| {
        Error::Binary {
            path: path.to_path_buf(),
            source,
        }
    })?;

    log::info!("binary file loaded from: {}", path.display());
    Ok(data)
}
