//! Base64 image payloads

use super::validate::ensure_path;
use crate::error::{Error, Result};
use base64::Engine;
use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use std::path::Path;

/// Standard padded alphabet that ignores stray bits in the final symbol
const STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decode a base64 payload and write the raw bytes to `filename`
///
/// ASCII whitespace inside the payload is skipped, so line-wrapped base64 is
/// accepted. The payload is fully decoded before the file is created; an
/// invalid payload leaves any existing file as it was.
pub fn decode_image(encoded: impl AsRef<[u8]>, filename: impl AsRef<Path>) -> Result<()> {
    let filename = filename.as_ref();
    ensure_path("filename", filename)?;

    let compact: Vec<u8> = encoded
        .as_ref()
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let bytes = STANDARD
        .decode(&compact)
        .map_err(|source| Error::Base64 {
            path: filename.to_path_buf(),
            source,
        })?;

    std::fs::write(filename, &bytes).map_err(|e| Error::io(filename, e))?;

    log::info!(
        "decoded image ({} bytes) written to: {}",
        bytes.len(),
        filename.display()
    );
    Ok(())
}

/// Read a file and return its contents as base64 text
pub fn encode_image_into_base64(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    ensure_path("path", path)?;

    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    let encoded = STANDARD.encode(&bytes);

    log::info!("image encoded to base64 from: {}", path.display());
    Ok(encoded)
}
