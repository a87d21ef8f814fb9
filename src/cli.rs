//! CLI helper functions
//!
//! Each helper backs one `artio` subcommand and returns what the command
//! prints, leaving terminal output to `main`.

use crate::config_box::ConfigBox;
use crate::storage::{
    create_directories, decode_image, encode_image_into_base64, get_size, load_json, read_yaml,
};
use eyre::{Context, Result, eyre};
use serde_json::Value;
use std::path::Path;

/// Render a YAML config, or a single field of it, as YAML
pub fn show_yaml(file: impl AsRef<Path>, key: Option<&str>) -> Result<String> {
    let file = file.as_ref();
    let config = read_yaml(file)
        .with_context(|| format!("Failed to read YAML config: {}", file.display()))?;

    match select(&config, key, file)? {
        Value::String(s) => Ok(s),
        value => {
            let yaml = serde_yaml::to_string(&value).context("Failed to render YAML")?;
            Ok(yaml.trim_end().to_string())
        }
    }
}

/// Render a JSON record, or a single field of it, as JSON
pub fn show_json(file: impl AsRef<Path>, key: Option<&str>) -> Result<String> {
    let file = file.as_ref();
    let record =
        load_json(file).with_context(|| format!("Failed to load JSON: {}", file.display()))?;

    match select(&record, key, file)? {
        Value::String(s) => Ok(s),
        value => serde_json::to_string_pretty(&value).context("Failed to render JSON"),
    }
}

fn select(doc: &ConfigBox, key: Option<&str>, file: &Path) -> Result<Value> {
    match key {
        None => Ok(doc.as_map().clone().into()),
        Some(key) => doc
            .path(key)
            .cloned()
            .ok_or_else(|| eyre!("Key '{}' not found in {}", key, file.display())),
    }
}

/// Create the given directories, returning how many were requested
pub fn make_dirs(dirs: &[String], quiet: bool) -> Result<usize> {
    if dirs.is_empty() {
        return Err(eyre!("No directories given"));
    }
    create_directories(dirs, !quiet).context("Failed to create directories")?;
    Ok(dirs.len())
}

pub fn file_size(file: impl AsRef<Path>) -> Result<String> {
    let file = file.as_ref();
    get_size(file).with_context(|| format!("Failed to stat {}", file.display()))
}

/// Base64-encode a file, writing the text to `output` when given
///
/// Returns the encoded text when no output file is given.
pub fn encode_file(file: impl AsRef<Path>, output: Option<&Path>) -> Result<Option<String>> {
    let file = file.as_ref();
    let encoded = encode_image_into_base64(file)
        .with_context(|| format!("Failed to encode {}", file.display()))?;

    match output {
        Some(output) => {
            std::fs::write(output, &encoded)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            Ok(None)
        }
        None => Ok(Some(encoded)),
    }
}

/// Decode a file holding base64 text into `output`
pub fn decode_file(payload: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    let payload = payload.as_ref();
    let output = output.as_ref();

    let encoded = std::fs::read(payload)
        .with_context(|| format!("Failed to read payload: {}", payload.display()))?;
    decode_image(&encoded, output)
        .with_context(|| format!("Failed to decode {} into {}", payload.display(), output.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("config.yaml"),
            "artifacts_root: artifacts\ntraining:\n  epochs: 5\n  optimizer: adam\n",
        )
        .unwrap();
        std::fs::write(
            temp.path().join("scores.json"),
            r#"{"loss": 0.25, "model": {"name": "vgg16"}}"#,
        )
        .unwrap();
        temp
    }

    #[test]
    fn test_show_yaml() {
        let temp = project();
        let config = temp.path().join("config.yaml");

        assert_eq!(show_yaml(&config, Some("training.optimizer")).unwrap(), "adam");
        assert_eq!(show_yaml(&config, Some("training.epochs")).unwrap(), "5");
        assert!(show_yaml(&config, None).unwrap().contains("artifacts_root: artifacts"));
        assert!(show_yaml(&config, Some("training.lr")).is_err());
    }

    #[test]
    fn test_show_json() {
        let temp = project();
        let scores = temp.path().join("scores.json");

        assert_eq!(show_json(&scores, Some("model.name")).unwrap(), "vgg16");
        assert_eq!(show_json(&scores, Some("loss")).unwrap(), "0.25");
    }

    #[test]
    fn test_make_dirs() {
        let temp = TempDir::new().unwrap();
        let dirs = vec![
            temp.path().join("a/b").display().to_string(),
            temp.path().join("c").display().to_string(),
        ];

        assert_eq!(make_dirs(&dirs, true).unwrap(), 2);
        assert!(temp.path().join("a/b").is_dir());
        assert!(make_dirs(&[], true).is_err());
    }

    #[test]
    fn test_encode_decode_files() {
        let temp = TempDir::new().unwrap();
        let image = temp.path().join("input.jpg");
        let payload = temp.path().join("input.b64");
        let restored = temp.path().join("restored.jpg");
        std::fs::write(&image, [0xFFu8, 0xD8, 0xFF, 0xE0, 0x00, 0x10]).unwrap();

        assert!(encode_file(&image, Some(&payload)).unwrap().is_none());
        decode_file(&payload, &restored).unwrap();

        assert_eq!(std::fs::read(&restored).unwrap(), std::fs::read(&image).unwrap());
        assert_eq!(encode_file(&image, None).unwrap().as_deref(), Some("/9j/4AAQ"));
    }

    #[test]
    fn test_file_size() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("weights.bin");
        std::fs::write(&file, vec![0u8; 10 * 1024]).unwrap();

        assert_eq!(file_size(&file).unwrap(), "~ 10 KB");
        assert!(file_size(temp.path().join("missing")).is_err());
    }
}
