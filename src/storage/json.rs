//! JSON record persistence

use super::validate::ensure_path;
use crate::config_box::ConfigBox;
use crate::error::{Error, Result, kind_of};
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Save a mapping as a JSON file, replacing whatever was there
///
/// `data` is converted to a JSON value before the file is opened. Anything
/// that does not serialize to an object is rejected with
/// [`Error::TypeMismatch`] and leaves the filesystem untouched.
///
/// # Example
///
/// ```no_run
/// use artifact_io::storage::save_json;
/// use serde_json::json;
///
/// save_json("scores.json", &json!({"loss": 0.21, "accuracy": 0.93})).unwrap();
/// ```
pub fn save_json<T>(path: impl AsRef<Path>, data: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    ensure_path("path", path)?;

    let value = serde_json::to_value(data).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if !value.is_object() {
        return Err(Error::type_mismatch("data", "mapping", kind_of(&value)));
    }

    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &value).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|e| Error::io(path, e))?;

    log::info!("json file saved at: {}", path.display());
    Ok(())
}

/// Load a JSON file whose top level is an object
pub fn load_json(path: impl AsRef<Path>) -> Result<ConfigBox> {
    let path = path.as_ref();
    ensure_path("path", path)?;

    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let value: Value =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let record = match value {
        Value::Object(map) => ConfigBox::from(map),
        other => {
            return Err(Error::NotAMapping {
                path: path.to_path_buf(),
                found: kind_of(&other),
            });
        }
    };

    log::info!("json file loaded successfully from: {}", path.display());
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_save_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scores.json");

        let scores = json!({
            "loss": 0.5421,
            "accuracy": 0.8125,
            "per_class": {"normal": 0.9, "tumor": 0.71},
            "epochs": [1, 2, 3]
        });
        save_json(&path, &scores).unwrap();

        let loaded = load_json(&path).unwrap();
        assert_eq!(loaded.into_value(), scores);
    }

    #[test]
    fn test_save_struct_and_map() {
        #[derive(Serialize)]
        struct Metrics {
            loss: f64,
            accuracy: f64,
        }

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("metrics.json");
        save_json(
            &path,
            &Metrics {
                loss: 0.25,
                accuracy: 0.75,
            },
        )
        .unwrap();
        assert_eq!(load_json(&path).unwrap()["accuracy"], json!(0.75));

        let mut counts = BTreeMap::new();
        counts.insert("train", 120);
        counts.insert("valid", 30);
        save_json(&path, &counts).unwrap();

        let loaded = load_json(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert!(!loaded.contains_key("accuracy"));
    }

    #[test]
    fn test_non_mapping_rejected_before_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("list.json");

        let err = save_json(&path, &vec![1, 2, 3]).unwrap_err();

        assert!(matches!(
            err,
            Error::TypeMismatch { found, .. } if found == "sequence"
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_empty_object_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.json");

        save_json(&path, &json!({})).unwrap();
        assert!(load_json(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_array_is_not_a_mapping() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("array.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        let err = load_json(&path).unwrap_err();
        assert!(matches!(err, Error::NotAMapping { .. }));
    }

    #[test]
    fn test_floats_round_trip_exactly() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("losses.json");

        let loss = json!({"loss": 0.12380291634108463});
        save_json(&path, &loss).unwrap();
        assert_eq!(load_json(&path).unwrap().into_value(), loss);

        let curve: Vec<f64> = (1..20_000).map(|i| (i as f64).ln() / 13.0).collect();
        save_json(&path, &json!({ "curve": &curve })).unwrap();

        let loaded: Vec<f64> = load_json(&path).unwrap().get_as("curve").unwrap();
        assert_eq!(loaded.len(), curve.len());
        for (got, want) in loaded.iter().zip(&curve) {
            assert_eq!(got.to_bits(), want.to_bits(), "{} came back as {}", want, got);
        }
    }

    #[test]
    fn test_load_malformed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{\"loss\": ").unwrap();

        let err = load_json(&path).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }
}
