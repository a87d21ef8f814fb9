//! Error taxonomy for artifact I/O
//!
//! Every failure is surfaced to the caller. Serialization errors are kept as
//! the `source()` of the variant that wraps them, so callers can downcast to
//! the underlying `serde_yaml`, `serde_json`, `bincode` or `base64` error.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The document parsed to nothing (empty file, `null`, or `{}`)
    #[error("document is empty: {}", path.display())]
    EmptyDocument { path: PathBuf },

    /// The document parsed, but its top level is not a mapping
    #[error("expected a mapping at the top of {}, found {found}", path.display())]
    NotAMapping { path: PathBuf, found: &'static str },

    /// An argument or field failed its declared type contract
    #[error("`{argument}` expected {expected}, found {found}")]
    TypeMismatch {
        argument: String,
        expected: &'static str,
        found: String,
    },

    #[error("no such file or directory: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse YAML: {}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("JSON error on {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("binary codec error on {}", path.display())]
    Binary {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },

    /// JSON has no representation for `.inf` or `.nan`
    #[error("non-finite number at `{key}` in {}", path.display())]
    NonFiniteNumber { path: PathBuf, key: String },

    #[error("invalid base64 payload for {}", path.display())]
    Base64 {
        path: PathBuf,
        #[source]
        source: base64::DecodeError,
    },
}

impl Error {
    /// Classify an `io::Error` raised while touching `path`
    pub(crate) fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    pub(crate) fn type_mismatch(
        argument: impl Into<String>,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            argument: argument.into(),
            expected,
            found: found.into(),
        }
    }

    /// Whether this error means the path did not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Short name of a JSON value's kind, for error messages
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
