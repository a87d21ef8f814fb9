//! Artifact I/O
//!
//! Load and save the files a machine-learning pipeline passes between
//! stages: YAML configuration, JSON metrics, binary model objects and
//! base64 image payloads.
//!
//! Successful operations report through the [`log`] facade at `info` level;
//! install any logger to see them.

pub mod cli;
pub mod config_box;
pub mod error;
pub mod storage;

// Re-exports for convenience
pub use config_box::ConfigBox;
pub use error::{Error, Result};
pub use storage::{
    create_directories, decode_image, encode_image_into_base64, get_size, load_bin, load_json,
    read_yaml, save_bin, save_json,
};
