//! File system artifact operations
//!
//! This module handles all artifact I/O:
//! - YAML configuration loading
//! - JSON record saving and loading
//! - Binary artifact saving and loading
//! - Directory provisioning
//! - File size reporting
//! - Base64 image encoding and decoding
//!
//! Every function is synchronous, opens at most one file, and closes it
//! before returning on both the success and the error path.

mod binary;
mod directory;
mod image;
mod json;
mod size;
mod validate;
mod yaml;

pub use binary::{load_bin, save_bin};
pub use directory::create_directories;
pub use image::{decode_image, encode_image_into_base64};
pub use json::{load_json, save_json};
pub use size::{get_size, size_in_kb};
pub use yaml::read_yaml;
