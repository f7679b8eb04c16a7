//! Reading and writing the JSON files a release touches.
//!
//! Output is pretty-printed with 2-space indentation and non-ASCII characters
//! written as-is, with no trailing newline. Writes overwrite the target in
//! place; there is no temp-file swap.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

use crate::error::ReleaseError;

/// Read and deserialize a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ReleaseError> {
    let bytes = std::fs::read(path).map_err(|source| ReleaseError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ReleaseError::MalformedJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Render a value the way release files are stored on disk.
pub fn to_pretty_string<T: Serialize>(value: &T) -> serde_json::Result<String> {
    // serde_json's pretty printer uses 2-space indent and only escapes
    // control characters, so CJK descriptions stay readable.
    serde_json::to_string_pretty(value)
}

/// Serialize and overwrite `path` in full.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ReleaseError> {
    let json = to_pretty_string(value).map_err(|source| ReleaseError::MalformedJson {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| ReleaseError::Write {
        path: path.to_path_buf(),
        source,
    })
}
