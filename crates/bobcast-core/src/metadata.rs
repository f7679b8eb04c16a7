//! Plugin metadata (`info.json`) version bump.

use anyhow::Result;
use serde_json::{Map, Value};
use std::path::Path;

use crate::error::ReleaseError;
use crate::json_io;

/// Parsed `info.json`. Only `version` and `identifier` are interpreted;
/// everything else is kept verbatim, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginMetadata {
    fields: Map<String, Value>,
}

impl PluginMetadata {
    pub fn load(path: &Path) -> Result<Self, ReleaseError> {
        match json_io::read_json::<Value>(path)? {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(ReleaseError::MetadataNotObject {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn version(&self) -> Option<&str> {
        self.fields.get("version").and_then(Value::as_str)
    }

    pub fn identifier(&self) -> Option<&str> {
        self.fields.get("identifier").and_then(Value::as_str)
    }

    /// Set `version`, returning the previous value if it was a string.
    /// An existing key keeps its position.
    pub fn set_version(&mut self, version: &str) -> Option<String> {
        let prev = self.version().map(str::to_string);
        self.fields
            .insert("version".to_string(), Value::String(version.to_string()));
        prev
    }

    pub fn save(&self, path: &Path) -> Result<(), ReleaseError> {
        json_io::write_json(path, &self.fields)
    }
}

/// Rewrite the metadata file at `path` with `version`. The file must exist.
/// Returns the previous version, if any.
pub fn set_metadata_version(path: &Path, version: &str) -> Result<Option<String>> {
    let mut meta = PluginMetadata::load(path)?;
    let prev = meta.set_version(version);
    meta.save(path)?;
    tracing::info!(
        "{}: version {} -> {}",
        path.display(),
        prev.as_deref().unwrap_or("<unset>"),
        version
    );
    Ok(prev)
}
