//! Appcast manifest: the release list Bob polls for plugin updates.
//!
//! An existing manifest is handled as an ordered JSON object. The only shape
//! it must have is a `versions` array; entries already in it are never
//! reinterpreted, and every other key keeps its value and position.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use crate::checksum;
use crate::error::ReleaseError;
use crate::json_io;
use crate::layout::ReleaseLayout;

/// One published plugin version, as written for a new release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub version: String,
    #[serde(rename = "desc")]
    pub description: String,
    /// Lowercase hex SHA-256 of the artifact.
    pub sha256: String,
    #[serde(rename = "url")]
    pub download_url: String,
    #[serde(
        rename = "minBobVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub min_host_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppcastManifest {
    fields: Map<String, Value>,
}

impl AppcastManifest {
    /// Manifest for a project that has never been released.
    pub fn new(identifier: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("identifier".to_string(), Value::String(identifier.into()));
        fields.insert("versions".to_string(), Value::Array(Vec::new()));
        Self { fields }
    }

    fn from_value(path: &Path, value: Value) -> Result<Self, ReleaseError> {
        match value {
            Value::Object(fields) if fields.get("versions").is_some_and(Value::is_array) => {
                Ok(Self { fields })
            }
            _ => Err(ReleaseError::AppcastShape {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        self.fields.get("identifier").and_then(Value::as_str)
    }

    /// Entries newest first, exactly as stored.
    pub fn versions(&self) -> &[Value] {
        match self.fields.get("versions") {
            Some(Value::Array(entries)) => entries.as_slice(),
            _ => &[],
        }
    }

    /// Insert at the head of the list. Versions are not deduplicated.
    pub fn push_front(&mut self, record: &VersionRecord) -> serde_json::Result<()> {
        let value = serde_json::to_value(record)?;
        match self.fields.get_mut("versions") {
            Some(Value::Array(entries)) => entries.insert(0, value),
            _ => {
                self.fields
                    .insert("versions".to_string(), Value::Array(vec![value]));
            }
        }
        Ok(())
    }

    /// Load the manifest at `path`, or `None` if there is no file yet.
    pub fn load(path: &Path) -> Result<Option<Self>, ReleaseError> {
        if !path.is_file() {
            return Ok(None);
        }
        let value: Value = json_io::read_json(path)?;
        Self::from_value(path, value).map(Some)
    }

    /// Load the manifest at `path`, or start an empty one with `identifier`.
    pub fn load_or_new(path: &Path, identifier: &str) -> Result<Self, ReleaseError> {
        match Self::load(path)? {
            Some(manifest) => {
                tracing::debug!(
                    "loaded appcast {} ({} entries)",
                    path.display(),
                    manifest.versions().len()
                );
                Ok(manifest)
            }
            None => {
                tracing::info!(
                    "no appcast at {}, starting new manifest for {}",
                    path.display(),
                    identifier
                );
                Ok(Self::new(identifier))
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ReleaseError> {
        json_io::write_json(path, &self.fields)
    }
}

/// Result of [`append_version`].
#[derive(Debug, Clone)]
pub struct AppendOutcome {
    pub record: VersionRecord,
    pub manifest: AppcastManifest,
}

/// Build the record for `version`, hashing its artifact. Fails with
/// [`ReleaseError::MissingArtifact`] if the package has not been built.
pub fn build_record(
    layout: &ReleaseLayout,
    version: &str,
    description: &str,
) -> Result<VersionRecord> {
    let artifact = layout.artifact_path(version);
    if !artifact.is_file() {
        return Err(ReleaseError::MissingArtifact { path: artifact }.into());
    }
    let sha256 = checksum::sha256_path(&artifact)?;
    tracing::info!("artifact {} sha256={}", artifact.display(), sha256);

    Ok(VersionRecord {
        version: version.to_string(),
        description: description.to_string(),
        sha256,
        download_url: layout.download_url(version),
        min_host_version: Some(layout.config().min_bob_version.clone()),
    })
}

/// Prepend a record for `version` to the project's appcast and rewrite it.
///
/// Nothing is written if the artifact is missing.
pub fn append_version(
    layout: &ReleaseLayout,
    version: &str,
    description: &str,
) -> Result<AppendOutcome> {
    let record = build_record(layout, version, description)?;

    let path = layout.appcast_path();
    let mut manifest = AppcastManifest::load_or_new(&path, &layout.config().identifier)?;
    manifest
        .push_front(&record)
        .with_context(|| format!("encode appcast entry for {version}"))?;
    manifest
        .save(&path)
        .with_context(|| format!("update appcast for {version}"))?;

    tracing::info!(
        "appcast {} now lists {} version(s), latest {}",
        path.display(),
        manifest.versions().len(),
        version
    );
    Ok(AppendOutcome { record, manifest })
}
