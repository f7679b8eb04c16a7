//! Error kinds surfaced by the release operations.
//!
//! Operations return `anyhow::Result`; these are the root causes callers can
//! recover with `downcast_ref::<ReleaseError>()`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ReleaseError {
    /// The packaged plugin for the requested version was not built.
    #[error("release file does not exist: {}", .path.display())]
    MissingArtifact { path: PathBuf },

    #[error("read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exists but is not valid JSON.
    #[error("malformed JSON in {}", .path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Anything other than an object with a `versions` array.
    #[error("appcast {} is not a JSON object with a `versions` list", .path.display())]
    AppcastShape { path: PathBuf },

    /// Metadata must be a JSON object so `version` can be set on it.
    #[error("metadata {} is not a JSON object", .path.display())]
    MetadataNotObject { path: PathBuf },
}
