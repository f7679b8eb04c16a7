//! The release command: record the new version in the appcast, then bump
//! the plugin metadata.
//!
//! The two writes are independent. If the metadata update fails, the appcast
//! entry has already been written and stays.

use anyhow::{Context, Result};

use crate::appcast::{self, VersionRecord};
use crate::layout::ReleaseLayout;
use crate::metadata::{self, PluginMetadata};

/// What a successful release changed.
#[derive(Debug, Clone)]
pub struct ReleaseOutcome {
    pub record: VersionRecord,
    pub manifest_entries: usize,
    pub previous_version: Option<String>,
}

pub fn run_release(
    layout: &ReleaseLayout,
    version: &str,
    description: &str,
) -> Result<ReleaseOutcome> {
    let appended = appcast::append_version(layout, version, description)?;

    let info_path = layout.info_path();
    if let Some(identifier) = appended.manifest.identifier() {
        warn_on_identifier_mismatch(&info_path, identifier);
    }
    let previous_version = metadata::set_metadata_version(&info_path, version)
        .with_context(|| format!("update plugin metadata {}", info_path.display()))?;

    Ok(ReleaseOutcome {
        manifest_entries: appended.manifest.versions().len(),
        record: appended.record,
        previous_version,
    })
}

/// Bob rejects updates whose appcast identifier differs from the plugin's.
fn warn_on_identifier_mismatch(info_path: &std::path::Path, appcast_identifier: &str) {
    // Load errors are reported by the metadata update itself.
    let Ok(meta) = PluginMetadata::load(info_path) else {
        return;
    };
    if let Some(id) = meta.identifier() {
        if id != appcast_identifier {
            tracing::warn!(
                "plugin identifier {:?} in {} does not match appcast identifier {:?}",
                id,
                info_path.display(),
                appcast_identifier
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appcast::AppcastManifest;
    use crate::config::BobcastConfig;
    use crate::error::ReleaseError;
    use std::fs;

    fn project(info: Option<&str>) -> (tempfile::TempDir, ReleaseLayout) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("release")).unwrap();
        if let Some(info) = info {
            fs::create_dir_all(dir.path().join("src")).unwrap();
            fs::write(dir.path().join("src/info.json"), info).unwrap();
        }
        let layout = ReleaseLayout::new(dir.path(), BobcastConfig::default());
        (dir, layout)
    }

    #[test]
    fn release_updates_both_files() {
        let (_dir, layout) = project(Some(
            r#"{"identifier": "yetone.openai.translator", "version": "1.0.0"}"#,
        ));
        fs::write(layout.artifact_path("1.1.0"), b"pkg").unwrap();

        let outcome = run_release(&layout, "1.1.0", "notes").unwrap();
        assert_eq!(outcome.record.version, "1.1.0");
        assert_eq!(outcome.manifest_entries, 1);
        assert_eq!(outcome.previous_version.as_deref(), Some("1.0.0"));

        let meta = PluginMetadata::load(&layout.info_path()).unwrap();
        assert_eq!(meta.version(), Some("1.1.0"));
    }

    #[test]
    fn metadata_failure_keeps_appcast_entry() {
        let (_dir, layout) = project(None);
        fs::write(layout.artifact_path("1.1.0"), b"pkg").unwrap();

        let err = run_release(&layout, "1.1.0", "notes").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReleaseError>(),
            Some(ReleaseError::Read { .. })
        ));
        let manifest = AppcastManifest::load(&layout.appcast_path()).unwrap().unwrap();
        assert_eq!(manifest.versions().len(), 1);
    }

    #[test]
    fn missing_artifact_touches_nothing() {
        let info = r#"{"version": "1.0.0"}"#;
        let (_dir, layout) = project(Some(info));

        let err = run_release(&layout, "1.1.0", "notes").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReleaseError>(),
            Some(ReleaseError::MissingArtifact { .. })
        ));
        assert!(!layout.appcast_path().exists());
        assert_eq!(fs::read_to_string(layout.info_path()).unwrap(), info);
    }

    #[test]
    fn identifier_mismatch_does_not_block_release() {
        let (_dir, layout) =
            project(Some(r#"{"identifier": "someone.else", "version": "1.0.0"}"#));
        fs::write(layout.artifact_path("1.1.0"), b"pkg").unwrap();
        assert!(run_release(&layout, "1.1.0", "notes").is_ok());
    }
}
