//! Where release files live and where artifacts are downloaded from.

use std::path::{Path, PathBuf};

use crate::config::BobcastConfig;

/// Resolves artifact, manifest and metadata locations for one project root.
#[derive(Debug, Clone)]
pub struct ReleaseLayout {
    root: PathBuf,
    cfg: BobcastConfig,
}

impl ReleaseLayout {
    pub fn new(root: impl Into<PathBuf>, cfg: BobcastConfig) -> Self {
        Self {
            root: root.into(),
            cfg,
        }
    }

    pub fn config(&self) -> &BobcastConfig {
        &self.cfg
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `openai-translator-1.2.0.bobplugin` for version `1.2.0` with the default config.
    pub fn artifact_file_name(&self, version: &str) -> String {
        format!(
            "{}-{}.{}",
            self.cfg.plugin_name, version, self.cfg.artifact_extension
        )
    }

    pub fn artifact_path(&self, version: &str) -> PathBuf {
        self.root
            .join(&self.cfg.release_dir)
            .join(self.artifact_file_name(version))
    }

    /// GitHub release asset URL for the given version's artifact.
    pub fn download_url(&self, version: &str) -> String {
        format!(
            "{}/releases/download/v{}/{}",
            self.cfg.repository.trim_end_matches('/'),
            version,
            self.artifact_file_name(version)
        )
    }

    pub fn appcast_path(&self) -> PathBuf {
        self.root.join(&self.cfg.appcast_file)
    }

    pub fn info_path(&self) -> PathBuf {
        self.root.join(&self.cfg.info_file)
    }
}
