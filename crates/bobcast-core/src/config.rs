use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Release settings loaded from `~/.config/bobcast/config.toml`.
///
/// Every field has a default, so a partial file only overrides what it names.
/// Relative paths are resolved against the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BobcastConfig {
    /// Artifact base name; packages are `<plugin_name>-<version>.<artifact_extension>`.
    pub plugin_name: String,
    /// Appcast identifier used when the manifest does not exist yet.
    pub identifier: String,
    /// Repository whose GitHub releases host the artifacts.
    pub repository: String,
    /// Minimum Bob version recorded on each new entry.
    pub min_bob_version: String,
    /// Directory holding built artifacts.
    pub release_dir: PathBuf,
    pub artifact_extension: String,
    pub appcast_file: PathBuf,
    /// Plugin metadata whose `version` field is bumped.
    pub info_file: PathBuf,
}

impl Default for BobcastConfig {
    fn default() -> Self {
        Self {
            plugin_name: "openai-translator".to_string(),
            identifier: "yetone.openai.translator".to_string(),
            repository: "https://github.com/yetone/bob-plugin-openai-translator".to_string(),
            min_bob_version: "0.5.0".to_string(),
            release_dir: PathBuf::from("release"),
            artifact_extension: "bobplugin".to_string(),
            appcast_file: PathBuf::from("appcast.json"),
            info_file: PathBuf::from("src/info.json"),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bobcast")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BobcastConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = BobcastConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit file. The file must exist.
pub fn load_from_path(path: &Path) -> Result<BobcastConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: BobcastConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
