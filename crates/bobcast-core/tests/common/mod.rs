//! Scratch plugin project used by the release integration tests.

use bobcast_core::config::BobcastConfig;
use bobcast_core::layout::ReleaseLayout;
use std::fs;
use tempfile::TempDir;

pub const INFO_JSON: &str = r#"{
  "identifier": "yetone.openai.translator",
  "version": "1.1.0",
  "category": "translate",
  "name": "OpenAI Translator",
  "summary": "基于 ChatGPT API 的文本翻译",
  "author": "yetone",
  "homepage": "https://github.com/yetone/bob-plugin-openai-translator",
  "appcast": "https://raw.githubusercontent.com/yetone/bob-plugin-openai-translator/main/appcast.json",
  "minBobVersion": "0.5.0"
}"#;

pub struct Project {
    pub dir: TempDir,
    pub layout: ReleaseLayout,
}

impl Project {
    /// Project with `src/info.json` and an empty `release/` directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("release")).unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/info.json"), INFO_JSON).unwrap();
        let layout = ReleaseLayout::new(dir.path(), BobcastConfig::default());
        Self { dir, layout }
    }

    pub fn build_artifact(&self, version: &str, body: &[u8]) {
        fs::write(self.layout.artifact_path(version), body).unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }
}
