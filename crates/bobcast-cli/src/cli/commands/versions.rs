//! `bobcast versions`: list appcast entries.

use anyhow::Result;
use bobcast_core::appcast::AppcastManifest;
use bobcast_core::layout::ReleaseLayout;
use serde_json::Value;
use std::io::{self, Write};

pub fn run_versions(layout: &ReleaseLayout) -> Result<()> {
    write_versions(&mut io::stdout().lock(), layout)
}

/// `<version>  <sha256>  <url>` per entry, in stored (newest first) order.
/// A missing appcast lists as empty. Fields that are absent or not strings
/// print as `-`.
pub fn write_versions(out: &mut impl Write, layout: &ReleaseLayout) -> Result<()> {
    let Some(manifest) = AppcastManifest::load(&layout.appcast_path())? else {
        return Ok(());
    };
    for entry in manifest.versions() {
        writeln!(
            out,
            "{}  {}  {}",
            field(entry, "version"),
            field(entry, "sha256"),
            field(entry, "url")
        )?;
    }
    Ok(())
}

fn field<'a>(entry: &'a Value, key: &str) -> &'a str {
    entry.get(key).and_then(Value::as_str).unwrap_or("-")
}
