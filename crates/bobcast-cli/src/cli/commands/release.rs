//! `bobcast <version> <description>`: record a release.

use anyhow::Result;
use bobcast_core::layout::ReleaseLayout;
use bobcast_core::release;

/// Silent on success; the outcome goes to the log only.
pub fn run_release(layout: &ReleaseLayout, version: &str, description: &str) -> Result<()> {
    let outcome = release::run_release(layout, version, description)?;
    tracing::info!(
        "released {} (sha256={}, {} appcast entries, info.json was {})",
        outcome.record.version,
        outcome.record.sha256,
        outcome.manifest_entries,
        outcome.previous_version.as_deref().unwrap_or("<unset>")
    );
    Ok(())
}
