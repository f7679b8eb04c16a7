//! `bobcast checksum <path>`: compute SHA-256 of a file.

use anyhow::Result;
use bobcast_core::checksum;
use std::io::{self, Write};
use std::path::Path;

/// Compute and print SHA-256 of the given file.
pub fn run_checksum(path: &Path) -> Result<()> {
    write_checksum(&mut io::stdout().lock(), path)
}

/// One `sha256sum`-style line: `<digest>  <path>`.
pub fn write_checksum(out: &mut impl Write, path: &Path) -> Result<()> {
    let digest = checksum::sha256_path(path)?;
    writeln!(out, "{}  {}", digest, path.display())?;
    Ok(())
}
