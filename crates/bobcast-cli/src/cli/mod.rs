//! CLI for bobcast.

mod commands;

use anyhow::{bail, Result};
use bobcast_core::config::{self, BobcastConfig};
use bobcast_core::layout::ReleaseLayout;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use commands::{run_checksum, run_completions, run_man, run_release, run_versions};

/// Top-level CLI. Without a subcommand, `bobcast <version> <description>`
/// records a release.
#[derive(Debug, Parser)]
#[command(name = "bobcast", version)]
#[command(about = "Record a Bob plugin release in its appcast and info.json", long_about = None)]
#[command(args_conflicts_with_subcommands = true, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Version being released, e.g. 1.2.0.
    #[arg(value_name = "VERSION", requires = "description")]
    pub release_version: Option<String>,

    /// Release notes stored in the appcast entry.
    pub description: Option<String>,

    /// Plugin project root (defaults to the current directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file to use instead of ~/.config/bobcast/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Compute SHA-256 of a file.
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },

    /// List the versions recorded in the appcast, newest first.
    Versions,

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        match self.command {
            Some(CliCommand::Checksum { ref path }) => return run_checksum(path),
            Some(CliCommand::Completions { shell }) => return run_completions(shell),
            Some(CliCommand::Man) => return run_man(),
            _ => {}
        }

        let layout = self.layout()?;
        match (self.command, self.release_version, self.description) {
            (Some(CliCommand::Versions), _, _) => run_versions(&layout),
            (None, Some(version), Some(description)) => {
                run_release(&layout, &version, &description)
            }
            _ => bail!("expected <VERSION> <DESCRIPTION> or a subcommand"),
        }
    }

    fn load_config(&self) -> Result<BobcastConfig> {
        let cfg = match &self.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        Ok(cfg)
    }

    fn layout(&self) -> Result<ReleaseLayout> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };
        if !root.is_dir() {
            bail!("project root {} is not a directory", root.display());
        }
        Ok(ReleaseLayout::new(root, self.load_config()?))
    }
}

#[cfg(test)]
mod tests;
