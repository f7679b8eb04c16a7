//! Release log for `bobcast`.
//!
//! A release prints nothing on success, so the log file is where a maintainer
//! looks afterwards to see which digest and URL were recorded.
//! Events go to `~/.local/state/bobcast/bobcast.log`. `RUST_LOG` overrides
//! the default filter.

use anyhow::{anyhow, Result};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,bobcast=debug,bobcast_core=debug";

/// Per-event sink: the release log, or stderr if its handle could not be duplicated.
enum LogSink {
    File(File),
    Stderr,
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

/// Hands every event a clone of the appended-to release log.
struct ReleaseLog(File);

impl<'a> MakeWriter<'a> for ReleaseLog {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogSink::File)
            .unwrap_or(LogSink::Stderr)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn release_log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bobcast")?;
    let dir = xdg_dirs.get_state_home().join("bobcast");
    fs::create_dir_all(&dir)?;
    Ok(dir.join("bobcast.log"))
}

/// Send release events to the state-dir log file.
/// Errors leave no subscriber installed; the binary then calls [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = release_log_path()?;
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(ReleaseLog(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install log subscriber: {e}"))?;

    tracing::debug!("release log at {}", path.display());
    Ok(())
}

/// Stderr-only logging for hosts without a usable state dir.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
