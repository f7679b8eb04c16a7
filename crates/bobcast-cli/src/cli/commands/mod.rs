//! CLI command handlers, one per file.

pub(super) mod checksum;
mod completions;
mod release;
pub(super) mod versions;

pub use checksum::run_checksum;
pub use completions::{run_completions, run_man};
pub use release::run_release;
pub use versions::run_versions;
