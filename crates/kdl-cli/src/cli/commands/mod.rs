//! CLI command handlers, one per file.

mod courses;
mod download;
mod fetch;
mod sessions;
mod videos;

pub use courses::run_courses;
pub use download::run_download;
pub use fetch::run_fetch;
pub use sessions::run_sessions;
pub use videos::run_videos;

use anyhow::{Context, Result};
use std::path::Path;

/// Reads a saved API response body.
fn read_response(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
