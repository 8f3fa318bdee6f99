//! Destination files for downloads.
//!
//! A download is never resumed mid-file: the destination is either complete
//! (its size reaches the declared length) or opened with truncation and
//! written again from the start.

mod writer;

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

pub use writer::ChunkWriter;

/// Size of `dir/filename` on disk, 0 if it does not exist.
pub fn size_on_disk(dir: &Path, filename: &str) -> Result<u64> {
    let path = dir.join(filename);
    match fs::metadata(&path) {
        Ok(meta) => Ok(meta.len()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(0),
        Err(e) => Err(e).with_context(|| format!("failed to stat {}", path.display())),
    }
}

/// Creates `dir` (recursively) and opens `dir/filename` for writing from
/// offset 0, discarding any previous content.
pub fn create_destination(dir: &Path, filename: &str, chunk_size: usize) -> Result<ChunkWriter> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))?;
    ChunkWriter::create(&dir.join(filename), chunk_size)
}
