//! Sequential writer that splits incoming buffers into fixed-size chunks.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes a download body front to back, one chunk at a time.
pub struct ChunkWriter {
    file: BufWriter<File>,
    path: PathBuf,
    chunk_size: usize,
    written: u64,
}

impl ChunkWriter {
    /// Create (or truncate) `path`. A `chunk_size` of 0 is treated as 1.
    pub fn create(path: &Path, chunk_size: usize) -> Result<Self> {
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let chunk_size = chunk_size.max(1);
        Ok(Self {
            file: BufWriter::with_capacity(chunk_size, file),
            path: path.to_path_buf(),
            chunk_size,
            written: 0,
        })
    }

    /// Writes `data` in pieces of at most `chunk_size` bytes, calling
    /// `on_chunk` with the running total after each piece.
    pub fn write(&mut self, data: &[u8], mut on_chunk: impl FnMut(u64)) -> Result<()> {
        for chunk in data.chunks(self.chunk_size) {
            self.file
                .write_all(chunk)
                .with_context(|| format!("failed to write {}", self.path.display()))?;
            self.written += chunk.len() as u64;
            on_chunk(self.written);
        }
        Ok(())
    }

    /// Flushes buffered data and closes the file. Returns the bytes written.
    pub fn finish(mut self) -> Result<u64> {
        self.file
            .flush()
            .with_context(|| format!("failed to flush {}", self.path.display()))?;
        Ok(self.written)
    }
}
