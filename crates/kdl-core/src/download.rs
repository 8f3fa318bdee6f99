//! Whole-file downloads with a size-based skip.
//!
//! A HEAD probe gives the declared size; if the destination already holds at
//! least that many bytes nothing is streamed. Otherwise the file is rewritten
//! from offset 0 in `chunk_size` pieces, with a progress update per piece.
//! Transport and disk errors propagate and leave the partial file in place;
//! the next call sees it is short and starts over.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::http::{CurlTransport, Transport};
use crate::progress::{DownloadProgress, ProgressReporter, StdoutProgress};
use crate::storage;

/// Default write granularity in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// What a call to [`Downloader::download`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The file on disk was already at least the declared size.
    Skipped { size_on_disk: u64 },
    /// The body was streamed to disk.
    Downloaded { bytes: u64 },
}

pub struct Downloader<T> {
    transport: T,
    diagnostics: Arc<dyn Diagnostics + Send + Sync>,
    chunk_size: usize,
}

impl Downloader<CurlTransport> {
    /// Downloader over libcurl with default options.
    pub fn curl() -> Self {
        Self::new(CurlTransport::default())
    }
}

impl<T: Transport> Downloader<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            diagnostics: Arc::new(TracingDiagnostics),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics + Send + Sync>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Downloads `video_url` to `target_dir/filename` unless it is already complete.
    pub fn download(
        &self,
        video_url: &str,
        target_dir: &Path,
        filename: &str,
        progress: &mut dyn ProgressReporter,
    ) -> Result<DownloadOutcome> {
        let total = self
            .transport
            .content_length(video_url)
            .with_context(|| format!("size probe for {}", filename))?;
        let on_disk = storage::size_on_disk(target_dir, filename)?;

        if on_disk >= total {
            self.diagnostics
                .info(&format!("{} already downloaded, skipping...", filename));
            return Ok(DownloadOutcome::Skipped {
                size_on_disk: on_disk,
            });
        }

        tracing::debug!(
            file = %target_dir.join(filename).display(),
            on_disk,
            total,
            "starting download"
        );

        let mut writer = storage::create_destination(target_dir, filename, self.chunk_size)?;
        let mut snapshot = DownloadProgress {
            filename: filename.to_string(),
            bytes_done: 0,
            total_bytes: total,
        };

        self.transport
            .stream(video_url, &mut |data: &[u8]| {
                writer.write(data, |done| {
                    snapshot.bytes_done = done;
                    progress.update(&snapshot);
                })
            })
            .with_context(|| format!("downloading {}", filename))?;

        let bytes = writer.finish()?;
        snapshot.bytes_done = bytes;
        progress.finish(&snapshot);

        if bytes != total {
            tracing::warn!(
                "{}: wrote {} bytes but server declared {}",
                filename,
                bytes,
                total
            );
        }
        Ok(DownloadOutcome::Downloaded { bytes })
    }
}

/// Downloads with libcurl, stdout progress and `tracing` diagnostics.
pub fn download(
    video_url: &str,
    target_dir: &Path,
    filename: &str,
    chunk_size: usize,
) -> Result<DownloadOutcome> {
    Downloader::curl()
        .with_chunk_size(chunk_size)
        .download(video_url, target_dir, filename, &mut StdoutProgress)
}
