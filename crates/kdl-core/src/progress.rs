//! Transfer progress for a single file.
//!
//! The downloader emits a [`DownloadProgress`] after every chunk written and
//! once more when the body is complete. How that is shown is up to the
//! [`ProgressReporter`]; [`StdoutProgress`] rewrites one terminal line.

use std::io::Write;

const MIB: f64 = 1_048_576.0;

/// Snapshot of one file's transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadProgress {
    pub filename: String,
    /// Bytes actually written so far.
    pub bytes_done: u64,
    /// Declared size from the HEAD probe.
    pub total_bytes: u64,
}

impl DownloadProgress {
    /// Fraction complete in [0.0, 1.0].
    pub fn fraction(&self) -> f64 {
        if self.total_bytes == 0 {
            return 1.0;
        }
        (self.bytes_done as f64 / self.total_bytes as f64).min(1.0)
    }

    /// `"\r<filename>: 42.0% (1.2 / 3.0 MiB)"`, without a trailing newline.
    pub fn render(&self) -> String {
        format!(
            "\r{}: {:.1}% ({:.1} / {:.1} MiB)",
            self.filename,
            self.fraction() * 100.0,
            self.bytes_done as f64 / MIB,
            self.total_bytes as f64 / MIB
        )
    }
}

pub trait ProgressReporter {
    /// Called after each chunk is written.
    fn update(&mut self, progress: &DownloadProgress);
    /// Called once after the last chunk.
    fn finish(&mut self, progress: &DownloadProgress);
}

/// Rewrites a single stdout line per update; a newline ends it on finish.
#[derive(Debug, Default)]
pub struct StdoutProgress;

impl ProgressReporter for StdoutProgress {
    fn update(&mut self, progress: &DownloadProgress) {
        let mut out = std::io::stdout().lock();
        let _ = write!(out, "{}", progress.render());
        let _ = out.flush();
    }

    fn finish(&mut self, progress: &DownloadProgress) {
        println!("{}", progress.render());
    }
}

/// Discards all updates.
#[derive(Debug, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn update(&mut self, _progress: &DownloadProgress) {}
    fn finish(&mut self, _progress: &DownloadProgress) {}
}
