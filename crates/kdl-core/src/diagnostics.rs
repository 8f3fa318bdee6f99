//! Injected logging capability for parsers and the downloader.
//!
//! Components take a `&dyn Diagnostics` instead of reaching for a global
//! logger; the application decides where lines go. `TracingDiagnostics`
//! forwards to `tracing`, `RecordingDiagnostics` keeps them in memory.

use std::sync::Mutex;

/// Severity of a recorded diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Exception,
}

pub trait Diagnostics {
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    /// An error that was caught and recovered from (partial results follow).
    fn exception(&self, message: &str);
}

/// Forwards diagnostics to `tracing` under the `kdl` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn info(&self, message: &str) {
        tracing::info!(target: "kdl", "{}", message);
    }

    fn warning(&self, message: &str) {
        tracing::warn!(target: "kdl", "{}", message);
    }

    fn exception(&self, message: &str) {
        tracing::error!(target: "kdl", "{}", message);
    }
}

/// Keeps every diagnostic in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    entries: Mutex<Vec<(Level, String)>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded entries.
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.lock().clone()
    }

    /// Number of entries recorded at `level`.
    pub fn count(&self, level: Level) -> usize {
        self.lock().iter().filter(|(l, _)| *l == level).count()
    }

    fn push(&self, level: Level, message: &str) {
        self.lock().push((level, message.to_string()));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Level, String)>> {
        // A poisoned lock only means a panicking writer; the Vec is still usable.
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warning(&self, message: &str) {
        self.push(Level::Warning, message);
    }

    fn exception(&self, message: &str) {
        self.push(Level::Exception, message);
    }
}
