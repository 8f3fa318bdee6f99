//! Diagnostics for interactive use: visible on the terminal and in the log.

use kdl_core::{Diagnostics, TracingDiagnostics};

/// Prints info lines to stdout and problems to stderr, then forwards to `tracing`.
#[derive(Debug, Default)]
pub struct ConsoleDiagnostics {
    log: TracingDiagnostics,
}

impl Diagnostics for ConsoleDiagnostics {
    fn info(&self, message: &str) {
        println!("{}", message);
        self.log.info(message);
    }

    fn warning(&self, message: &str) {
        eprintln!("warning: {}", message);
        self.log.warning(message);
    }

    fn exception(&self, message: &str) {
        eprintln!("error: {}", message);
        self.log.exception(message);
    }
}
