//! `kdl sessions <file> --course <slug>` – list sessions.

use anyhow::Result;
use kdl_core::parse_sessions;
use std::path::Path;

use super::read_response;
use crate::cli::console::ConsoleDiagnostics;

pub fn run_sessions(file: &Path, course: &str) -> Result<()> {
    let text = read_response(file)?;
    let sessions = parse_sessions(&text, course, &ConsoleDiagnostics::default());
    if sessions.is_empty() {
        println!("No sessions found.");
        return Ok(());
    }
    for s in sessions {
        println!("{}\t{}\t{}", s.index, s.name, s.path);
    }
    Ok(())
}
