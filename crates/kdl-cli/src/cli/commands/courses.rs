//! `kdl courses <file>` – list course slugs.

use anyhow::Result;
use kdl_core::parse_courses;
use std::path::Path;

use super::read_response;
use crate::cli::console::ConsoleDiagnostics;

pub fn run_courses(file: &Path) -> Result<()> {
    let text = read_response(file)?;
    for course in parse_courses(&text, &ConsoleDiagnostics::default()) {
        println!("{}", course);
    }
    Ok(())
}
