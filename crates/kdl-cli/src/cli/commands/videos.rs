//! `kdl videos <file> ...` – list videos of one session.

use anyhow::Result;
use kdl_core::{parse_videos, Session};
use std::path::Path;

use super::read_response;
use crate::cli::console::ConsoleDiagnostics;

pub fn run_videos(file: &Path, session: &Session, resolution: u32) -> Result<()> {
    let text = read_response(file)?;
    let videos = parse_videos(&text, resolution, session, &ConsoleDiagnostics::default());
    if videos.is_empty() {
        println!("No videos found.");
        return Ok(());
    }
    for v in videos {
        println!("{}\t{}\t{}", v.index, v.title, v.url);
    }
    Ok(())
}
