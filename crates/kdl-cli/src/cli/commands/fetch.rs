//! `kdl fetch <url>` – download one video URL.

use anyhow::Result;
use kdl_core::config::KdlConfig;
use kdl_core::http::{CurlOptions, CurlTransport};
use kdl_core::progress::StdoutProgress;
use kdl_core::{derive_video_title, extract_filename, Downloader};
use std::path::Path;
use std::sync::Arc;

use crate::cli::console::ConsoleDiagnostics;

pub fn run_fetch(cfg: &KdlConfig, url: &str, title: Option<&str>, dir: &Path) -> Result<()> {
    let filename = extract_filename(url)?;
    let filename = match title {
        Some(t) => derive_video_title(t, &filename),
        None => filename,
    };

    let downloader = Downloader::new(CurlTransport::new(CurlOptions::from(cfg)))
        .with_chunk_size(cfg.chunk_size)
        .with_diagnostics(Arc::new(ConsoleDiagnostics::default()));
    downloader.download(url, dir, &filename, &mut StdoutProgress)?;
    Ok(())
}
