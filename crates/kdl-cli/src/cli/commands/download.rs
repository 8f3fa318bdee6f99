//! `kdl download <file> ...` – download all videos of one session.

use anyhow::Result;
use kdl_core::config::KdlConfig;
use kdl_core::http::{CurlOptions, CurlTransport, Transport};
use kdl_core::progress::{ProgressReporter, StdoutProgress};
use kdl_core::{
    derive_video_title, extract_filename, parse_videos, Diagnostics, DownloadOutcome, Downloader,
    Session, Video,
};
use std::path::Path;
use std::sync::Arc;

use super::read_response;
use crate::cli::console::ConsoleDiagnostics;

/// Videos land in `<root>/<course>/<index>-<session name>/`.
pub fn run_download(
    cfg: &KdlConfig,
    file: &Path,
    session: &Session,
    resolution: u32,
    root: &Path,
) -> Result<()> {
    let text = read_response(file)?;
    let diag = Arc::new(ConsoleDiagnostics::default());
    let videos = parse_videos(&text, resolution, session, &*diag);
    if videos.is_empty() {
        println!("No videos found.");
        return Ok(());
    }

    let target = root.join(&session.course).join(session.directory_name());
    let downloader = Downloader::new(CurlTransport::new(CurlOptions::from(cfg)))
        .with_chunk_size(cfg.chunk_size)
        .with_diagnostics(diag.clone());

    let tally = download_videos(&downloader, &videos, &target, &*diag, &mut StdoutProgress);
    tracing::info!(
        "session {} complete: {} downloaded, {} already present, {} failed",
        session.directory_name(),
        tally.downloaded,
        tally.skipped,
        tally.failed
    );
    if tally.failed > 0 {
        anyhow::bail!("{} of {} videos failed", tally.failed, videos.len());
    }
    Ok(())
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct SessionTally {
    downloaded: usize,
    skipped: usize,
    failed: usize,
}

/// Downloads every video in order. A failed video is reported as an
/// exception and the rest are still attempted.
fn download_videos<T: Transport>(
    downloader: &Downloader<T>,
    videos: &[Video],
    target: &Path,
    diag: &dyn Diagnostics,
    progress: &mut dyn ProgressReporter,
) -> SessionTally {
    let mut tally = SessionTally::default();
    for video in videos {
        match download_video(downloader, video, target, progress) {
            Ok(DownloadOutcome::Downloaded { .. }) => tally.downloaded += 1,
            Ok(DownloadOutcome::Skipped { .. }) => tally.skipped += 1,
            Err(e) => {
                diag.exception(&format!("{}: {:#}", video.title, e));
                tally.failed += 1;
            }
        }
    }
    tally
}

fn download_video<T: Transport>(
    downloader: &Downloader<T>,
    video: &Video,
    target: &Path,
    progress: &mut dyn ProgressReporter,
) -> Result<DownloadOutcome> {
    let filename = extract_filename(&video.url)?;
    let title = derive_video_title(&video.title, &filename);
    let outcome = downloader.download(&video.url, target, &title, progress)?;
    if let DownloadOutcome::Downloaded { bytes } = outcome {
        tracing::info!(file = %title, bytes, "downloaded");
    }
    Ok(outcome)
}
