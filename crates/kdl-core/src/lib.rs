//! Course video downloader core.
//!
//! Parses the course platform's JSON responses into [`model`] records,
//! derives local filenames ([`naming`]) and downloads videos with a
//! whole-file size check ([`download`]).

pub mod config;
pub mod diagnostics;
pub mod download;
pub mod http;
pub mod logging;
pub mod model;
pub mod naming;
pub mod parse;
pub mod progress;
pub mod storage;

pub use diagnostics::{Diagnostics, RecordingDiagnostics, TracingDiagnostics};
pub use download::{download, DownloadOutcome, Downloader};
pub use model::{format_course, Session, Video};
pub use naming::{derive_video_title, extract_filename};
pub use parse::{parse_courses, parse_sessions, parse_videos};
