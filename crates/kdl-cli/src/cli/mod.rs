//! CLI for the KDL course video downloader.
//!
//! Works on saved API responses: fetching them needs an authenticated
//! session, which is out of this tool's hands.

mod commands;
mod console;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use kdl_core::config;
use kdl_core::naming::slugify;
use kdl_core::Session;
use std::path::PathBuf;

use commands::{run_courses, run_download, run_fetch, run_sessions, run_videos};

/// Top-level CLI for the KDL course video downloader.
#[derive(Debug, Parser)]
#[command(name = "kdl")]
#[command(about = "KDL: download course videos from saved API responses", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Identifies the session a videos response belongs to.
#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Course slug (see `kdl courses`).
    #[arg(long)]
    pub course: String,
    /// Session order index.
    #[arg(long, default_value = "0")]
    pub session_index: i64,
    /// Session title or slug; slugified before use.
    #[arg(long)]
    pub session_name: String,
    /// Session path as returned by the sessions endpoint.
    #[arg(long, default_value = "")]
    pub session_path: String,
}

impl SessionArgs {
    pub fn to_session(&self) -> Session {
        Session::new(
            self.course.clone(),
            self.session_index,
            slugify(&self.session_name),
            self.session_path.clone(),
        )
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List course slugs from a saved courses response.
    Courses {
        /// Path to the JSON response body.
        file: PathBuf,
    },

    /// List sessions from a saved sessions response.
    Sessions {
        /// Path to the JSON response body.
        file: PathBuf,
        /// Course slug the sessions belong to.
        #[arg(long)]
        course: String,
    },

    /// List videos from a saved videos response.
    Videos {
        /// Path to the JSON response body.
        file: PathBuf,
        #[command(flatten)]
        session: SessionArgs,
        /// Video resolution (default from config).
        #[arg(long)]
        resolution: Option<u32>,
    },

    /// Download every video listed in a saved videos response.
    Download {
        /// Path to the JSON response body.
        file: PathBuf,
        #[command(flatten)]
        session: SessionArgs,
        /// Video resolution (default from config).
        #[arg(long)]
        resolution: Option<u32>,
        /// Download root (default from config, else current directory).
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Download a single video URL.
    Fetch {
        /// CDN video URL (`.../file/<name>.mp4?...`).
        url: String,
        /// Video title; names the file `<resolution>p_<slug>.<ext>`.
        #[arg(long)]
        title: Option<String>,
        /// Target directory (default from config, else current directory).
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Courses { file } => run_courses(&file)?,
            CliCommand::Sessions { file, course } => run_sessions(&file, &course)?,
            CliCommand::Videos {
                file,
                session,
                resolution,
            } => {
                let resolution = resolution.unwrap_or(cfg.resolution);
                run_videos(&file, &session.to_session(), resolution)?;
            }
            CliCommand::Download {
                file,
                session,
                resolution,
                dir,
            } => {
                let resolution = resolution.unwrap_or(cfg.resolution);
                let root = match dir {
                    Some(d) => d,
                    None => cfg.download_root()?,
                };
                run_download(&cfg, &file, &session.to_session(), resolution, &root)?;
            }
            CliCommand::Fetch { url, title, dir } => {
                let dir = match dir {
                    Some(d) => d,
                    None => cfg.download_root()?,
                };
                run_fetch(&cfg, &url, title.as_deref(), &dir)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
