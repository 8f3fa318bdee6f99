use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::download::DEFAULT_CHUNK_SIZE;

/// Global configuration loaded from `~/.config/kdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KdlConfig {
    /// Root directory for downloads (None = current directory).
    pub download_dir: Option<PathBuf>,
    /// Video resolution to fetch, e.g. 720 selects `h264_720_url`.
    pub resolution: u32,
    /// Write granularity in bytes; also the libcurl receive buffer hint.
    pub chunk_size: usize,
    /// Seconds allowed for establishing a connection.
    pub connect_timeout_secs: u64,
    /// Upper bound in seconds for a whole transfer.
    pub timeout_secs: u64,
    /// Optional User-Agent header sent with every request.
    pub user_agent: Option<String>,
}

impl Default for KdlConfig {
    fn default() -> Self {
        Self {
            download_dir: None,
            resolution: 720,
            chunk_size: DEFAULT_CHUNK_SIZE,
            connect_timeout_secs: 30,
            timeout_secs: 3600,
            user_agent: None,
        }
    }
}

impl KdlConfig {
    /// `download_dir` if configured, else the current directory.
    pub fn download_root(&self) -> Result<PathBuf> {
        match &self.download_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("kdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<KdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = KdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: KdlConfig = toml::from_str(&data)?;
    Ok(cfg)
}
