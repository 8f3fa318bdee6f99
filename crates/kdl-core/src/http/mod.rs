//! HTTP access used by the downloader.
//!
//! The downloader only needs two things from the network: the declared size
//! of a resource and its body as a stream of buffers. [`Transport`] captures
//! that; [`CurlTransport`] implements it with blocking libcurl easy handles.

mod get;
mod head;

use anyhow::{Context, Result};
use std::time::Duration;

use crate::config::KdlConfig;

pub use head::HeadResult;

/// Blocking HTTP operations needed to download one file.
pub trait Transport {
    /// Declared size of `url` from a metadata-only (HEAD) request.
    fn content_length(&self, url: &str) -> Result<u64>;

    /// GETs `url`, handing each received buffer to `sink` in order.
    /// Returns the number of body bytes delivered.
    fn stream(&self, url: &str, sink: &mut dyn FnMut(&[u8]) -> Result<()>) -> Result<u64>;
}

/// Timeouts and identification shared by HEAD and GET handles.
#[derive(Debug, Clone)]
pub struct CurlOptions {
    pub connect_timeout: Duration,
    /// Upper bound on a whole transfer.
    pub timeout: Duration,
    pub user_agent: Option<String>,
    /// Receive buffer size hint passed to libcurl.
    pub buffer_size: Option<usize>,
}

impl Default for CurlOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            timeout: Duration::from_secs(3600),
            user_agent: None,
            buffer_size: None,
        }
    }
}

impl From<&KdlConfig> for CurlOptions {
    fn from(cfg: &KdlConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            user_agent: cfg.user_agent.clone(),
            buffer_size: Some(cfg.chunk_size),
        }
    }
}

/// libcurl-backed [`Transport`].
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    options: CurlOptions,
}

impl CurlTransport {
    pub fn new(options: CurlOptions) -> Self {
        Self { options }
    }

    /// Full HEAD metadata for `url`.
    pub fn probe(&self, url: &str) -> Result<HeadResult> {
        head::probe(self, url)
    }

    fn easy(&self, url: &str) -> Result<curl::easy::Easy> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url).context("invalid URL")?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.options.connect_timeout)?;
        easy.timeout(self.options.timeout)?;
        if let Some(ua) = &self.options.user_agent {
            easy.useragent(ua)?;
        }
        Ok(easy)
    }
}

impl Transport for CurlTransport {
    fn content_length(&self, url: &str) -> Result<u64> {
        let head = self.probe(url)?;
        head.content_length
            .with_context(|| format!("HEAD {} returned no Content-Length", url))
    }

    fn stream(&self, url: &str, sink: &mut dyn FnMut(&[u8]) -> Result<()>) -> Result<u64> {
        get::stream_body(self, url, sink)
    }
}
