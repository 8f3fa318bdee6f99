//! Filename extraction strategies for video URLs.

use regex::Regex;
use std::sync::OnceLock;

/// CDN layout: `.../file/<name>.mp4?<query>`.
const CDN_MP4_PATTERN: &str = r"file/(.*\.mp4)\?";

/// A video URL did not match any known shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("no filename pattern matches video URL: {url}")]
    Unmatched { url: String },
}

/// Strategy turning a video URL into the filename it should be saved under.
pub trait FilenameExtractor {
    /// Returns `None` when the URL has a shape this strategy does not know.
    fn extract(&self, url: &str) -> Option<String>;

    /// Like `extract`, but a non-matching URL is an error.
    fn require(&self, url: &str) -> Result<String, ExtractError> {
        self.extract(url).ok_or_else(|| ExtractError::Unmatched {
            url: url.to_string(),
        })
    }
}

impl<F> FilenameExtractor for F
where
    F: Fn(&str) -> Option<String>,
{
    fn extract(&self, url: &str) -> Option<String> {
        self(url)
    }
}

/// Extracts the first capture group of a regular expression.
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    pattern: Regex,
}

impl PatternExtractor {
    /// `pattern` must contain one capture group holding the filename.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl FilenameExtractor for PatternExtractor {
    fn extract(&self, url: &str) -> Option<String> {
        self.pattern
            .captures(url)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
    }
}

/// Default strategy for the platform's CDN URLs (`file/<name>.mp4?...`).
#[derive(Debug, Clone, Copy, Default)]
pub struct CdnFileExtractor;

impl CdnFileExtractor {
    fn pattern() -> &'static PatternExtractor {
        static PATTERN: OnceLock<PatternExtractor> = OnceLock::new();
        PATTERN.get_or_init(|| {
            PatternExtractor::new(CDN_MP4_PATTERN).expect("CDN filename pattern is valid")
        })
    }
}

impl FilenameExtractor for CdnFileExtractor {
    fn extract(&self, url: &str) -> Option<String> {
        Self::pattern().extract(url)
    }
}

/// Tries each strategy in order; the first match wins.
#[derive(Default)]
pub struct ExtractorChain {
    strategies: Vec<Box<dyn FilenameExtractor + Send + Sync>>,
}

impl ExtractorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a strategy tried after the ones already present.
    pub fn with(mut self, strategy: impl FilenameExtractor + Send + Sync + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }
}

impl FilenameExtractor for ExtractorChain {
    fn extract(&self, url: &str) -> Option<String> {
        self.strategies.iter().find_map(|s| s.extract(url))
    }
}

/// Filename of a CDN video URL, e.g. `lecture01.mp4` for
/// `https://cdn.example.com/file/lecture01.mp4?token=xyz`.
///
/// A URL without the `file/<name>.mp4?` shape means the API changed under us;
/// callers should not try to carry on with that video.
pub fn extract_filename(video_url: &str) -> Result<String, ExtractError> {
    CdnFileExtractor.require(video_url)
}
