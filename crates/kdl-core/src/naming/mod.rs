//! Local filenames for videos.
//!
//! Extracts the CDN filename from a video URL through a pluggable
//! [`FilenameExtractor`] and derives the titled filename written to disk.

mod extract;
mod title;

pub use extract::{
    extract_filename, CdnFileExtractor, ExtractError, ExtractorChain, FilenameExtractor,
    PatternExtractor,
};
pub use title::derive_video_title;

/// Lowercase, hyphen-separated, ASCII-transliterated form of `text`.
pub fn slugify(text: &str) -> String {
    slug::slugify(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_titles() {
        assert_eq!(slugify("Intro to Systems!"), "intro-to-systems");
        assert_eq!(slugify("  Memory  &  Caches "), "memory-caches");
        assert_eq!(slugify("Déjà Vu"), "deja-vu");
        assert_eq!(slugify("Lecture 01"), "lecture-01");
    }

    #[test]
    fn slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
