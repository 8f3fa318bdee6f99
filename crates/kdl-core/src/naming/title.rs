//! Titled filenames: `720.mp4` + "Intro to Systems!" → `720p_intro-to-systems.mp4`.

use super::slugify;

/// Builds the on-disk name for a video from its raw title and CDN filename.
///
/// The CDN stem carries the resolution (`720`, or `720p`); the result is
/// `<stem>p_<slug>.<ext>`. A resolution stem like `720p` keeps its single `p`;
/// any other stem always gets one appended. Extra dots in the stem become `_`.
/// A filename without an extension is returned as is.
pub fn derive_video_title(raw_title: &str, filename: &str) -> String {
    let Some((stem, ext)) = filename.rsplit_once('.') else {
        return filename.to_string();
    };
    let stem = stem.replace('.', "_");
    let stem = stem
        .strip_suffix('p')
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or(&stem);
    format!("{}p_{}.{}", stem, slugify(raw_title), ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_slug_after_resolution() {
        assert_eq!(
            derive_video_title("Intro to Systems!", "720p.mp4"),
            "720p_intro-to-systems.mp4"
        );
        assert_eq!(
            derive_video_title("Intro to Systems!", "720.mp4"),
            "720p_intro-to-systems.mp4"
        );
    }

    #[test]
    fn non_resolution_stem_keeps_its_p() {
        assert_eq!(derive_video_title("Intro", "setup.mp4"), "setupp_intro.mp4");
        assert_eq!(derive_video_title("Intro", "p.mp4"), "pp_intro.mp4");
        assert_eq!(derive_video_title("Intro", "v2p.mp4"), "v2pp_intro.mp4");
    }

    #[test]
    fn multi_dot_stem_joined_with_underscore() {
        assert_eq!(derive_video_title("Week 1", "a.b.mp4"), "a_bp_week-1.mp4");
    }

    #[test]
    fn no_extension_falls_back() {
        assert_eq!(derive_video_title("Anything", "720"), "720");
        assert_eq!(derive_video_title("Anything", ""), "");
    }

    #[test]
    fn empty_slug_still_builds_name() {
        assert_eq!(derive_video_title("???", "480.mp4"), "480p_.mp4");
    }
}
