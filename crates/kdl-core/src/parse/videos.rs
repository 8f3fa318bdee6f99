//! Videos list: `{"videos": [{"order", "title", "h264_<resolution>_url"}]}`.

use super::fields;
use super::{ParseError, Partial};
use crate::model::{Session, Video};

/// Key holding the URL of the `resolution` encoding, e.g. `h264_720_url`.
pub fn video_url_key(resolution: u32) -> String {
    format!("h264_{}_url", resolution)
}

/// Videos of `session` at `resolution`, in API order. On failure returns the
/// videos parsed before the offending entry.
pub fn try_parse_videos(
    text: &str,
    resolution: u32,
    session: &Session,
) -> Result<Vec<Video>, Partial<Video>> {
    let mut videos = Vec::new();
    match collect(text, &video_url_key(resolution), session, &mut videos) {
        Ok(()) => Ok(videos),
        Err(e) => Err(Partial::new(videos, e)),
    }
}

fn collect(
    text: &str,
    url_key: &str,
    session: &Session,
    out: &mut Vec<Video>,
) -> Result<(), ParseError> {
    let root = fields::parse_json(text)?;
    let entries = fields::array(&root, "videos")?;
    for (i, entry) in entries.iter().enumerate() {
        let index = fields::integer(entry, "videos", i, "order")?;
        let title = fields::string(entry, "videos", i, "title")?;
        let url = fields::string(entry, "videos", i, url_key)?;
        out.push(Video {
            session: session.clone(),
            index,
            title: title.to_string(),
            url: url.to_string(),
        });
    }
    Ok(())
}
