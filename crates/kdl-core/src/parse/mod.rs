//! Turns course-platform API responses into entities.
//!
//! Each endpoint has a strict parser (`try_parse_*`) returning a typed result,
//! and a soft one (`parse_*`) that logs the failure through [`Diagnostics`]
//! and keeps going with what it has: courses fall back to an empty list,
//! sessions and videos keep the entries parsed before the first bad one.

mod courses;
mod error;
mod fields;
mod sessions;
mod videos;

use crate::diagnostics::Diagnostics;
use crate::model::{Session, Video};

pub use courses::try_parse_courses;
pub use error::{ParseError, Partial};
pub use sessions::try_parse_sessions;
pub use videos::{try_parse_videos, video_url_key};

/// Course slugs from a courses response; empty on any failure.
pub fn parse_courses(text: &str, diag: &dyn Diagnostics) -> Vec<String> {
    match try_parse_courses(text) {
        Ok(courses) => courses,
        Err(e) => {
            diag.warning(&format!(
                "Error getting the courses list ({}). Check that you're enrolled on selected courses.",
                e
            ));
            Vec::new()
        }
    }
}

/// Sessions from a lectures response; partial on failure.
pub fn parse_sessions(text: &str, course: &str, diag: &dyn Diagnostics) -> Vec<Session> {
    match try_parse_sessions(text, course) {
        Ok(sessions) => sessions,
        Err(partial) => {
            diag.exception(&format!("Error while getting sessions: {}", partial));
            partial.into_items()
        }
    }
}

/// Videos at `resolution` from a videos response; partial on failure.
pub fn parse_videos(
    text: &str,
    resolution: u32,
    session: &Session,
    diag: &dyn Diagnostics,
) -> Vec<Video> {
    match try_parse_videos(text, resolution, session) {
        Ok(videos) => videos,
        Err(partial) => {
            diag.exception(&format!("Error getting videos: {}", partial));
            partial.into_items()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{Level, RecordingDiagnostics};

    fn session() -> Session {
        Session::new("foo-bar", 1, "intro", "/courses/foo-bar/sessions/1")
    }

    #[test]
    fn courses_ok_logs_nothing() {
        let diag = RecordingDiagnostics::new();
        let courses = parse_courses(
            r#"{"courses": [{"course_path": "https://example.com/courses/foo-bar"}]}"#,
            &diag,
        );
        assert_eq!(courses, vec!["foo-bar".to_string()]);
        assert!(diag.entries().is_empty());
    }

    #[test]
    fn courses_not_json_is_empty_with_warning() {
        let diag = RecordingDiagnostics::new();
        let courses = parse_courses("<html>502 Bad Gateway</html>", &diag);
        assert!(courses.is_empty());
        assert_eq!(diag.count(Level::Warning), 1);
        let (_, msg) = &diag.entries()[0];
        assert!(msg.contains("enrolled"));
    }

    #[test]
    fn sessions_missing_lectures_is_empty_with_one_exception() {
        let diag = RecordingDiagnostics::new();
        let sessions = parse_sessions(r#"{"sessions": []}"#, "foo-bar", &diag);
        assert!(sessions.is_empty());
        assert_eq!(diag.entries().len(), 1);
        assert_eq!(diag.count(Level::Exception), 1);
        assert!(diag.entries()[0].1.contains("lectures"));
    }

    #[test]
    fn sessions_keep_entries_before_failure() {
        let diag = RecordingDiagnostics::new();
        let body = r#"{"lectures": [
            {"order": 1, "title": "Intro", "course_session_path": "/s/1"},
            {"order": 2, "course_session_path": "/s/2"},
            {"order": 3, "title": "Third", "course_session_path": "/s/3"}
        ]}"#;
        let sessions = parse_sessions(body, "foo-bar", &diag);
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].name, "intro");
        assert_eq!(diag.count(Level::Exception), 1);
        assert!(diag.entries()[0].1.contains("lectures[1].title"));
    }

    #[test]
    fn videos_keep_entries_before_failure() {
        let diag = RecordingDiagnostics::new();
        let body = r#"{"videos": [
            {"order": 1, "title": "A", "h264_720_url": "https://cdn.example.com/file/720.mp4?x=1"},
            {"order": 2, "title": "B", "h264_480_url": "https://cdn.example.com/file/480.mp4?x=1"}
        ]}"#;
        let videos = parse_videos(body, 720, &session(), &diag);
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title, "A");
        assert_eq!(diag.count(Level::Exception), 1);
        assert!(diag.entries()[0].1.contains("videos[1].h264_720_url"));
    }

    #[test]
    fn videos_ok_logs_nothing() {
        let diag = RecordingDiagnostics::new();
        let body = r#"{"videos": []}"#;
        assert!(parse_videos(body, 720, &session(), &diag).is_empty());
        assert!(diag.entries().is_empty());
    }
}
