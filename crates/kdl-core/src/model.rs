//! Course, session and video records built from API responses.

/// One lecture/session within a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Course slug the session belongs to.
    pub course: String,
    /// Remote `order` value; not reassigned, duplicates pass through.
    pub index: i64,
    /// Slugified session title.
    pub name: String,
    /// `course_session_path` as returned by the API.
    pub path: String,
}

impl Session {
    pub fn new(
        course: impl Into<String>,
        index: i64,
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            course: course.into(),
            index,
            name: name.into(),
            path: path.into(),
        }
    }

    /// Directory name for this session's videos, e.g. `3-intro-to-systems`.
    pub fn directory_name(&self) -> String {
        format!("{}-{}", self.index, self.name)
    }
}

/// One downloadable video belonging to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub session: Session,
    pub index: i64,
    /// Raw title as returned by the API (not slugified).
    pub title: String,
    /// Source URL for the selected resolution.
    pub url: String,
}

/// Returns the trailing `/`-separated segment of a course path.
///
/// `"https://example.com/courses/foo-bar"` → `"foo-bar"`.
pub fn format_course(course_path: &str) -> String {
    course_path
        .rsplit('/')
        .next()
        .unwrap_or(course_path)
        .to_string()
}
