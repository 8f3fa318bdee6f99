//! Courses list: `{"courses": [{"course_path": "..."}]}`.

use super::fields;
use super::ParseError;
use crate::model::format_course;

/// Course slugs (trailing path segment of each `course_path`), in API order.
pub fn try_parse_courses(text: &str) -> Result<Vec<String>, ParseError> {
    let root = fields::parse_json(text)?;
    let entries = fields::array(&root, "courses")?;
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| fields::string(entry, "courses", i, "course_path").map(format_course))
        .collect()
}
