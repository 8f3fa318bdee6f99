//! Sessions list: `{"lectures": [{"order", "title", "course_session_path"}]}`.

use super::fields;
use super::{ParseError, Partial};
use crate::model::Session;
use crate::naming::slugify;

/// Sessions of `course`, in API order. On failure returns the sessions parsed
/// before the offending entry.
pub fn try_parse_sessions(text: &str, course: &str) -> Result<Vec<Session>, Partial<Session>> {
    let mut sessions = Vec::new();
    match collect(text, course, &mut sessions) {
        Ok(()) => Ok(sessions),
        Err(e) => Err(Partial::new(sessions, e)),
    }
}

fn collect(text: &str, course: &str, out: &mut Vec<Session>) -> Result<(), ParseError> {
    let root = fields::parse_json(text)?;
    let lectures = fields::array(&root, "lectures")?;
    for (i, lecture) in lectures.iter().enumerate() {
        let index = fields::integer(lecture, "lectures", i, "order")?;
        let title = fields::string(lecture, "lectures", i, "title")?;
        let path = fields::string(lecture, "lectures", i, "course_session_path")?;
        out.push(Session::new(course, index, slugify(title), path));
    }
    Ok(())
}
