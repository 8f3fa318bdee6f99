//! Typed parse errors carrying the offending field path.

use std::fmt;

/// Why an API response could not be turned into entities.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The body is not valid JSON (e.g. an HTML error page).
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A required key is absent.
    #[error("missing field `{field}`")]
    MissingField { field: String },
    /// A key is present but holds the wrong JSON type.
    #[error("field `{field}` is not {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },
}

impl ParseError {
    /// Dotted path of the field at fault, if the error concerns one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ParseError::Json(_) => None,
            ParseError::MissingField { field } | ParseError::WrongType { field, .. } => {
                Some(field.as_str())
            }
        }
    }
}

/// Entries parsed before the first failure, together with that failure.
#[derive(Debug)]
pub struct Partial<T> {
    pub items: Vec<T>,
    pub error: ParseError,
}

impl<T> Partial<T> {
    pub(crate) fn new(items: Vec<T>, error: ParseError) -> Self {
        Self { items, error }
    }

    /// Discards the error, keeping the entries that did parse.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> fmt::Display for Partial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (kept {} entries parsed before it)",
            self.error,
            self.items.len()
        )
    }
}

impl<T: fmt::Debug> std::error::Error for Partial<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
