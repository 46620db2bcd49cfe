use std::fmt::{self, Display};

/// A position within the raw input text, as reported by the JSON parser.
///
/// Lines and columns are one-indexed, matching `serde_json`'s reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputPosition {
    /// Line number (one-indexed).
    pub line: usize,
    /// Column number within the line (one-indexed).
    pub column: usize,
}

/// Error raised while parsing or rendering a payload.
///
/// The message is plain text; embedding it in markup requires HTML-escaping
/// first.
#[derive(Debug, Clone)]
pub struct JsonLensError {
    pub message: String,
    pub input_position: Option<InputPosition>,
}

impl JsonLensError {
    pub fn new(message: impl Into<String>, pos: Option<InputPosition>) -> Self {
        Self { message: message.into(), input_position: pos }
    }

    pub fn simple(message: impl Into<String>) -> Self {
        Self::new(message, None)
    }
}

impl Display for JsonLensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for JsonLensError {}

impl From<serde_json::Error> for JsonLensError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json reports line 0 for errors with no input location.
        let pos = if err.line() == 0 {
            None
        } else {
            Some(InputPosition { line: err.line(), column: err.column() })
        };
        Self::new(err.to_string(), pos)
    }
}
