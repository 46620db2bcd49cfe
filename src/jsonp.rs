//! JSONP callback detection.
//!
//! A JSONP response wraps a JSON literal in a single callback invocation,
//! e.g. `handleData({"x": 1});`. Detection is a single anchored pattern
//! match, not a JavaScript grammar: payloads containing comments, multiple
//! statements, or nested call expressions are not recognized and fall
//! through as plain (usually invalid) JSON. That narrowness is intentional;
//! the common single-callback, single-statement form is the target.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

/// Matches a callback invocation wrapping a JSON literal: optional leading
/// whitespace (including zero-width space and BOM), a callback expression
/// built from word characters, `$`, brackets and dots, the parenthesized
/// span (which must open with `{` or `[` and close with `}` or `]`), then
/// optional trailing whitespace and semicolons. Compiled once at first use.
static JSONP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)^[\s\u{200B}\u{FEFF}]*([\w$\[\]\.]+)[\s\u{200B}\u{FEFF}]*\([\s\u{200B}\u{FEFF}]*([\[\{].*[\]\}])[\s\u{200B}\u{FEFF}]*\)([\s\u{200B}\u{FEFF};]*)$",
    )
    .expect("JSONP detection pattern is a compile-time constant and must be valid")
});

/// Outcome of JSONP detection on a raw payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonpDetection<'a> {
    /// The payload is a callback invocation around a JSON literal.
    Wrapped {
        /// The callback expression preceding the opening parenthesis.
        callback: &'a str,
        /// The span between the parentheses, the candidate JSON text.
        json: &'a str,
        /// The semicolons found after the closing parenthesis. Any other
        /// trailing characters the pattern admitted are dropped.
        trailer: String,
    },
    /// No callback wrapper was found; the whole payload is the candidate.
    Unwrapped {
        /// The payload, unchanged.
        json: &'a str,
    },
}

impl<'a> JsonpDetection<'a> {
    /// The candidate JSON text to hand to the parser.
    pub fn json(&self) -> &'a str {
        match self {
            JsonpDetection::Wrapped { json, .. } => json,
            JsonpDetection::Unwrapped { json } => json,
        }
    }

    /// The detected callback expression, if any.
    pub fn callback(&self) -> Option<&'a str> {
        match self {
            JsonpDetection::Wrapped { callback, .. } => Some(callback),
            JsonpDetection::Unwrapped { .. } => None,
        }
    }

    /// The retained trailing semicolons; empty when unwrapped.
    pub fn trailer(&self) -> &str {
        match self {
            JsonpDetection::Wrapped { trailer, .. } => trailer,
            JsonpDetection::Unwrapped { .. } => "",
        }
    }
}

/// Split an optional JSONP callback wrapper from a raw payload.
///
/// On no match the payload is returned whole as
/// [`JsonpDetection::Unwrapped`]; detection never fails.
pub fn detect_jsonp(payload: &str) -> JsonpDetection<'_> {
    match JSONP_PATTERN.captures(payload) {
        Some(caps) => {
            let callback = caps.get(1).map_or("", |m| m.as_str());
            let json = caps.get(2).map_or("", |m| m.as_str());
            let trailer: String = caps
                .get(3)
                .map_or("", |m| m.as_str())
                .chars()
                .filter(|&c| c == ';')
                .collect();
            debug!("detected JSONP callback {:?}", callback);
            JsonpDetection::Wrapped { callback, json, trailer }
        }
        None => JsonpDetection::Unwrapped { json: payload },
    }
}
