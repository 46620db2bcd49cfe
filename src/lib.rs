//! # jsonlens
//!
//! Render a raw JSON or JSONP payload as a syntax-highlighted, navigable
//! HTML document.
//!
//! jsonlens is the formatting core of a JSON viewer: it takes the text of
//! an HTTP response body and produces a self-contained HTML page a human
//! can inspect as structured, clickable markup instead of raw text:
//!
//! - An optional JSONP callback wrapper (`cb({...});`) is recognized and
//!   rendered as callback markup around the value
//! - Values are wrapped in classified spans (`bool`, `num`, `string`,
//!   `null`, `prop`) that a stylesheet can color and a script can fold
//! - String values that are absolute URLs become links
//! - Invalid payloads produce a diagnostic document carrying the parser's
//!   message and the original text, so formatting never fails
//!
//! ## Command-Line Tool
//!
//! This crate includes the `jlens` CLI tool for formatting payloads from
//! the terminal:
//!
//! ```sh
//! # Install
//! cargo install jsonlens
//!
//! # Format JSON from stdin
//! echo '{"a":1,"b":2}' | jlens > out.html
//!
//! # Format a saved response, titling the page with its source url
//! jlens response.json --url https://api.example.com/v1/items -o out.html
//! ```
//!
//! Run `jlens --help` for all options.
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonlens::format;
//!
//! let payload = r#"handleData({"name":"Alice","active":true});"#;
//! let html = format(payload, Some("https://api.example.com/users/1"));
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Serializing Rust Types
//!
//! Any type implementing [`serde::Serialize`] can be rendered directly:
//!
//! ```rust
//! use jsonlens::Formatter;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Player {
//!     name: String,
//!     scores: Vec<i32>,
//! }
//!
//! let player = Player {
//!     name: "Alice".into(),
//!     scores: vec![95, 87, 92],
//! };
//!
//! let formatter = Formatter::new();
//! let html = formatter.serialize(&player, None).unwrap();
//! ```
//!
//! ## Configuration
//!
//! Customize behavior through [`FormatOptions`]:
//!
//! ```rust
//! use jsonlens::Formatter;
//!
//! let mut formatter = Formatter::new();
//! formatter.options.stylesheet_href = "assets/json.css".to_string();
//! formatter.options.detect_jsonp = false;
//!
//! let html = formatter.format(r#"{"values":[1,2,3]}"#, None);
//! ```
//!
//! ## Limitations
//!
//! JSONP detection is a pattern match, not a JavaScript parser. Payloads
//! with comments, multiple statements, or nested call expressions are
//! treated as plain JSON (and typically produce the error document). See
//! [`detect_jsonp`] for details.

mod document;
mod error;
mod escape;
mod formatter;
mod jsonp;
mod options;
mod render;

pub use crate::error::{InputPosition, JsonLensError};
pub use crate::formatter::{format, Formatter};
pub use crate::jsonp::{detect_jsonp, JsonpDetection};
pub use crate::options::FormatOptions;
