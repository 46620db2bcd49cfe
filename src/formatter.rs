//! The formatting pipeline: JSONP detection, parsing, rendering, assembly.

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::document::assemble;
use crate::error::JsonLensError;
use crate::escape::escape_html;
use crate::jsonp::{detect_jsonp, JsonpDetection};
use crate::options::FormatOptions;
use crate::render::{render_value, LINE_BREAK};

/// Formats raw JSON and JSONP payloads into HTML documents.
///
/// The formatter is stateless between calls; formatting is a pure function
/// of the payload, the optional source url and [`Formatter::options`].
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    /// Formatting configuration. Public so callers can adjust settings
    /// directly after construction.
    pub options: FormatOptions,
}

impl Formatter {
    pub fn new() -> Self {
        Self { options: FormatOptions::default() }
    }

    /// Format a raw payload into a complete HTML document.
    ///
    /// Never fails: when the payload is not valid JSON (or is nested past
    /// the depth limit) the result is a diagnostic document carrying the
    /// parser's message and the original payload, so the return value is
    /// always displayable.
    pub fn format(&self, raw: &str, url: Option<&str>) -> String {
        let detection = if self.options.detect_jsonp {
            detect_jsonp(raw)
        } else {
            JsonpDetection::Unwrapped { json: raw }
        };

        let rendered = serde_json::from_str::<Value>(detection.json())
            .map_err(JsonLensError::from)
            .and_then(|value| {
                let wrapper = detection.callback().map(|cb| (cb, detection.trailer()));
                self.render_fragment(&value, wrapper)
            });

        match rendered {
            Ok(fragment) => assemble(&fragment, url, &self.options),
            Err(err) => {
                debug!("payload failed to parse: {}", err);
                self.error_document(&err, raw, url)
            }
        }
    }

    /// Render any serializable value as an HTML document.
    ///
    /// Fails only when the value cannot be represented as JSON (for
    /// example a map with non-string keys) or exceeds the depth limit.
    pub fn serialize<T: Serialize>(
        &self,
        value: &T,
        url: Option<&str>,
    ) -> Result<String, JsonLensError> {
        let value = serde_json::to_value(value)?;
        let fragment = self.render_fragment(&value, None)?;
        Ok(assemble(&fragment, url, &self.options))
    }

    /// Render a value into the page fragment, wrapping it in callback
    /// markup when the payload carried one.
    fn render_fragment(
        &self,
        value: &Value,
        wrapper: Option<(&str, &str)>,
    ) -> Result<String, JsonLensError> {
        // Under a callback the top-level container is indented one unit
        // and opens on its own line.
        let (indent, newline) = if wrapper.is_some() {
            (Some(""), LINE_BREAK)
        } else {
            (None, "")
        };
        let rendered = render_value(value, indent, newline, self.options.max_render_depth)?;
        let fragment = format!("<span id=\"json\">{}</span>", rendered);

        Ok(match wrapper {
            Some((callback, trailer)) => format!(
                "<span class=\"callback\">{}(</span>{}<span class=\"callback\">){}</span>",
                callback, fragment, trailer,
            ),
            None => fragment,
        })
    }

    /// Produce the diagnostic document for a payload that failed to parse.
    /// The fragment embeds the escaped message and the escaped original
    /// payload, not the detector's extracted span.
    fn error_document(&self, err: &JsonLensError, raw: &str, url: Option<&str>) -> String {
        let fragment = format!(
            "<div id=\"error\">Error parsing JSON: {}</div>\
             <h1>Document contents:</h1>\
             <span id=\"json\">{}</span>",
            escape_html(&err.message, false),
            escape_html(raw, false),
        );
        let title = match url {
            Some(url) => format!("{} - Error", url),
            None => "Error".to_string(),
        };
        assemble(&fragment, Some(&title), &self.options)
    }
}

/// Format a raw payload with default options.
///
/// Convenience wrapper over [`Formatter`]; like [`Formatter::format`] it
/// never fails.
pub fn format(raw: &str, url: Option<&str>) -> String {
    Formatter::new().format(raw, url)
}
