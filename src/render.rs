//! Conversion of parsed JSON values into HTML fragments.
//!
//! Rendering is a pure, depth-first fold over a [`serde_json::Value`].
//! Containers grow the indentation prefix by one unit per nesting level;
//! a newline token passed by the caller decides whether a non-empty
//! container opens on its own line. Only arrays and objects are foldable;
//! scalars never receive the newline/indent treatment.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::JsonLensError;
use crate::escape::{escape_html, escape_json_string};

/// Line break emitted between rendered rows. The embedded newline keeps the
/// generated markup readable line-by-line in page source.
pub(crate) const LINE_BREAK: &str = "<br\n/>";

/// One unit of indentation in the rendered markup.
const INDENT_UNIT: &str = "&nbsp; ";

/// A string value that is, in its entirety, an absolute URL: a scheme,
/// `://`, then non-whitespace to the end. Substring URLs do not count.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\w+://\S+$")
        .expect("URL detection pattern is a compile-time constant and must be valid")
});

fn span(class: &str, text: &str) -> String {
    format!("<span class=\"{}\">{}</span>", class, escape_html(text, false))
}

/// Convert a parsed JSON value into an HTML fragment.
///
/// `indent` is the indentation prefix accumulated so far; `None` marks the
/// top of the tree, where a container adds no indentation of its own.
/// `newline` is placed (followed by the indent) before a non-empty
/// container's opening bracket. `depth_left` bounds recursion; exhausting
/// it is an error the caller recovers from.
pub(crate) fn render_value(
    value: &Value,
    indent: Option<&str>,
    newline: &str,
    depth_left: usize,
) -> Result<String, JsonLensError> {
    if depth_left == 0 {
        return Err(JsonLensError::simple(
            "Depth limit exceeded while rendering - value nested too deeply",
        ));
    }

    let output = match value {
        Value::Null => span("null", "null"),
        Value::Bool(val) => span("bool", if *val { "true" } else { "false" }),
        Value::Number(num) => span("num", &num.to_string()),
        Value::String(val) => render_string(val),
        Value::Array(items) => {
            let indent = deepen(indent);
            render_array(items, &indent, newline, depth_left)?
        }
        Value::Object(entries) => {
            let indent = deepen(indent);
            render_object(entries, &indent, newline, depth_left)?
        }
    };
    Ok(output)
}

/// Grow the indent by one unit. The `None` sentinel means "no indentation
/// context yet": the top-level container itself sits flush left.
fn deepen(indent: Option<&str>) -> String {
    match indent {
        None => String::new(),
        Some(prefix) => format!("{}{}", prefix, INDENT_UNIT),
    }
}

fn render_string(text: &str) -> String {
    if URL_PATTERN.is_match(text) {
        format!(
            "\"<a href=\"{}\">{}</a>\"",
            escape_html(text, true),
            escape_json_string(text, false),
        )
    } else {
        format!("<span class=\"string\">{}</span>", escape_json_string(text, true))
    }
}

fn render_array(
    items: &[Value],
    indent: &str,
    newline: &str,
    depth_left: usize,
) -> Result<String, JsonLensError> {
    if items.is_empty() {
        return Ok("[]".to_string());
    }

    let mut body = String::new();
    for item in items {
        if !body.is_empty() {
            body.push_str(LINE_BREAK);
            body.push_str(indent);
            body.push_str(", ");
        }
        body.push_str(&render_value(item, Some(indent), "", depth_left - 1)?);
    }

    Ok(enclose("array", "[ ", &body, "]", indent, newline))
}

fn render_object(
    entries: &serde_json::Map<String, Value>,
    indent: &str,
    newline: &str,
    depth_left: usize,
) -> Result<String, JsonLensError> {
    if entries.is_empty() {
        return Ok("{}".to_string());
    }

    let mut body = String::new();
    for (key, value) in entries {
        if !body.is_empty() {
            body.push_str(LINE_BREAK);
            body.push_str(indent);
            body.push_str(", ");
        }
        body.push_str("<span class=\"prop\">");
        body.push_str(&escape_json_string(key, true));
        body.push_str("</span>: ");
        // Container values in an object open on a new line.
        body.push_str(&render_value(value, Some(indent), LINE_BREAK, depth_left - 1)?);
    }

    Ok(enclose("obj", "{ ", &body, "}", indent, newline))
}

/// Wrap a non-empty container body in the foldable span pair, opening after
/// the newline token and indent when a newline token was supplied.
fn enclose(class: &str, open: &str, body: &str, close: &str, indent: &str, newline: &str) -> String {
    let lead = if newline.is_empty() {
        String::new()
    } else {
        format!("{}{}", newline, indent)
    };
    format!(
        "<span class=\"unfolded {}\"><span class=\"content\">{}{}{}{}{}{}</span></span>",
        class, lead, open, body, LINE_BREAK, indent, close,
    )
}
