//! Escaping for the two contexts rendered markup is built from: literal
//! text placed directly into HTML, and the bodies of JSON string literals.

/// Escape text for safe inclusion in HTML markup.
///
/// Replaces `&`, `<` and `>` unconditionally. With `attribute` set, double
/// quotes are also replaced so the result can sit inside a double-quoted
/// attribute value.
pub fn escape_html(text: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render `text` as the body of a JSON string literal, HTML-escaped.
///
/// Backslash and quote escaping follow standard JSON string-literal rules;
/// backspace, form feed, newline, carriage return and tab always appear as
/// their short forms (`\b`, `\f`, `\n`, `\r`, `\t`), never as numeric
/// escapes. With `quoted` set, the surrounding quote characters are
/// included in the output.
pub fn escape_json_string(text: &str, quoted: bool) -> String {
    let literal = serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text));
    // Strip the quotes serde_json wraps the literal in; they are one byte
    // each, so byte slicing is safe.
    let body = escape_html(&literal[1..literal.len() - 1], false);
    if quoted {
        format!("\"{}\"", body)
    } else {
        body
    }
}
