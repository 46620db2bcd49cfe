/// Configuration options for HTML rendering.
///
/// Use [`Default::default()`] or [`FormatOptions::recommended()`] for the
/// canonical output shape, then modify individual fields as needed.
///
/// # Example
///
/// ```rust
/// use jsonlens::FormatOptions;
///
/// let mut options = FormatOptions::default();
/// options.stylesheet_href = "assets/json.css".to_string();
/// options.detect_jsonp = false;
/// ```
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Stylesheet referenced from every generated document's head.
    /// Default: `"json.css"`.
    pub stylesheet_href: String,

    /// Live-reload script referenced from every generated document's head.
    /// Default: `"live.js"`.
    pub script_src: String,

    /// Attempt to strip a JSONP callback wrapper before parsing. When
    /// disabled, the payload goes to the parser untouched and a wrapped
    /// payload yields the error document.
    /// Default: true.
    pub detect_jsonp: bool,

    /// Maximum nesting depth rendered before the payload is reported as an
    /// error document instead. serde_json's own parse recursion limit is
    /// lower, so this only comes into play for values built in memory.
    /// Default: 512.
    pub max_render_depth: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            stylesheet_href: "json.css".to_string(),
            script_src: "live.js".to_string(),
            detect_jsonp: true,
            max_render_depth: 512,
        }
    }
}

impl FormatOptions {
    /// Creates a new `FormatOptions` with recommended settings.
    ///
    /// Currently identical to [`Default::default()`], but may include
    /// improved defaults in future versions without breaking compatibility.
    pub fn recommended() -> Self {
        Self::default()
    }
}
