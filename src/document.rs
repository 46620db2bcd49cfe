//! Assembly of complete HTML documents around rendered fragments.

use crate::escape::escape_html;
use crate::options::FormatOptions;

/// Wrap an HTML fragment in a complete, self-contained document: doctype,
/// head with the escaped title and the stylesheet/script references, body
/// holding the fragment followed by a trailing line break.
///
/// The fragment is trusted as-is; assembly never validates it. The output
/// is well-formed regardless.
pub(crate) fn assemble(fragment: &str, title: Option<&str>, options: &FormatOptions) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html><head><title>{}</title>\n\
         <link rel=\"stylesheet\" type=\"text/css\" href=\"{}\">\n\
         <script type=\"text/javascript\" src=\"{}\"></script>\n\
         </head><body>\n{}<br\n/></body></html>",
        escape_html(title.unwrap_or(""), false),
        escape_html(&options.stylesheet_href, true),
        escape_html(&options.script_src, true),
        fragment,
    )
}
