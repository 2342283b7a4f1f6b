//! Link rendering.

/// Render a link as either a bare autolink or the bracketed form.
///
/// When the visible text is identical to the destination the URL is
/// emitted bare, preventing already-bare URLs from being wrapped into
/// redundant `<...>` or `[url](url)` forms. The URL itself is never
/// escaped here; the escaping policy covers only literal prose text.
pub fn render_link(text: &str, url: &str) -> String {
    if text == url {
        url.to_string()
    } else {
        format!("[{text}]({url})")
    }
}
